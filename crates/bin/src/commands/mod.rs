pub mod apply;
pub mod diff;
pub mod moves;
pub mod sort;
