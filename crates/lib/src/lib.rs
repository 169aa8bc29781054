//!
//! Reorder: minimal-delta reordering for collections keyed by fractional positions.
//!
//! Given a snapshot of a collection and a request to move one entity to a new
//! index, the engine computes the smallest set of position writes that realise
//! the move, and silently repairs corrupt state along the way.
//!
//! ## Core Concepts
//!
//! * **Entities (`entity::Orderable`)**: Anything with an id and an optional
//!   fractional position. `entity::Item` is a ready-made implementor.
//! * **Sequencer (`sequence::sort_by_position`)**: Stable ascending order with
//!   unpositioned entities last.
//! * **Position Calculator (`position::compute_candidate`)**: Midpoint insertion
//!   between the new neighbours, clamped to the configured floor.
//! * **Integrity Checker (`integrity::needs_renumber`)**: Finds duplicate,
//!   sub-minimum, or too tightly spaced positions.
//! * **Renumberer (`renumber::renumber_all`)**: Evenly respaces a whole sequence
//!   when the integrity check fails.
//! * **Engine (`engine::compute_reorder`)**: Ties the above together and returns
//!   the change records to persist.
//!
//! Fetching the snapshot and writing the changes back, atomically, is the
//! caller's job. The engine performs no I/O of its own.

pub mod config;
pub mod engine;
pub mod entity;
pub mod errors;
pub mod integrity;
pub mod position;
pub mod renumber;
pub mod sequence;

pub use config::{ConfigError, ReorderConfig};
pub use engine::{
    ChangeRecord, Move, ReorderOutcome, ReorderResult, apply_changes, compute_reorder,
    compute_reorder_from_order, detect_move,
};
pub use entity::{Item, Orderable};
pub use errors::ReorderError;
pub use integrity::{IntegrityReport, Violation, needs_renumber};
pub use position::compute_candidate;
pub use renumber::renumber_all;
pub use sequence::sort_by_position;

/// Result type used throughout the Reorder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Reorder library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the engine
    #[error(transparent)]
    Reorder(ReorderError),

    /// Structured configuration errors
    #[error(transparent)]
    Config(ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Reorder(_) => "reorder",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a requested entity was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Reorder(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error was caused by caller input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Reorder(_) | Error::Config(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
