//! Midpoint insertion between two neighbouring positions.
//!
//! The calculator never fails. When the neighbours sit too close to the floor
//! the result is clamped to `min_position_value`, which may collide with a
//! neighbour; the integrity checker catches that and falls back to a renumber.

use crate::config::ReorderConfig;

/// Computes the position for an entity dropped between `prev` and `next`.
///
/// # Arguments
/// * `config` - Thresholds; only `min_position_value` is used here
/// * `prev` - Position of the entity that will precede it, if any
/// * `next` - Position of the entity that will follow it, if any
///
/// # Examples
///
/// ```
/// use reorder::{ReorderConfig, compute_candidate};
///
/// let config = ReorderConfig::default();
/// assert_eq!(compute_candidate(&config, Some(100.0), Some(200.0)), 150.0);
/// assert_eq!(compute_candidate(&config, None, Some(100.0)), 99.0);
/// assert_eq!(compute_candidate(&config, Some(300.0), None), 301.0);
/// assert_eq!(compute_candidate(&config, None, None), 1.0);
/// ```
pub fn compute_candidate(config: &ReorderConfig, prev: Option<f64>, next: Option<f64>) -> f64 {
    let floor = config.min_position_value;
    match (prev, next) {
        (None, None) => floor,
        (None, Some(next)) => floor.max(next - 1.0),
        (Some(prev), None) => prev + 1.0,
        (Some(prev), Some(next)) => floor.max(midpoint(prev, next)),
    }
}

/// Arithmetic mean, halving first only when the plain sum would overflow.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}
