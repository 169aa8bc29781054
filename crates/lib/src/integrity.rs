//! Detection of position states that force a full renumber.
//!
//! Two kinds of problems are looked for:
//!
//! - **Stored corruption** anywhere in the original collection: positions
//!   under the floor (or non-finite) and positions shared by more than one
//!   entity. Any of these forces a repair even if the move itself is harmless.
//! - **Exhausted spacing** around the move target: the candidate lands closer
//!   than `min_position_gap` to a neighbour, below the floor, or behind an
//!   entity that has no position at all.
//!
//! A single-entity collection is always clean.

use serde::Serialize;

use crate::{
    config::ReorderConfig,
    entity::Orderable,
    sequence::{Neighbors, sort_by_position},
};

/// One reason a renumber was required.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Violation {
    /// The computed candidate is below `min_position_value`.
    CandidateBelowMinimum { candidate: f64 },
    /// A stored position is below the floor or is not a finite number.
    InvalidPosition { id: String, position: f64 },
    /// Several entities share the same stored position.
    DuplicatePosition { position: f64, ids: Vec<String> },
    /// The candidate sits closer than the minimum gap to the previous neighbour.
    TooCloseToPrevious { id: String, distance: f64 },
    /// The candidate sits closer than the minimum gap to the next neighbour.
    TooCloseToNext { id: String, distance: f64 },
    /// The previous neighbour has no position, so no value can order the move.
    UnpositionedPrevious { id: String },
}

impl Violation {
    /// True for violations found in the stored data rather than caused by the move.
    pub fn is_stored_corruption(&self) -> bool {
        matches!(
            self,
            Violation::InvalidPosition { .. } | Violation::DuplicatePosition { .. }
        )
    }
}

/// Outcome of an integrity check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    /// True when no renumber is needed.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_stored_corruption(&self) -> bool {
        self.violations.iter().any(Violation::is_stored_corruption)
    }
}

/// Returns true if moving `moved_id` to `target_index` with position
/// `candidate` requires renumbering the whole collection.
///
/// See [`check`] for the individual conditions.
pub fn needs_renumber<T: Orderable>(
    entities: &[T],
    target_index: usize,
    candidate: f64,
    moved_id: &str,
    config: &ReorderConfig,
) -> bool {
    !check(entities, target_index, candidate, moved_id, config).is_clean()
}

/// Runs every integrity condition and reports which ones failed.
///
/// Corruption checks run against `entities` as given. Spacing checks run
/// against the neighbours of `target_index` in the sorted collection with
/// `moved_id` removed.
pub fn check<T: Orderable>(
    entities: &[T],
    target_index: usize,
    candidate: f64,
    moved_id: &str,
    config: &ReorderConfig,
) -> IntegrityReport {
    let mut reduced = sort_by_position(entities);
    reduced.retain(|e| e.id() != moved_id);
    let index = target_index.min(reduced.len());
    let neighbors = Neighbors::at(&reduced, index);
    check_with_neighbors(entities, &neighbors, candidate, config)
}

/// Same as [`check`], for callers that already resolved the neighbours.
pub(crate) fn check_with_neighbors<T: Orderable>(
    entities: &[T],
    neighbors: &Neighbors<'_, T>,
    candidate: f64,
    config: &ReorderConfig,
) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    if entities.len() <= 1 {
        return report;
    }

    if candidate < config.min_position_value {
        report
            .violations
            .push(Violation::CandidateBelowMinimum { candidate });
    }

    report
        .violations
        .extend(invalid_positions(entities, config.min_position_value));
    report.violations.extend(duplicate_positions(entities));

    if let Some(prev) = neighbors.prev {
        match prev.position() {
            Some(position) => {
                let distance = (candidate - position).abs();
                if distance < config.min_position_gap {
                    report.violations.push(Violation::TooCloseToPrevious {
                        id: prev.id().to_string(),
                        distance,
                    });
                }
            }
            None => report.violations.push(Violation::UnpositionedPrevious {
                id: prev.id().to_string(),
            }),
        }
    }

    if let Some(next) = neighbors.next
        && let Some(position) = next.position()
    {
        let distance = (candidate - position).abs();
        if distance < config.min_position_gap {
            report.violations.push(Violation::TooCloseToNext {
                id: next.id().to_string(),
                distance,
            });
        }
    }

    for violation in &report.violations {
        tracing::trace!(?violation, "Integrity violation");
    }
    report
}

fn invalid_positions<T: Orderable>(entities: &[T], floor: f64) -> Vec<Violation> {
    entities
        .iter()
        .filter_map(|e| {
            let position = e.position()?;
            (!position.is_finite() || position < floor).then(|| Violation::InvalidPosition {
                id: e.id().to_string(),
                position,
            })
        })
        .collect()
}

fn duplicate_positions<T: Orderable>(entities: &[T]) -> Vec<Violation> {
    let mut positioned: Vec<(f64, &str)> = entities
        .iter()
        .filter_map(|e| e.position().map(|p| (p, e.id())))
        .collect();
    positioned.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut duplicates: Vec<Violation> = Vec::new();
    for pair in positioned.windows(2) {
        let ((a, a_id), (b, b_id)) = (pair[0], pair[1]);
        if a != b {
            continue;
        }
        match duplicates.last_mut() {
            Some(Violation::DuplicatePosition { position, ids }) if *position == a => {
                ids.push(b_id.to_string());
            }
            _ => duplicates.push(Violation::DuplicatePosition {
                position: a,
                ids: vec![a_id.to_string(), b_id.to_string()],
            }),
        }
    }
    duplicates
}
