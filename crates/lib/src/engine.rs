//! The reorder entry point.
//!
//! [`compute_reorder`] turns "move entity X to index N" into the smallest set
//! of position updates that realises it. The common case writes one row: the
//! moved entity gets the midpoint of its new neighbours. When the stored data
//! is corrupt, or the neighbours are packed too tightly, every entity is
//! renumbered instead and all of them are emitted.
//!
//! Everything here is pure. Inputs are never mutated and nothing is kept
//! between calls, so callers may run it from any number of threads. Callers
//! that read, reorder and write back the same collection concurrently must
//! serialise those cycles themselves.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    config::ReorderConfig,
    entity::Orderable,
    errors::ReorderError,
    integrity::{self, Violation},
    position::compute_candidate,
    renumber::renumber_all,
    sequence::{Neighbors, sort_by_position},
};

/// A single position update the persistence layer must apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub id: String,
    pub position: f64,
}

/// Which path the engine took to realise a move.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReorderOutcome {
    /// Only the moved entity changed.
    Moved,
    /// The whole collection was renumbered for the listed reasons.
    Renumbered { violations: Vec<Violation> },
}

/// The result of [`compute_reorder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResult<T> {
    /// Updates to persist, keyed by id.
    pub changes: Vec<ChangeRecord>,
    /// The complete collection in its final order, positions applied.
    pub ordered_entities: Vec<T>,
    pub outcome: ReorderOutcome,
}

impl<T> ReorderResult<T> {
    /// True if the collection had to be renumbered.
    pub fn is_renumbered(&self) -> bool {
        matches!(self.outcome, ReorderOutcome::Renumbered { .. })
    }
}

/// A single move: put `id` at `target_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    pub target_index: usize,
}

/// Computes the position updates that move `move_id` to `target_index`.
///
/// `target_index` is the index the entity should occupy in the final sorted
/// sequence. Pass `&ReorderConfig::default()` for the standard thresholds.
///
/// # Errors
///
/// Fails without producing any output if the collection is empty, `move_id`
/// is empty, `target_index` is out of `[0, len - 1]`, no entity has
/// `move_id`, two entities share an id, or `config` does not validate
/// (including a spacing too large to renumber this many entities).
///
/// # Examples
///
/// ```
/// use reorder::{Item, ReorderConfig, compute_reorder};
///
/// let items = vec![Item::at("A", 100.0), Item::at("B", 200.0), Item::at("C", 300.0)];
/// let result = compute_reorder(&items, "C", 1, &ReorderConfig::default()).unwrap();
///
/// assert_eq!(result.changes.len(), 1);
/// assert_eq!(result.changes[0].id, "C");
/// assert_eq!(result.changes[0].position, 150.0);
/// ```
pub fn compute_reorder<T: Orderable>(
    entities: &[T],
    move_id: &str,
    target_index: usize,
    config: &ReorderConfig,
) -> Result<ReorderResult<T>, ReorderError> {
    validate_request(entities, move_id, target_index)?;
    config.validate()?;
    config.validate_for_len(entities.len())?;

    let mut reduced = sort_by_position(entities);
    let from_index = reduced
        .iter()
        .position(|e| e.id() == move_id)
        .ok_or_else(|| ReorderError::EntityNotFound {
            id: move_id.to_string(),
        })?;
    let mut moved = reduced.remove(from_index);

    let neighbors = Neighbors::at(&reduced, target_index);
    let candidate = compute_candidate(
        config,
        neighbors.prev_position(),
        neighbors.next_position(),
    );
    let report = integrity::check_with_neighbors(entities, &neighbors, candidate, config);

    tracing::debug!(
        move_id,
        from_index,
        target_index,
        prev = ?neighbors.prev_position(),
        next = ?neighbors.next_position(),
        candidate,
        "Computed candidate position"
    );

    moved.set_position(candidate);
    let mut tentative = reduced;
    tentative.insert(target_index, moved);

    if report.is_clean() {
        return Ok(ReorderResult {
            changes: vec![ChangeRecord {
                id: move_id.to_string(),
                position: candidate,
            }],
            ordered_entities: tentative,
            outcome: ReorderOutcome::Moved,
        });
    }

    tracing::debug!(
        move_id,
        entities = entities.len(),
        violations = report.violations.len(),
        "Integrity check failed, renumbering collection"
    );

    let ordered_entities = renumber_all(&tentative, config);
    let changes = ordered_entities
        .iter()
        .filter_map(|e| {
            e.position().map(|position| ChangeRecord {
                id: e.id().to_string(),
                position,
            })
        })
        .collect();

    Ok(ReorderResult {
        changes,
        ordered_entities,
        outcome: ReorderOutcome::Renumbered {
            violations: report.violations,
        },
    })
}

/// Works out which single move turns the current order into `target_order`.
///
/// `target_order` lists every entity id in the order the caller wants, e.g.
/// the state of a list after a drag and drop. Returns `Ok(None)` when the
/// order already matches. A two-element swap is reported as the entity that
/// lands in front.
///
/// ```
/// use reorder::{Item, detect_move};
///
/// let items = vec![Item::at("A", 1.0), Item::at("B", 2.0), Item::at("C", 3.0)];
/// let mv = detect_move(&items, &["C", "A", "B"]).unwrap().unwrap();
/// assert_eq!(mv.id, "C");
/// assert_eq!(mv.target_index, 0);
/// ```
pub fn detect_move<T: Orderable, S: AsRef<str>>(
    entities: &[T],
    target_order: &[S],
) -> Result<Option<Move>, ReorderError> {
    if entities.is_empty() {
        return Err(ReorderError::EmptyCollection);
    }
    ensure_unique_ids(entities)?;

    let baseline = sort_by_position(entities);
    let baseline: Vec<&str> = baseline.iter().map(|e| e.id()).collect();
    let target: Vec<&str> = target_order.iter().map(|s| s.as_ref()).collect();

    if target.len() != baseline.len() {
        return Err(ReorderError::TargetOrderMismatch {
            reason: format!(
                "expected {} ids, got {}",
                baseline.len(),
                target.len()
            ),
        });
    }
    let known: HashSet<&str> = baseline.iter().copied().collect();
    let mut seen = HashSet::with_capacity(target.len());
    for id in &target {
        if !known.contains(id) {
            return Err(ReorderError::TargetOrderMismatch {
                reason: format!("unknown id {id}"),
            });
        }
        if !seen.insert(*id) {
            return Err(ReorderError::TargetOrderMismatch {
                reason: format!("id {id} listed twice"),
            });
        }
    }

    let Some(first) = (0..target.len()).find(|&i| baseline[i] != target[i]) else {
        return Ok(None);
    };
    // A differing first index guarantees a differing last index.
    let last = (first..target.len())
        .rev()
        .find(|&i| baseline[i] != target[i])
        .unwrap_or(first);

    let moved_back = target[first] == baseline[last]
        && target[first + 1..=last] == baseline[first..last];
    if moved_back {
        return Ok(Some(Move {
            id: baseline[last].to_string(),
            target_index: first,
        }));
    }

    let moved_forward = target[last] == baseline[first]
        && target[first..last] == baseline[first + 1..=last];
    if moved_forward {
        return Ok(Some(Move {
            id: baseline[first].to_string(),
            target_index: last,
        }));
    }

    Err(ReorderError::TargetOrderMismatch {
        reason: format!(
            "ids between index {first} and {last} were rearranged by more than one move"
        ),
    })
}

/// Detects the move behind `target_order` and computes it.
///
/// Returns `Ok(None)` when the collection is already in that order.
pub fn compute_reorder_from_order<T: Orderable, S: AsRef<str>>(
    entities: &[T],
    target_order: &[S],
    config: &ReorderConfig,
) -> Result<Option<ReorderResult<T>>, ReorderError> {
    match detect_move(entities, target_order)? {
        Some(mv) => compute_reorder(entities, &mv.id, mv.target_index, config).map(Some),
        None => Ok(None),
    }
}

/// Applies change records to a collection and returns it in sorted order.
///
/// This is what a persistence layer does with [`ReorderResult::changes`],
/// done in memory. Every change must name an entity in the collection.
pub fn apply_changes<T: Orderable>(
    entities: &[T],
    changes: &[ChangeRecord],
) -> Result<Vec<T>, ReorderError> {
    let mut updated = entities.to_vec();
    let index: HashMap<&str, usize> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id(), i))
        .collect();

    for change in changes {
        let i = *index
            .get(change.id.as_str())
            .ok_or_else(|| ReorderError::EntityNotFound {
                id: change.id.clone(),
            })?;
        updated[i].set_position(change.position);
    }

    Ok(sort_by_position(&updated))
}

fn validate_request<T: Orderable>(
    entities: &[T],
    move_id: &str,
    target_index: usize,
) -> Result<(), ReorderError> {
    if entities.is_empty() {
        return Err(ReorderError::EmptyCollection);
    }
    if move_id.is_empty() {
        return Err(ReorderError::MissingMoveId);
    }
    if target_index >= entities.len() {
        return Err(ReorderError::IndexOutOfRange {
            index: target_index,
            len: entities.len(),
        });
    }
    if !entities.iter().any(|e| e.id() == move_id) {
        return Err(ReorderError::EntityNotFound {
            id: move_id.to_string(),
        });
    }
    ensure_unique_ids(entities)
}

fn ensure_unique_ids<T: Orderable>(entities: &[T]) -> Result<(), ReorderError> {
    let mut seen = HashSet::with_capacity(entities.len());
    match entities.iter().find(|e| !seen.insert(e.id())) {
        Some(dup) => Err(ReorderError::DuplicateId {
            id: dup.id().to_string(),
        }),
        None => Ok(()),
    }
}
