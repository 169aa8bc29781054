//! Total ordering of entities by position.

use std::cmp::Ordering;

use crate::entity::Orderable;

/// Compares two optional positions, with `None` sorting after every value.
///
/// Defined values are compared with [`f64::total_cmp`], so the ordering stays
/// total even for corrupt inputs such as NaN.
pub fn compare_positions(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the entities sorted ascending by position.
///
/// The sort is stable: ties and unpositioned entities keep their relative
/// input order. The input slice is not modified.
///
/// ```
/// use reorder::{Item, sort_by_position};
///
/// let items = vec![Item::unpositioned("c"), Item::at("b", 2.0), Item::at("a", 1.0)];
/// let ids: Vec<_> = sort_by_position(&items).into_iter().map(|i| i.id).collect();
/// assert_eq!(ids, ["a", "b", "c"]);
/// ```
pub fn sort_by_position<T: Orderable>(entities: &[T]) -> Vec<T> {
    let mut sorted = entities.to_vec();
    sorted.sort_by(|a, b| compare_positions(a.position(), b.position()));
    sorted
}

/// Returns true if the sequence is already in [`sort_by_position`] order.
pub fn is_sorted_by_position<T: Orderable>(entities: &[T]) -> bool {
    entities
        .windows(2)
        .all(|w| compare_positions(w[0].position(), w[1].position()) != Ordering::Greater)
}

/// The entities that will sit on either side of an inserted entity.
#[derive(Debug)]
pub struct Neighbors<'a, T> {
    pub prev: Option<&'a T>,
    pub next: Option<&'a T>,
}

impl<'a, T: Orderable> Neighbors<'a, T> {
    /// Locates the neighbours of slot `index` in a sequence that no longer
    /// contains the entity being moved. `index == reduced.len()` is the tail.
    pub fn at(reduced: &'a [T], index: usize) -> Self {
        Self {
            prev: index.checked_sub(1).and_then(|i| reduced.get(i)),
            next: reduced.get(index),
        }
    }

    pub fn prev_position(&self) -> Option<f64> {
        self.prev.and_then(|e| e.position())
    }

    pub fn next_position(&self) -> Option<f64> {
        self.next.and_then(|e| e.position())
    }
}
