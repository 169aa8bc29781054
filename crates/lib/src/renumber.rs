//! Even respacing of a whole ordered sequence.

use crate::{config::ReorderConfig, entity::Orderable};

/// Assigns `(index + 1) * renumber_spacing` to every entity, in the given order.
///
/// Entities that had no position receive one. The input order is kept as-is;
/// callers pass the sequence they want to persist.
///
/// ```
/// use reorder::{Item, ReorderConfig, renumber_all};
///
/// let items = vec![Item::at("b", 7.0), Item::unpositioned("a")];
/// let out = renumber_all(&items, &ReorderConfig::default());
/// assert_eq!(out[0].position, Some(10.0));
/// assert_eq!(out[1].position, Some(20.0));
/// ```
pub fn renumber_all<T: Orderable>(ordered: &[T], config: &ReorderConfig) -> Vec<T> {
    ordered
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            let mut entity = entity.clone();
            entity.set_position((index + 1) as f64 * config.renumber_spacing);
            entity
        })
        .collect()
}
