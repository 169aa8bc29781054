//! Entities that can be ordered by a fractional position.

use serde::{Deserialize, Serialize};

/// Anything the engine can reorder.
///
/// Implementors expose an opaque id and an optional position. An absent
/// position means "unordered" and sorts after every positioned entity; it is
/// never conflated with `0.0`, which is simply an invalid value.
///
/// The engine only ever touches the position through [`Orderable::set_position`],
/// so every other field of the implementor passes through unchanged.
pub trait Orderable: Clone {
    /// Unique id of the entity within its collection.
    fn id(&self) -> &str;

    /// Current position, or `None` if the entity was never ordered.
    fn position(&self) -> Option<f64>;

    /// Overwrite the position.
    fn set_position(&mut self, position: f64);
}

/// A generic orderable record.
///
/// Any fields besides `id` and `position` are kept in `fields` and written
/// back verbatim when serialised.
///
/// ```
/// use reorder::Item;
///
/// let item: Item = serde_json::from_str(r#"{"id":"a","position":3,"title":"x"}"#).unwrap();
/// assert_eq!(item.position, Some(3.0));
/// assert_eq!(item.fields["title"], "x");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Creates an item without extra fields.
    pub fn new(id: impl Into<String>, position: Option<f64>) -> Self {
        Self {
            id: id.into(),
            position,
            fields: serde_json::Map::new(),
        }
    }

    /// Shorthand for an item with a defined position.
    pub fn at(id: impl Into<String>, position: f64) -> Self {
        Self::new(id, Some(position))
    }

    /// Shorthand for an item that has never been ordered.
    pub fn unpositioned(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }

    /// Attaches an extra field that rides along untouched.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Orderable for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> Option<f64> {
        self.position
    }

    fn set_position(&mut self, position: f64) {
        self.position = Some(position);
    }
}
