//! Error types for reorder operations.
//!
//! Every variant here is a caller-input precondition violation. None of them
//! are transient, so nothing in the engine retries; the caller is expected to
//! fix its inputs (refresh a stale index, pick a valid id) and call again.
//!
//! Corrupt stored positions (duplicates, sub-minimum values, exhausted gaps)
//! are deliberately *not* errors. They are repaired by renumbering and reported
//! through [`crate::engine::ReorderOutcome`] instead.

use thiserror::Error;

/// Errors raised by [`crate::engine::compute_reorder`] and friends.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReorderError {
    /// The entity set handed to the engine was empty.
    #[error("Cannot reorder an empty collection")]
    EmptyCollection,

    /// The id of the entity to move was empty.
    #[error("Move id must be a non-empty string")]
    MissingMoveId,

    /// No entity in the collection has the requested id.
    #[error("Entity not found: {id}")]
    EntityNotFound {
        /// The id that was looked up
        id: String,
    },

    /// Target index is outside `[0, len - 1]`.
    #[error("Target index {index} is out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The requested target index
        index: usize,
        /// Number of entities in the collection
        len: usize,
    },

    /// Two entities in the collection share an id.
    #[error("Duplicate entity id in collection: {id}")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// A caller-supplied target order cannot be realised by a single move.
    #[error("Target order does not describe a single move: {reason}")]
    TargetOrderMismatch {
        /// What is wrong with the target order
        reason: String,
    },

    /// The configuration passed alongside the call is unusable.
    #[error(transparent)]
    InvalidConfig(#[from] crate::config::ConfigError),
}

impl ReorderError {
    /// Check if this error was raised because the collection was empty.
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, ReorderError::EmptyCollection)
    }

    /// Check if this error indicates the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReorderError::EntityNotFound { .. })
    }

    /// Check if this error is a bad target index.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ReorderError::IndexOutOfRange { .. })
    }

    /// Check if this error is about the identity of the inputs
    /// (missing move id, duplicated ids).
    pub fn is_identity_error(&self) -> bool {
        matches!(
            self,
            ReorderError::MissingMoveId | ReorderError::DuplicateId { .. }
        )
    }

    /// Check if this error comes from configuration validation.
    pub fn is_config_error(&self) -> bool {
        matches!(self, ReorderError::InvalidConfig(_))
    }

    /// Get the offending entity id, if the error names one.
    pub fn id(&self) -> Option<&str> {
        match self {
            ReorderError::EntityNotFound { id } | ReorderError::DuplicateId { id } => Some(id),
            _ => None,
        }
    }
}

// Conversion from ReorderError to the main Error type
impl From<ReorderError> for crate::Error {
    fn from(err: ReorderError) -> Self {
        crate::Error::Reorder(err)
    }
}
