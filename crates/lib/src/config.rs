//! Per-call tuning for the reorder engine.
//!
//! A [`ReorderConfig`] is an immutable value handed to every call. There is no
//! process-wide state: two callers can use different thresholds side by side.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum distance a new position must keep from its neighbours.
pub const DEFAULT_MIN_POSITION_GAP: f64 = 0.1;

/// Default spacing between consecutive positions after a renumber.
pub const DEFAULT_RENUMBER_SPACING: f64 = 10.0;

/// Default floor for valid position values.
pub const DEFAULT_MIN_POSITION_VALUE: f64 = 1.0;

/// Errors raised while validating or loading a [`ReorderConfig`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A knob holds a value the engine cannot work with.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Thresholds used by the position calculator, integrity checker and renumberer.
///
/// Deserialises from partial documents; missing fields take their defaults.
///
/// ```
/// use reorder::ReorderConfig;
///
/// let config = ReorderConfig::from_json_str(r#"{ "renumberSpacing": 100 }"#).unwrap();
/// assert_eq!(config.renumber_spacing, 100.0);
/// assert_eq!(config.min_position_gap, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReorderConfig {
    /// Minimum distance a computed position must keep from both neighbours.
    pub min_position_gap: f64,
    /// Uniform spacing assigned to every entity when renumbering.
    pub renumber_spacing: f64,
    /// Floor for valid position values.
    pub min_position_value: f64,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            min_position_gap: DEFAULT_MIN_POSITION_GAP,
            renumber_spacing: DEFAULT_RENUMBER_SPACING,
            min_position_value: DEFAULT_MIN_POSITION_VALUE,
        }
    }
}

impl ReorderConfig {
    /// Creates a config holding the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_position_gap(mut self, gap: f64) -> Self {
        self.min_position_gap = gap;
        self
    }

    pub fn with_renumber_spacing(mut self, spacing: f64) -> Self {
        self.renumber_spacing = spacing;
        self
    }

    pub fn with_min_position_value(mut self, value: f64) -> Self {
        self.min_position_value = value;
        self
    }

    /// Checks that the thresholds can uphold the output invariants.
    ///
    /// A zero gap would let a clamped candidate collide with its neighbour,
    /// and a spacing below the floor would renumber entities into invalid
    /// values, so both are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("minPositionGap", self.min_position_gap)?;
        finite("renumberSpacing", self.renumber_spacing)?;
        finite("minPositionValue", self.min_position_value)?;

        if self.min_position_gap <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "minPositionGap",
                reason: format!("must be greater than 0, got {}", self.min_position_gap),
            });
        }
        if self.renumber_spacing <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "renumberSpacing",
                reason: format!("must be greater than 0, got {}", self.renumber_spacing),
            });
        }
        if self.renumber_spacing < self.min_position_value {
            return Err(ConfigError::InvalidValue {
                field: "renumberSpacing",
                reason: format!(
                    "must be at least minPositionValue ({}), got {}",
                    self.min_position_value, self.renumber_spacing
                ),
            });
        }
        Ok(())
    }

    /// Checks that renumbering `len` entities keeps every position finite.
    ///
    /// The last renumbered value is `len * renumber_spacing`; if that
    /// overflows, the tail of the collection would collapse onto `inf`.
    pub fn validate_for_len(&self, len: usize) -> Result<(), ConfigError> {
        let last = len as f64 * self.renumber_spacing;
        if last.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "renumberSpacing",
                reason: format!(
                    "{} is too large to renumber {len} entities without overflow",
                    self.renumber_spacing
                ),
            })
        }
    }

    /// Parses a config from a JSON document and validates it.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: ReorderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a JSON file and validates it.
    ///
    /// # Arguments
    /// * `path` - The path to the file from which to load the config.
    ///
    /// # Returns
    /// A `Result` containing the config or an I/O, deserialization or validation error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded reorder config");
        Ok(config)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must be finite, got {value}"),
        })
    }
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
