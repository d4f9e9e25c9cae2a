//! Constants used by the geometric effects.
//!
//! Defaults reproduce the stock balloon/hand/line animation. Description
//! bundles may override any subset of them from JSON.

use crate::core::Geometry;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Errors raised while loading an [`EffectConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid effect configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Boom threshold range is empty: [{min}, {max})")]
    EmptyThresholdRange { min: f64, max: f64 },

    #[error("Boom threshold range is not finite: [{min}, {max})")]
    NonFiniteThresholdRange { min: f64, max: f64 },
}

/// Per-call change applied by `balloon_bigger`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthStep {
    pub dx: f64,
    pub dy: f64,
    pub grow: f64,
}

/// Tunables for the effect table.
///
/// # Example
///
/// ```rust
/// use stagehand::config::EffectConfig;
///
/// let config = EffectConfig::from_json(r#"{ "boom_image": "./img/pop.png" }"#).unwrap();
/// assert_eq!(config.boom_image, "./img/pop.png");
/// assert_eq!(config.hand_rest.y, 190.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Image path marking a popped balloon; growth stops once reached.
    pub boom_image: String,
    pub balloon_step: GrowthStep,
    /// Lower bound of the per-call boom threshold (inclusive).
    pub boom_threshold_min: f64,
    /// Upper bound of the per-call boom threshold (exclusive).
    pub boom_threshold_max: f64,
    pub hand_step: f64,
    pub line_step: f64,
    pub balloon_rest: Geometry,
    pub hand_rest: Geometry,
    pub line_rest: Geometry,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            boom_image: "./images/boom.png".to_string(),
            balloon_step: GrowthStep {
                dx: 5.0,
                dy: 10.0,
                grow: 10.0,
            },
            boom_threshold_min: 100.0,
            boom_threshold_max: 1100.0,
            hand_step: 10.0,
            line_step: 10.0,
            balloon_rest: Geometry::new(0.0, 0.0, 50.0, 50.0),
            hand_rest: Geometry::new(15.0, 190.0, 20.0, 20.0),
            line_rest: Geometry::new(0.0, 0.0, 100.0, 100.0),
        }
    }
}

impl EffectConfig {
    /// Parse a (possibly partial) configuration; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.boom_threshold_min, self.boom_threshold_max);
        if !(min.is_finite() && max.is_finite() && (max - min).is_finite()) {
            return Err(ConfigError::NonFiniteThresholdRange { min, max });
        }
        if self.boom_threshold_range().is_empty() {
            return Err(ConfigError::EmptyThresholdRange {
                min: self.boom_threshold_min,
                max: self.boom_threshold_max,
            });
        }
        Ok(())
    }

    pub fn boom_threshold_range(&self) -> Range<f64> {
        self.boom_threshold_min..self.boom_threshold_max
    }

    /// The threshold range, if a uniform draw from it is possible.
    ///
    /// `None` when the range is empty or its width overflows `f64`.
    pub fn drawable_threshold_range(&self) -> Option<Range<f64>> {
        let range = self.boom_threshold_range();
        if range.is_empty() || !(range.end - range.start).is_finite() {
            return None;
        }
        Some(range)
    }
}
