//! Construction-time configuration of the feedback model.

use serde::{Deserialize, Serialize};
use units::UnitSystem;

use crate::error::{FeedbackError, Result};

/// Fraction of the nominal supernova and wind energy coupled to the gas
pub const DEFAULT_FEEDBACK_EFFICIENCY: f64 = 0.7;

/// Absolute and relative accuracy of every normalization integral
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Parameters injected into [`crate::DiscreteFeedback::new`].
///
/// Everything else about the model (IMF shapes, mass thresholds, delay-time
/// parameters, yields) is fixed physics and not configurable.
///
/// # Examples
///
/// ```
/// use feedback::FeedbackConfig;
///
/// let config = FeedbackConfig::from_json_str(r#"{ "feedback_efficiency": 0.5 }"#).unwrap();
/// assert_eq!(config.feedback_efficiency, 0.5);
/// assert_eq!(config.tolerance, 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Efficiency applied to every energy quantity in the yield table
    pub feedback_efficiency: f64,
    /// Quadrature tolerance, used as both absolute and relative bound
    pub tolerance: f64,
    /// Internal unit system of the host simulation
    pub units: UnitSystem,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            feedback_efficiency: DEFAULT_FEEDBACK_EFFICIENCY,
            tolerance: DEFAULT_TOLERANCE,
            units: UnitSystem::unconverted(),
        }
    }
}

impl FeedbackConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| FeedbackError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.feedback_efficiency > 0.0 && self.feedback_efficiency <= 1.0) {
            return Err(FeedbackError::InvalidConfig(format!(
                "feedback efficiency {} is outside (0, 1]",
                self.feedback_efficiency
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(FeedbackError::InvalidConfig(format!(
                "quadrature tolerance {} must be positive",
                self.tolerance
            )));
        }
        if !self.units.is_valid() {
            return Err(FeedbackError::InvalidConfig(format!(
                "unit system {:?} has a non-positive scale",
                self.units
            )));
        }
        Ok(())
    }
}
