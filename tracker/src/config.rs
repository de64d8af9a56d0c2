use serde::{Deserialize, Serialize};

use crate::{Result, TrackerError};

/// Tunable thresholds for the steering law and loss debounce.
///
/// Offsets are in half-frame-width units, widths in frame-width units.
/// Missing fields in a serialized config fall back to the defaults, so a
/// partial JSON object such as `{"approach_far": 0.4}` is accepted.
///
/// # Examples
/// ```
/// use tracker::TrackerConfig;
/// let config = TrackerConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.loss_timeout_ticks, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Horizontal tolerance within which the target counts as centered.
    pub center_deadband: f32,
    /// Offset magnitude above which turns use the fast variant.
    pub center_fast_threshold: f32,
    /// Apparent width below which the platform drives forward.
    pub approach_near: f32,
    /// Apparent width above which the platform backs away.
    pub approach_far: f32,
    /// Consecutive empty ticks tolerated before the target is declared lost.
    pub loss_timeout_ticks: u32,
}

impl TrackerConfig {
    pub const DEFAULT_CENTER_DEADBAND: f32 = 0.08;
    pub const DEFAULT_CENTER_FAST_THRESHOLD: f32 = 0.25;
    pub const DEFAULT_APPROACH_NEAR: f32 = 0.15;
    pub const DEFAULT_APPROACH_FAR: f32 = 0.35;
    pub const DEFAULT_LOSS_TIMEOUT_TICKS: u32 = 5;

    /// Check every threshold, failing on the first inconsistency.
    ///
    /// Configuration is never clamped; out-of-range values are rejected.
    pub fn validate(&self) -> Result<()> {
        let all_finite = [
            self.center_deadband,
            self.center_fast_threshold,
            self.approach_near,
            self.approach_far,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(invalid("thresholds must be finite numbers"));
        }
        if self.center_deadband < 0.0 {
            return Err(invalid(format!(
                "center_deadband {} must not be negative",
                self.center_deadband
            )));
        }
        if self.center_deadband >= self.center_fast_threshold {
            return Err(invalid(format!(
                "center_deadband {} must be below center_fast_threshold {}",
                self.center_deadband, self.center_fast_threshold
            )));
        }
        if self.center_fast_threshold > 1.0 {
            return Err(invalid(format!(
                "center_fast_threshold {} must not exceed 1.0",
                self.center_fast_threshold
            )));
        }
        for (name, value) in [
            ("approach_near", self.approach_near),
            ("approach_far", self.approach_far),
        ] {
            if value <= 0.0 || value >= 1.0 {
                return Err(invalid(format!("{name} {value} must lie in (0, 1)")));
            }
        }
        if self.approach_near >= self.approach_far {
            return Err(invalid(format!(
                "approach_near {} must be below approach_far {}",
                self.approach_near, self.approach_far
            )));
        }
        if self.loss_timeout_ticks < 1 {
            return Err(invalid("loss_timeout_ticks must be at least 1"));
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            center_deadband: Self::DEFAULT_CENTER_DEADBAND,
            center_fast_threshold: Self::DEFAULT_CENTER_FAST_THRESHOLD,
            approach_near: Self::DEFAULT_APPROACH_NEAR,
            approach_far: Self::DEFAULT_APPROACH_FAR,
            loss_timeout_ticks: Self::DEFAULT_LOSS_TIMEOUT_TICKS,
        }
    }
}

fn invalid(reason: impl Into<String>) -> TrackerError {
    TrackerError::InvalidConfiguration(reason.into())
}
