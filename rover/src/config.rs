use anyhow::{Context, bail};
use clap::Args;
use std::path::Path;
use std::time::Duration;
use tracing::warn;
use tracker::TrackerConfig;

/// Threshold overrides taken from flags or `ROVER_*` environment variables.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Horizontal tolerance treated as centered
    #[arg(long, env = "ROVER_CENTER_DEADBAND")]
    pub center_deadband: Option<f32>,
    /// Offset magnitude that switches turns to full speed
    #[arg(long, env = "ROVER_CENTER_FAST_THRESHOLD")]
    pub center_fast_threshold: Option<f32>,
    /// Face width below which the rover drives forward
    #[arg(long, env = "ROVER_APPROACH_NEAR")]
    pub approach_near: Option<f32>,
    /// Face width above which the rover backs away
    #[arg(long, env = "ROVER_APPROACH_FAR")]
    pub approach_far: Option<f32>,
    /// Empty frames tolerated before the face counts as lost
    #[arg(long, env = "ROVER_LOSS_TIMEOUT_TICKS")]
    pub loss_timeout_ticks: Option<u32>,
}

impl Overrides {
    /// Replace every field of `config` that has an override.
    pub fn apply(&self, config: &mut TrackerConfig) {
        if let Some(v) = self.center_deadband {
            config.center_deadband = v;
        }
        if let Some(v) = self.center_fast_threshold {
            config.center_fast_threshold = v;
        }
        if let Some(v) = self.approach_near {
            config.approach_near = v;
        }
        if let Some(v) = self.approach_far {
            config.approach_far = v;
        }
        if let Some(v) = self.loss_timeout_ticks {
            config.loss_timeout_ticks = v;
        }
    }
}

/// Resolve the tracker configuration: defaults, then the optional JSON file
/// at `path`, then `overrides`.
///
/// The result is not validated here; the controller rejects bad thresholds
/// when the session starts.
pub async fn load_config(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<TrackerConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => TrackerConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

/// Reject frame timings that would make the driver invent empty ticks.
///
/// A zero timeout fires on every poll. A timeout no longer than the frame
/// interval still works but inserts misses between real frames, so it is
/// only warned about.
pub fn check_timing(interval: Duration, frame_timeout: Duration) -> anyhow::Result<()> {
    if frame_timeout.is_zero() {
        bail!("frame timeout must be greater than zero");
    }
    if frame_timeout <= interval {
        warn!(
            ?interval,
            ?frame_timeout,
            "frame timeout does not exceed the frame interval; expect spurious empty ticks"
        );
    }
    Ok(())
}
