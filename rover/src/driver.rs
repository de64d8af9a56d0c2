use sensor::Frame;
use tokio::{sync::mpsc, time::Duration};
use tracing::{error, info, warn};
use tracker::{StopHandle, TrackerError, TrackingController, Transition};

/// Counters collected over one driven session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveSummary {
    /// Ticks processed by the controller, synthesized ones included.
    pub ticks: u64,
    /// Empty ticks created because no frame arrived in time.
    pub timeouts: u64,
    pub acquisitions: u32,
    pub losses: u32,
}

/// Feeds frames from a single queue into a [`TrackingController`].
///
/// The queue serializes delivery from any number of sources. When no frame
/// arrives within `frame_timeout` an empty tick is processed instead, so a
/// stalled camera still ends in target loss and STOP.
pub struct Driver {
    controller: TrackingController,
    frame_timeout: Duration,
}

impl Driver {
    /// Default wait for a frame before an empty tick is synthesized.
    pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_millis(500);

    pub fn new(controller: TrackingController, frame_timeout: Duration) -> Self {
        Self {
            controller,
            frame_timeout,
        }
    }

    /// Handle for stopping the session from another task.
    pub fn stop_handle(&self) -> StopHandle {
        self.controller.stop_handle()
    }

    /// Run until the frame queue closes or the session is stopped.
    ///
    /// Starts the session first, so an invalid configuration fails here
    /// before any frame is consumed. The motors are always stopped on return.
    pub async fn run(mut self, mut frames: mpsc::Receiver<Frame>) -> tracker::Result<DriveSummary> {
        self.controller.start_session()?;
        let mut summary = DriveSummary::default();

        loop {
            let frame = match tokio::time::timeout(self.frame_timeout, frames.recv()).await {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    info!("frame queue closed");
                    break;
                }
                Err(_) => {
                    warn!(timeout = ?self.frame_timeout, "no frame received, treating as empty");
                    summary.timeouts += 1;
                    None
                }
            };

            match self.controller.process_tick(frame) {
                Ok(outcome) => {
                    summary.ticks += 1;
                    match outcome.transition {
                        Some(Transition::Acquired) => summary.acquisitions += 1,
                        Some(Transition::Lost) => summary.losses += 1,
                        None => {}
                    }
                    if outcome.stopped {
                        info!("session stopped by listener");
                        break;
                    }
                }
                // a stop requested between ticks surfaces as NotStarted
                Err(TrackerError::NotStarted) => {
                    info!("session stopped on request");
                    break;
                }
                Err(e) => {
                    error!(%e, "tick rejected");
                    break;
                }
            }
        }

        self.controller.stop_session();
        info!(?summary, "driver finished");
        Ok(summary)
    }
}
