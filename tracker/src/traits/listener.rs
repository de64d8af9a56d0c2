use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receiver of presence transitions, e.g. UI feedback.
///
/// Both methods fire only on transition edges, never on every tick.
/// Handlers that want to end the session should use a [`StopHandle`]
/// obtained from [`TrackingController::stop_handle`](crate::TrackingController::stop_handle).
pub trait TrackingListener: Send + Sync {
    /// A face became visible after an absence.
    fn on_target_acquired(&self);
    /// The face stayed out of view for the whole loss timeout.
    fn on_target_lost(&self);
}

/// Cloneable request to stop the owning controller's session.
///
/// The request is honoured as soon as the controller regains control: right
/// after the current notification round, or at the start of the next tick.
/// Requesting from inside a listener callback is therefore safe.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Ask the controller to stop its session.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop is pending.
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}
