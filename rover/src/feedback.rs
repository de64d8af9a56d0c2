use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracker::TrackingListener;

/// Presence notifications published for UI feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TrackingEvent {
    TargetAcquired,
    TargetLost,
}

/// [`TrackingListener`] implementation that forwards transitions over a broadcast channel.
#[derive(Clone)]
pub struct ChannelListener {
    events: broadcast::Sender<TrackingEvent>,
}

impl ChannelListener {
    /// Create a new `ChannelListener` using the given [`broadcast::Sender`].
    pub fn new(events: broadcast::Sender<TrackingEvent>) -> Self {
        Self { events }
    }
}

impl TrackingListener for ChannelListener {
    fn on_target_acquired(&self) {
        let _ = self.events.send(TrackingEvent::TargetAcquired);
    }

    fn on_target_lost(&self) {
        let _ = self.events.send(TrackingEvent::TargetLost);
    }
}
