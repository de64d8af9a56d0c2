use async_trait::async_trait;
use tokio::sync::mpsc;
use tracker::FaceObservation;

/// Detector result for one processed frame; `None` when no face was found.
pub type Frame = Option<FaceObservation>;

/// Trait implemented by everything that produces [`Frame`]s.
#[async_trait]
pub trait ObservationSource: Send {
    /// Stream frames to `tx` until the source is exhausted or the receiver
    /// goes away.
    async fn run(&mut self, tx: mpsc::Sender<Frame>);
}
