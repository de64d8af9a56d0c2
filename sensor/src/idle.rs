use async_trait::async_trait;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{Frame, ObservationSource};

/// Source for a running camera that never sees anyone.
pub struct IdleSource {
    interval: Duration,
}

impl IdleSource {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl ObservationSource for IdleSource {
    async fn run(&mut self, tx: mpsc::Sender<Frame>) {
        let mut ticker = time::interval(self.interval);
        loop {
            ticker.tick().await;
            if tx.send(None).await.is_err() {
                break;
            }
        }
    }
}
