use sensor::{IdleSource, ObservationSource};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn idle_emits_empty_frames() {
    let (tx, mut rx) = mpsc::channel(2);
    let mut idle = IdleSource::new(Duration::from_millis(5));
    let handle = tokio::spawn(async move { idle.run(tx).await; });
    assert_eq!(rx.recv().await, Some(None));
    assert_eq!(rx.recv().await, Some(None));
    drop(rx);
    // the source notices the closed channel and returns
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap();
}
