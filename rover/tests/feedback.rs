use rover::{ChannelListener, TrackingEvent};
use tokio::sync::broadcast;
use tracker::TrackingListener;

#[tokio::test]
async fn broadcasts_presence_changes() {
    let (tx, mut rx) = broadcast::channel(8);
    let listener = ChannelListener::new(tx);
    listener.on_target_acquired();
    listener.on_target_lost();
    assert_eq!(rx.recv().await.unwrap(), TrackingEvent::TargetAcquired);
    assert_eq!(rx.recv().await.unwrap(), TrackingEvent::TargetLost);
}

#[test]
fn events_serialize_with_type_tag() {
    let json = serde_json::to_string(&TrackingEvent::TargetLost).unwrap();
    assert_eq!(json, r#"{"type":"TargetLost"}"#);
}
