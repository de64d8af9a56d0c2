use rover::EventBus;
use tracker::{MotorActuator, MotorCommand, TrackingListener};

#[test]
fn custom_capacities() {
    let custom = 8;
    let (bus, _rx) = EventBus::with_capacities(custom, custom, custom * 2);
    bus.log("ok");
    // Custom constructor should operate like the default without panicking
    let _ = bus.subscribe_motor();
    let _ = bus.subscribe_tracking();
    let _ = bus.subscribe_logs();
}

#[tokio::test]
async fn bus_adapters_publish() {
    let (bus, _rx) = EventBus::new();
    let mut motor = bus.subscribe_motor();
    let mut tracking = bus.subscribe_tracking();
    let mut logs = bus.subscribe_logs();

    bus.actuator().set_motor_state(MotorCommand::Forward);
    bus.listener().on_target_acquired();
    bus.log("hello");

    assert_eq!(motor.recv().await.unwrap(), MotorCommand::Forward);
    assert_eq!(
        tracking.recv().await.unwrap(),
        rover::TrackingEvent::TargetAcquired
    );
    assert_eq!(logs.recv().await.unwrap(), "hello");
}

#[tokio::test]
async fn frames_arrive_in_order() {
    let (bus, mut rx) = EventBus::new();
    let tx = bus.frame_sender();
    tx.send(None).await.unwrap();
    tx.send(Some(tracker::FaceObservation::new(0.1, 0.2))).await.unwrap();
    assert_eq!(rx.recv().await, Some(None));
    assert_eq!(
        rx.recv().await,
        Some(Some(tracker::FaceObservation::new(0.1, 0.2)))
    );
}
