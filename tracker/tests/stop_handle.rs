use std::sync::{Arc, Mutex};
use tracker::{
    FaceObservation, MotorActuator, MotorCommand, Presence, StopHandle, TickOutcome,
    TrackerConfig, TrackerError, TrackingController, TrackingListener, Transition,
};

#[derive(Clone, Default)]
struct RecActuator(Arc<Mutex<Vec<MotorCommand>>>);

impl MotorActuator for RecActuator {
    fn set_motor_state(&self, command: MotorCommand) {
        self.0.lock().unwrap().push(command);
    }
}

/// Listener that ends the session as soon as a face shows up.
struct StopOnSight(StopHandle);

impl TrackingListener for StopOnSight {
    fn on_target_acquired(&self) {
        self.0.request_stop();
    }

    fn on_target_lost(&self) {}
}

#[test]
fn listener_can_stop_session_from_callback() {
    let actuator = RecActuator::default();
    let mut controller =
        TrackingController::new(TrackerConfig::default(), Arc::new(actuator.clone()));
    let handle = controller.stop_handle();
    controller.add_listener(Arc::new(StopOnSight(handle)));
    controller.start_session().unwrap();

    let outcome = controller
        .process_tick(Some(FaceObservation::new(0.0, 0.1)))
        .unwrap();
    // the outcome reflects the stop, not the command decided before it
    assert_eq!(
        outcome,
        TickOutcome {
            presence: Presence::Absent,
            decision: Some(MotorCommand::Stop),
            issued: Some(MotorCommand::Stop),
            transition: Some(Transition::Acquired),
            stopped: true,
        }
    );
    assert!(!controller.is_running());
    assert_eq!(
        *actuator.0.lock().unwrap(),
        vec![MotorCommand::Stop, MotorCommand::Forward, MotorCommand::Stop]
    );
}

#[test]
fn external_request_applies_on_next_tick() {
    let actuator = RecActuator::default();
    let mut controller =
        TrackingController::new(TrackerConfig::default(), Arc::new(actuator.clone()));
    controller.start_session().unwrap();
    controller
        .process_tick(Some(FaceObservation::new(-0.2, 0.2)))
        .unwrap();

    let handle = controller.stop_handle();
    std::thread::spawn(move || handle.request_stop())
        .join()
        .unwrap();

    assert_eq!(controller.process_tick(None), Err(TrackerError::NotStarted));
    assert_eq!(actuator.0.lock().unwrap().last(), Some(&MotorCommand::Stop));
    assert!(!controller.stop_handle().is_requested());
}

#[test]
fn stale_request_cleared_on_start() {
    let mut controller = TrackingController::new(
        TrackerConfig::default(),
        Arc::new(RecActuator::default()),
    );
    controller.stop_handle().request_stop();
    controller.start_session().unwrap();
    let outcome = controller.process_tick(None).unwrap();
    assert!(!outcome.stopped);
    assert!(controller.is_running());
}
