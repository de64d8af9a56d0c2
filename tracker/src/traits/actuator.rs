use crate::MotorCommand;

/// Output sink driving the platform's motors.
///
/// Calls are fire-and-forget: a command takes effect until the next one.
/// Link failures and retries are the implementation's concern, the
/// [`TrackingController`](crate::TrackingController) never retries.
pub trait MotorActuator: Send + Sync {
    /// Apply `command` to the motors.
    fn set_motor_state(&self, command: MotorCommand);
}

/// [`MotorActuator`] implementation that does nothing.
#[derive(Clone, Default)]
pub struct NoopActuator;

impl MotorActuator for NoopActuator {
    fn set_motor_state(&self, _command: MotorCommand) {}
}
