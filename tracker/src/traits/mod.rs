mod actuator;
mod listener;

pub use actuator::{MotorActuator, NoopActuator};
pub use listener::{StopHandle, TrackingListener};
