//! Face-following control loop.
//!
//! A [`TrackingController`] consumes one optional [`FaceObservation`] per
//! camera frame and drives a [`MotorActuator`] with discrete
//! [`MotorCommand`]s. Acquisition is immediate; loss is debounced over
//! [`TrackerConfig::loss_timeout_ticks`] empty frames so a face turning away
//! for a moment does not stop the platform.

mod command;
mod config;
mod controller;
mod error;
mod observation;
mod session;
mod steering;
pub mod traits;

pub use command::{MotorCommand, TurnSpeed};
pub use config::TrackerConfig;
pub use controller::{TickOutcome, TrackingController};
pub use error::{Result, TrackerError};
pub use observation::FaceObservation;
pub use session::{Presence, TrackingSession, Transition};
pub use steering::steer;
pub use traits::{MotorActuator, NoopActuator, StopHandle, TrackingListener};
