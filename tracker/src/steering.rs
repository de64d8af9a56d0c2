//! Stateless mapping from one observation to one motor command.

use crate::{FaceObservation, MotorCommand, TrackerConfig, TurnSpeed};

/// Decide how to move for a single observation.
///
/// Centering takes precedence over approach: the platform first turns toward
/// the face and only drives forward or backward once the face sits inside
/// the deadband. Deadband and approach-band edges are inclusive.
///
/// # Examples
/// ```
/// use tracker::{steer, FaceObservation, MotorCommand, TrackerConfig, TurnSpeed};
/// let config = TrackerConfig::default();
/// let cmd = steer(&FaceObservation::new(0.3, 0.1), &config);
/// assert_eq!(cmd, MotorCommand::Right(TurnSpeed::Fast));
/// ```
pub fn steer(observation: &FaceObservation, config: &TrackerConfig) -> MotorCommand {
    let FaceObservation {
        center_offset,
        apparent_width,
    } = observation.clamped();

    let magnitude = center_offset.abs();
    if magnitude > config.center_deadband {
        let speed = if magnitude > config.center_fast_threshold {
            TurnSpeed::Fast
        } else {
            TurnSpeed::Slow
        };
        return if center_offset > 0.0 {
            MotorCommand::Right(speed)
        } else {
            MotorCommand::Left(speed)
        };
    }

    if apparent_width < config.approach_near {
        MotorCommand::Forward
    } else if apparent_width > config.approach_far {
        MotorCommand::Backward
    } else {
        MotorCommand::Stop
    }
}
