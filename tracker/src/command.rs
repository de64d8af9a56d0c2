use serde::{Deserialize, Serialize};
use std::fmt;

/// Turning rate for [`MotorCommand::Left`] and [`MotorCommand::Right`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnSpeed {
    Slow,
    Fast,
}

/// Discrete movement understood by the motor actuator.
///
/// A command stays in effect until the next one supersedes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "speed", rename_all = "lowercase")]
pub enum MotorCommand {
    #[default]
    Stop,
    Forward,
    Backward,
    Left(TurnSpeed),
    Right(TurnSpeed),
}

impl fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stop => "stop",
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left(TurnSpeed::Slow) => "left-slow",
            Self::Left(TurnSpeed::Fast) => "left-fast",
            Self::Right(TurnSpeed::Slow) => "right-slow",
            Self::Right(TurnSpeed::Fast) => "right-fast",
        };
        f.write_str(name)
    }
}
