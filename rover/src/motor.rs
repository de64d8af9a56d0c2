use tokio::sync::broadcast;
use tracing::info;
use tracker::{MotorActuator, MotorCommand};

/// Simple [`MotorActuator`] implementation that logs each command.
#[derive(Clone, Default)]
pub struct LoggingActuator;

impl MotorActuator for LoggingActuator {
    fn set_motor_state(&self, command: MotorCommand) {
        info!(%command, "motor");
    }
}

/// [`MotorActuator`] that forwards commands over a broadcast channel.
///
/// A motor link task subscribes to the channel and owns delivery to the
/// hardware. Sending never blocks; commands are dropped while nobody listens.
#[derive(Clone)]
pub struct ChannelActuator {
    commands: broadcast::Sender<MotorCommand>,
}

impl ChannelActuator {
    /// Create a new `ChannelActuator` using the given [`broadcast::Sender`].
    pub fn new(commands: broadcast::Sender<MotorCommand>) -> Self {
        Self { commands }
    }
}

impl MotorActuator for ChannelActuator {
    fn set_motor_state(&self, command: MotorCommand) {
        let _ = self.commands.send(command);
    }
}
