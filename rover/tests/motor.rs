use rover::{ChannelActuator, LoggingActuator};
use tokio::sync::broadcast;
use tracker::{MotorActuator, MotorCommand, TurnSpeed};

#[tokio::test]
async fn channel_actuator_forwards_commands() {
    let (tx, mut rx) = broadcast::channel(4);
    let motor = ChannelActuator::new(tx);
    motor.set_motor_state(MotorCommand::Left(TurnSpeed::Slow));
    motor.set_motor_state(MotorCommand::Stop);
    assert_eq!(rx.recv().await.unwrap(), MotorCommand::Left(TurnSpeed::Slow));
    assert_eq!(rx.recv().await.unwrap(), MotorCommand::Stop);
}

#[test]
fn channel_actuator_without_subscribers_is_silent() {
    let (tx, rx) = broadcast::channel(4);
    drop(rx);
    ChannelActuator::new(tx).set_motor_state(MotorCommand::Forward);
}

#[test]
fn logging_actuator_executes() {
    LoggingActuator.set_motor_state(MotorCommand::Backward);
}
