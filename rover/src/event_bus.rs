use sensor::Frame;
use tokio::sync::{broadcast, mpsc};
use tracker::MotorCommand;

use crate::{ChannelActuator, ChannelListener, TrackingEvent};

/// Central communication hub for the rover's frames, commands and logs.
///
/// Frames flow in through a single bounded queue so ticks reach the
/// controller one at a time. Everything flowing out is broadcast.
#[derive(Clone)]
pub struct EventBus {
    frames: mpsc::Sender<Frame>,
    motor: broadcast::Sender<MotorCommand>,
    tracking: broadcast::Sender<TrackingEvent>,
    logs: broadcast::Sender<String>,
}

impl EventBus {
    /// Default capacity for the inbound frame queue.
    pub const DEFAULT_FRAME_CAPACITY: usize = 4;
    /// Default broadcast capacity for motor commands and tracking events.
    pub const DEFAULT_EVENT_CAPACITY: usize = 16;
    /// Default broadcast capacity for log messages.
    pub const DEFAULT_LOG_CAPACITY: usize = 100;

    /// Create a new `EventBus` using default capacities.
    ///
    /// Returns the bus and the receiver the driver consumes frames from.
    pub fn new() -> (Self, mpsc::Receiver<Frame>) {
        Self::with_capacities(
            Self::DEFAULT_FRAME_CAPACITY,
            Self::DEFAULT_EVENT_CAPACITY,
            Self::DEFAULT_LOG_CAPACITY,
        )
    }

    /// Create a bus using custom channel capacities.
    pub fn with_capacities(
        frame_capacity: usize,
        event_capacity: usize,
        log_capacity: usize,
    ) -> (Self, mpsc::Receiver<Frame>) {
        let (frames, rx) = mpsc::channel(frame_capacity);
        let (motor, _) = broadcast::channel(event_capacity);
        let (tracking, _) = broadcast::channel(event_capacity);
        let (logs, _) = broadcast::channel(log_capacity);
        (
            Self {
                frames,
                motor,
                tracking,
                logs,
            },
            rx,
        )
    }

    /// Obtain a sender for observation sources.
    pub fn frame_sender(&self) -> mpsc::Sender<Frame> {
        self.frames.clone()
    }

    /// Actuator publishing to this bus's motor channel.
    pub fn actuator(&self) -> ChannelActuator {
        ChannelActuator::new(self.motor.clone())
    }

    /// Listener publishing to this bus's tracking channel.
    pub fn listener(&self) -> ChannelListener {
        ChannelListener::new(self.tracking.clone())
    }

    /// Subscribe to motor commands issued by the controller.
    pub fn subscribe_motor(&self) -> broadcast::Receiver<MotorCommand> {
        self.motor.subscribe()
    }

    /// Subscribe to acquisition and loss events.
    pub fn subscribe_tracking(&self) -> broadcast::Receiver<TrackingEvent> {
        self.tracking.subscribe()
    }

    /// Send a log line to listeners.
    pub fn log(&self, msg: impl Into<String>) {
        let _ = self.logs.send(msg.into());
    }

    /// Subscribe to log messages.
    pub fn subscribe_logs(&self) -> broadcast::Receiver<String> {
        self.logs.subscribe()
    }

    /// Access the log sender for initialization.
    pub fn log_sender(&self) -> broadcast::Sender<String> {
        self.logs.clone()
    }
}
