//! Host wiring for the face-following rover.
//!
//! Connects observation sources from the `sensor` crate to a
//! [`tracker::TrackingController`], and fans motor commands, presence events
//! and log lines out over broadcast channels.

pub mod config;
pub mod driver;
pub mod event_bus;
pub mod feedback;
pub mod logging;
pub mod motor;

pub use config::{Overrides, check_timing, load_config};
pub use driver::{DriveSummary, Driver};
pub use event_bus::EventBus;
pub use feedback::{ChannelListener, TrackingEvent};
pub use logging::{DEFAULT_LOG_LEVEL, init_logging};
pub use motor::{ChannelActuator, LoggingActuator};
