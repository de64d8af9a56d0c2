//! Face-observation sources for the tracking controller.
//!
//! Sources produce one [`Frame`] per processed camera frame and stream them
//! through an async channel. A single consumer on the other end keeps tick
//! delivery serialized.

pub mod error;
pub mod idle;
pub mod scripted;
pub mod source;

pub use error::SourceError;
pub use idle::IdleSource;
pub use scripted::ScriptedSource;
pub use source::{Frame, ObservationSource};
