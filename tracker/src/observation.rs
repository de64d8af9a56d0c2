use serde::{Deserialize, Serialize};
use tracing::warn;

/// The most salient face detected in one processed frame.
///
/// Only built when a face was actually seen; a frame without a face is
/// delivered as `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceObservation {
    /// Signed horizontal offset from frame center in half-frame-width units.
    /// Positive means right of center.
    pub center_offset: f32,
    /// Face width as a fraction of frame width. Larger means closer.
    pub apparent_width: f32,
}

impl FaceObservation {
    /// Create an observation from raw detector output.
    pub fn new(center_offset: f32, apparent_width: f32) -> Self {
        Self {
            center_offset,
            apparent_width,
        }
    }

    /// Return a copy with both fields forced into their valid domains.
    ///
    /// Offsets clamp to `[-1, 1]` and widths to `[0, 1]`. A non-finite offset
    /// becomes `0.0` (centered) and a non-finite width becomes `0.0` (far).
    ///
    /// ```
    /// use tracker::FaceObservation;
    /// let obs = FaceObservation::new(1.7, -0.2).clamped();
    /// assert_eq!(obs, FaceObservation::new(1.0, 0.0));
    /// ```
    pub fn clamped(&self) -> Self {
        let center_offset = if self.center_offset.is_finite() {
            self.center_offset.clamp(-1.0, 1.0)
        } else {
            warn!(offset = ?self.center_offset, "non-finite center offset treated as centered");
            0.0
        };
        let apparent_width = if self.apparent_width.is_finite() {
            self.apparent_width.clamp(0.0, 1.0)
        } else {
            warn!(width = ?self.apparent_width, "non-finite apparent width treated as far");
            0.0
        };
        Self {
            center_offset,
            apparent_width,
        }
    }
}
