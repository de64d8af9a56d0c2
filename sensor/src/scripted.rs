use async_trait::async_trait;
use std::path::Path;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};
use tracing::{debug, info};
use tracker::FaceObservation;

use crate::{Frame, ObservationSource, SourceError};

/// Replays a fixed list of frames at a steady rate.
///
/// Scripts are JSON lines: each line is either `null` (no face) or an object
/// like `{"center_offset": 0.3, "apparent_width": 0.1}`. Blank lines and
/// lines starting with `#` are ignored.
///
/// # Examples
/// ```
/// use sensor::ScriptedSource;
/// use std::time::Duration;
/// let script = "# approach\n{\"center_offset\":0.0,\"apparent_width\":0.1}\nnull\n";
/// let source = ScriptedSource::parse(script, Duration::from_millis(33)).unwrap();
/// assert_eq!(source.frames().len(), 2);
/// assert!(source.frames()[1].is_none());
/// ```
pub struct ScriptedSource {
    frames: Vec<Frame>,
    interval: Duration,
}

impl ScriptedSource {
    /// Create a source from frames already in memory.
    pub fn new(frames: Vec<Frame>, interval: Duration) -> Self {
        Self { frames, interval }
    }

    /// Parse a JSON-lines script.
    pub fn parse(script: &str, interval: Duration) -> Result<Self, SourceError> {
        let mut frames = Vec::new();
        for (idx, raw) in script.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let frame: Option<FaceObservation> =
                serde_json::from_str(line).map_err(|source| SourceError::Parse {
                    line: idx + 1,
                    source,
                })?;
            frames.push(frame);
        }
        Ok(Self::new(frames, interval))
    }

    /// Read and parse a script file.
    pub async fn load(path: impl AsRef<Path>, interval: Duration) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let script = tokio::fs::read_to_string(path).await?;
        let source = Self::parse(&script, interval)?;
        info!(path = %path.display(), frames = source.frames.len(), "loaded frame script");
        Ok(source)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

#[async_trait]
impl ObservationSource for ScriptedSource {
    async fn run(&mut self, tx: mpsc::Sender<Frame>) {
        let mut ticker = time::interval(self.interval);
        for frame in self.frames.drain(..) {
            ticker.tick().await;
            debug!(?frame, "replaying frame");
            if tx.send(frame).await.is_err() {
                break;
            }
        }
    }
}
