use anyhow::Context;
use std::io::{self, Write};
use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, fmt};

/// Log level used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the rover's subscriber: formatted lines on stdout, each complete
/// line also published on `tx` for UI consumers.
///
/// `RUST_LOG` wins over `level` so per-module filters stay available.
///
/// ```
/// use tokio::sync::broadcast;
/// use rover::init_logging;
///
/// let (tx, _rx) = broadcast::channel(10);
/// init_logging("debug", tx).unwrap();
/// ```
pub fn init_logging(level: &str, tx: broadcast::Sender<String>) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?,
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || LineTee::new(io::stdout(), tx.clone()))
        .try_init();
    Ok(())
}

/// Writer that passes bytes through to `inner` and publishes every finished
/// line on a broadcast channel.
///
/// Partial lines are held until their newline arrives or the writer drops.
struct LineTee<W: Write> {
    inner: W,
    tx: broadcast::Sender<String>,
    pending: Vec<u8>,
}

impl<W: Write> LineTee<W> {
    fn new(inner: W, tx: broadcast::Sender<String>) -> Self {
        Self {
            inner,
            tx,
            pending: Vec::new(),
        }
    }

    fn publish(&self, line: &[u8]) {
        let text = String::from_utf8_lossy(line);
        let text = text.trim_end();
        if !text.is_empty() {
            let _ = self.tx.send(text.to_string());
        }
    }
}

impl<W: Write> Write for LineTee<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.pending.extend_from_slice(&buf[..n]);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.publish(&line);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> Drop for LineTee<W> {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.publish(&rest);
        }
    }
}
