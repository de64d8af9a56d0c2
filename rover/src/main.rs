use clap::Parser;
use rover::{
    DEFAULT_LOG_LEVEL, Driver, EventBus, LoggingActuator, Overrides, check_timing, init_logging,
    load_config,
};
use sensor::{ObservationSource, ScriptedSource};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing::info;
use tracker::TrackingController;

#[derive(Parser)]
#[command(author, version, about)]
/// Replay a face-observation script through the tracking controller.
struct Cli {
    /// JSON-lines frame script to replay
    #[arg(long)]
    script: PathBuf,
    /// Optional JSON file with tracker thresholds
    #[arg(long, env = "ROVER_CONFIG")]
    config: Option<PathBuf>,
    /// Frame period in milliseconds
    #[arg(long, default_value_t = 33)]
    interval_ms: u64,
    /// Wait for a frame before treating the tick as empty
    #[arg(long, default_value_t = 500)]
    frame_timeout_ms: u64,
    /// Log level when RUST_LOG is unset
    #[arg(long, env = "ROVER_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[command(flatten)]
    overrides: Overrides,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (bus, frames) = EventBus::new();
    init_logging(&cli.log_level, bus.log_sender())?;

    let interval = Duration::from_millis(cli.interval_ms);
    let frame_timeout = Duration::from_millis(cli.frame_timeout_ms);
    check_timing(interval, frame_timeout)?;

    let config = load_config(cli.config.as_deref(), &cli.overrides).await?;
    let mut controller = TrackingController::new(config, Arc::new(LoggingActuator));
    controller.add_listener(Arc::new(bus.listener()));
    let driver = Driver::new(controller, frame_timeout);

    let stop = driver.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop.request_stop();
        }
    });

    let mut events = bus.subscribe_tracking();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(event = %serde_json::to_string(&event).unwrap_or_default(), "tracking");
        }
    });

    let mut source = ScriptedSource::load(&cli.script, interval).await?;
    let tx = bus.frame_sender();
    tokio::spawn(async move {
        source.run(tx).await;
    });
    // the frame queue closes once the source finishes
    drop(bus);

    let summary = driver.run(frames).await?;
    println!(
        "ticks={} timeouts={} acquired={} lost={}",
        summary.ticks, summary.timeouts, summary.acquisitions, summary.losses
    );
    Ok(())
}
