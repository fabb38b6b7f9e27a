//! hwmon — live CPU / GPU / RAM history plots in the terminal.
//!
//! Run with:  `RUST_LOG=info hwmon [path/to/hwmon.toml]`

use anyhow::{Context, Result};
use hwmon_config::{default_path, load as load_config, HwmonConfig, OutputFormat};
use hwmon_core::{HardwareProbe, PlotSink};
use hwmon_panel::{HardwareInfoPanel, PanelSettings};
use hwmon_renderer::{JsonSink, TerminalSink};
use hwmon_system::SysinfoProbe;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time::{self, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging on stderr — stdout belongs to the plots.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("hwmon v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_path);
    let config = load_config(&path)
        .with_context(|| format!("loading config from '{}'", path.display()))?;

    let probe = SysinfoProbe::new();
    match config.display.format {
        OutputFormat::Text => {
            let sink = TerminalSink::new(
                io::stdout(),
                config.display.plot_width,
                config.display.clear_screen,
            );
            run(&config, probe, sink).await
        }
        OutputFormat::Json => run(&config, probe, JsonSink::new(io::stdout())).await,
    }
}

/// Drive the panel at `display.frame_rate` until Ctrl-C.
async fn run<P, S>(config: &HwmonConfig, probe: P, sink: S) -> Result<()>
where
    P: HardwareProbe,
    S: PlotSink,
{
    let mut panel = HardwareInfoPanel::new(&PanelSettings::from(config), probe, sink)
        .context("building hardware panel")?;

    let frame = Duration::from_secs_f64(1.0 / f64::from(config.display.frame_rate));
    let mut ticker = time::interval(frame);
    // A late frame is simply a longer delta; the sampling clock catches up.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(
        interval = config.sampling.interval,
        capacity = config.sampling.capacity,
        frame_rate = config.display.frame_rate,
        "sampling started"
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut last = Instant::now();
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let delta = now.duration_since(last).as_secs_f64();
                last = now;
                match panel.update(delta) {
                    Ok(_) => {}
                    // Only the current sampling cycle is lost; keep running.
                    Err(e) if e.is_cycle_failure() => {
                        tracing::warn!("sampling cycle failed: {e}");
                    }
                    Err(e) => return Err(e).context("panel update failed"),
                }
            }
            _ = &mut shutdown => {
                tracing::info!("interrupted; shutting down");
                break;
            }
        }
    }

    Ok(())
}
