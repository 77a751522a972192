//! radial-timer - a countdown timer with an animated radial dial
//!
//! Parses the command line, sets up file logging and runs the timer screen.

use anyhow::Context;
use bubbletea_rs::Program;
use tracing::info;

use radial_timer::{logging, App, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(&config)?;

    info!(
        color = %config.color,
        radius = config.radius,
        reset_delay_ms = config.reset_delay_ms,
        "starting radial-timer"
    );

    config.install();

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .context("building the terminal program")?;

    program.run().await.context("running the timer screen")?;

    info!("radial-timer exited");
    Ok(())
}
