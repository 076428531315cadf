//! `trailcam` - Trail camera menu simulator
//!
//! Console front end: button names are read from stdin, one per line, and every
//! resulting state is printed to stdout. Settings persist in the data directory.

// Console module is only in the binary, not the library
mod console;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::info;
use trailcam::{ConfigManager, MenuController, utils};

/// Snapshots buffered between the controller and the renderer
const RENDER_QUEUE_DEPTH: usize = 32;

/// Trail camera menu simulator
#[derive(Debug, Parser)]
#[command(name = "trailcam", version, about)]
struct Args {
    /// Directory holding settings.json and the logs [default: $TRAILCAM_HOME or ./.trailcam]
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Length of one countdown second, in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(ConfigManager::default_data_dir);

    utils::init_logging(&data_dir, &args.log_level)
        .context("Failed to initialize logging system")?;

    let store = ConfigManager::in_dir(&data_dir);
    info!("Settings file: {}", store.path().display());

    let (state_tx, state_rx) = mpsc::sync_channel(RENDER_QUEUE_DEPTH);
    let (event_tx, event_rx) = mpsc::channel();

    let controller_handle = MenuController::new(store)
        .with_state_sender(state_tx)
        .spawn(event_rx, Some(Duration::from_millis(args.tick_ms)));

    let renderer_handle = thread::spawn(move || {
        for snapshot in state_rx {
            println!("{}", console::render(&snapshot));
        }
    });

    // Not joined: a blocked stdin read must not hold up shutdown
    thread::spawn(move || console::read_buttons(io::stdin().lock(), &event_tx));

    let controller = controller_handle
        .join()
        .map_err(|_| anyhow!("Menu controller thread panicked"))?;
    // Dropping the controller closes the snapshot channel
    drop(controller);
    renderer_handle
        .join()
        .map_err(|_| anyhow!("Renderer thread panicked"))?;

    info!("trailcam shutting down");
    Ok(())
}
