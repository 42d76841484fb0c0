//! tailview - A terminal viewer for live log streams
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tailview_app::config::{self, SettingsOverrides};
use tailview_core::logging;
use tailview_core::prelude::*;

/// tailview - Tail a WebSocket log stream in the terminal
#[derive(Parser, Debug)]
#[command(name = "tailview", version)]
#[command(about = "A terminal viewer for live log streams over WebSocket", long_about = None)]
struct Args {
    /// Stream endpoint (ws:// or wss://)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Settings file (default: <config dir>/tailview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Text sent once the connection opens; empty disables it
    #[arg(long)]
    greeting: Option<String>,

    /// Height of one row in layout pixels
    #[arg(long, value_name = "PX")]
    row_height: Option<u32>,

    /// Largest scrollable extent in layout pixels
    #[arg(long, value_name = "PX")]
    max_scroll_height: Option<u64>,

    /// Byte count shown as 100% in the progress display
    #[arg(long, value_name = "BYTES")]
    target_bytes: Option<u64>,

    /// Drop the oldest lines beyond this many
    #[arg(long, value_name = "LINES")]
    max_lines: Option<usize>,

    /// Start with auto-scroll off
    #[arg(long)]
    no_auto_scroll: bool,

    /// Write a commented default settings file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            url: self.url.clone(),
            greeting: self.greeting.clone(),
            row_height_px: self.row_height,
            max_scrollable_height_px: self.max_scroll_height,
            target_bytes: self.target_bytes,
            max_lines: self.max_lines,
            disable_auto_scroll: self.no_auto_scroll,
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config_path() else {
            eprintln!("❌ No config directory on this platform; pass --config <PATH>");
            std::process::exit(1);
        };
        let written = config::init_config_file(&path)?;
        eprintln!("✅ Config file: {}", written.display());
        return Ok(());
    }

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the TUI owns stdout
    logging::init()?;

    let settings = config::merge_settings(
        config::load_settings(args.config.as_deref()),
        args.overrides(),
    );
    info!(
        "Stream: {}",
        settings.stream.url.as_deref().unwrap_or("(none)")
    );

    let result = tailview_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        match e {
            Error::NoStreamUrl => {
                eprintln!("❌ No stream URL configured.");
                eprintln!();
                eprintln!("Pass one as an argument:");
                eprintln!("      tailview ws://localhost:8080/logs");
                eprintln!("or set [stream] url in the config file (tailview --init-config).");
            }
            e => eprintln!("❌ {}", e),
        }
        std::process::exit(1);
    }

    info!("tailview exiting");
    Ok(())
}
