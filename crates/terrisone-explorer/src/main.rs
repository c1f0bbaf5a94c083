//! Entry point for the Terrisone environmental dashboard.
//!
//! Launches the Dioxus desktop application. Leaflet is loaded from a CDN
//! into the webview head.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use terrisone_core::ExplorerConfig;
use terrisone_explorer::app::{self, App};
use terrisone_explorer::route::Route;
use terrisone_logging::{LogConfig, TerrisoneSubscriberBuilder};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

const LEAFLET_VERSION: &str = "1.9.4";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "terrisone-explorer")]
#[command(about = "Environmental indicators for the regions of Peru")]
struct Args {
    /// Initial view, by path (e.g. "map", "servicios")
    #[arg(short, long, default_value = "")]
    route: String,

    /// TOML file with explorer settings (defaults are used if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let logging = if args.verbose && args.log_dir.is_none() {
        terrisone_logging::init_development()
    } else {
        let mut log_config = if args.verbose {
            LogConfig::development()
        } else {
            LogConfig::default()
        };
        if let Some(dir) = &args.log_dir {
            log_config = log_config.with_log_dir(dir.clone());
        }
        TerrisoneSubscriberBuilder::new().with_config(log_config).init()
    };
    // Held for the lifetime of the app so buffered file logs flush on exit
    let _guard = match logging {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    let config = match &args.config {
        Some(path) => ExplorerConfig::load(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load config from {}: {}", path.display(), e);
            ExplorerConfig::default()
        }),
        None => ExplorerConfig::default(),
    };

    let route = Route::from_path(&args.route);
    tracing::info!(%route, "Starting Terrisone explorer");
    app::configure(route, config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("BioTerrisone - Region Explorer")
                        .with_inner_size(LogicalSize::new(1400, 900)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css" crossorigin="">
                    <script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js" crossorigin=""></script>
                    <style>{STYLES_CSS}</style>
                    "#
                )),
        )
        .launch(App);
}
