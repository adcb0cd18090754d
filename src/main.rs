//! RMA Pullback List Maker
//!
//! Paste a pending-pullback list, pick the due date, and export a shareable
//! table image that opens in the system viewer.

mod config;
mod gui;
mod history;
mod parse;
mod report;

use anyhow::Result;
use config::AppPaths;
use gui::PullbackApp;
use history::HistoryStore;
use report::Exporter;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let paths = AppPaths::new();
    paths.ensure_directories()?;

    // A broken history file is reported in the UI but never blocks startup.
    let (history, startup_notice) = match HistoryStore::load(paths.history_file()) {
        Ok(history) => (history, None),
        Err(e) => {
            warn!(error = %e, "failed to load history");
            (
                HistoryStore::empty(paths.history_file()),
                Some(format!("History not loaded: {}", e)),
            )
        }
    };

    let exporter = Exporter::new(paths.exports_dir());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("RMA Pullback List Maker"),
        ..Default::default()
    };

    eframe::run_native(
        "RMA Pullback List Maker",
        options,
        Box::new(move |cc| Ok(Box::new(PullbackApp::new(cc, history, exporter, startup_notice)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {}", e))
}
