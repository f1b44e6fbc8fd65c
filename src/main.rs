//! Reel Insights - Reel Performance Dashboard
//!
//! Desktop viewer for Reel engagement metrics with interactive rankings.

use clap::Parser;
use eframe::egui;
use reel_insights::config::{self, LaunchConfig};
use reel_insights::gui::ReelInsightsApp;

fn main() -> eframe::Result<()> {
    let config = LaunchConfig::parse();
    config::init_logging();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Reel Insights"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Reel Insights",
        options,
        Box::new(move |cc| Ok(Box::new(ReelInsightsApp::new(cc, config)))),
    )
}
