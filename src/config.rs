//! Launch configuration and logging setup.

use crate::metrics::{Metric, SortOrder};
use crate::state::DashboardState;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(name = "reel-insights", version, about = "Reel performance dashboard")]
pub struct LaunchConfig {
    /// CSV export to load at startup (columns: Reel,Views,Likes,Comments)
    #[arg(long, default_value = "reels.csv")]
    pub csv: PathBuf,

    /// Initial ranking metric
    #[arg(long, value_enum, default_value_t = Metric::EngagementRate)]
    pub metric: Metric,

    /// Initial table sort order
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,
}

impl LaunchConfig {
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(self.metric, self.order)
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
