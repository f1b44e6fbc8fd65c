//! Report Export
//! Writes the current dashboard view as JSON or as a PNG ranking chart.

use crate::charts::StaticChartRenderer;
use crate::metrics::{Metric, RankedReel, Reel, SortOrder};
use crate::state::DashboardState;
use crate::stats::DatasetSummary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

pub const PNG_WIDTH: u32 = 1400;
pub const PNG_HEIGHT: u32 = 800;

/// Snapshot of what the dashboard currently shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport<'a> {
    pub source: Option<String>,
    pub metric: Metric,
    pub order: SortOrder,
    pub filter: &'a str,
    pub rejected_rows: usize,
    pub summary: DatasetSummary,
    pub top: Vec<RankedReel<'a>>,
    pub table: Vec<&'a Reel>,
}

impl<'a> DashboardReport<'a> {
    pub fn from_state(state: &'a DashboardState) -> Self {
        Self {
            source: state.source().map(|p| p.display().to_string()),
            metric: state.metric(),
            order: state.query().order,
            filter: &state.query().filter,
            rejected_rows: state.rejected().len(),
            summary: state.summary(),
            top: state.top_reels(),
            table: state.table_rows(),
        }
    }
}

pub fn export_json(path: &Path, state: &DashboardState) -> Result<()> {
    let report = DashboardReport::from_state(state);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = report.table.len(), "exported json report");
    Ok(())
}

pub fn export_ranking_png(path: &Path, state: &DashboardState) -> Result<()> {
    let top = state.top_reels();
    let png = StaticChartRenderer::render_ranking_png(&top, state.metric(), PNG_WIDTH, PNG_HEIGHT)
        .context("Failed to render ranking chart")?;
    fs::write(path, png).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), metric = ?state.metric(), "exported ranking chart");
    Ok(())
}
