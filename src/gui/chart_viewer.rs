//! Chart Viewer Widget
//! The two ranking charts side by side.

use crate::charts::ChartPlotter;
use crate::metrics::{Metric, RankedReel};
use egui::RichText;

const CHART_SPACING: f32 = 15.0;

pub struct ChartViewer;

impl ChartViewer {
    /// Draw both charts. Returns the id of a reel whose bar was clicked.
    pub fn show(ui: &mut egui::Ui, top: &[RankedReel<'_>], metric: Metric) -> Option<usize> {
        if top.is_empty() {
            ui.label(RichText::new("No Data").size(16.0));
            return None;
        }

        let chart_width = ((ui.available_width() - CHART_SPACING) / 2.0).max(200.0);
        let mut clicked = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(chart_width);
                ui.label(
                    RichText::new(format!("Top {} by {}", top.len(), metric.label()))
                        .size(14.0)
                        .strong(),
                );
                clicked = ChartPlotter::draw_ranking_chart(ui, top, metric);
            });

            ui.add_space(CHART_SPACING);

            ui.vertical(|ui| {
                ui.set_width(chart_width);
                ui.label(RichText::new("Likes vs Comments").size(14.0).strong());
                if let Some(id) = ChartPlotter::draw_interaction_chart(ui, top) {
                    clicked = Some(id);
                }
            });
        });

        clicked
    }
}
