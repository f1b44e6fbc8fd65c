//! Summary strip with dataset-wide totals and averages.

use crate::gui::format::{format_count, format_percent, format_score};
use crate::stats::DatasetSummary;
use egui::{Color32, RichText};

pub struct SummaryPanel;

impl SummaryPanel {
    pub fn show(ui: &mut egui::Ui, summary: &DatasetSummary) {
        let cards = [
            ("Reels", format_count(summary.count as u64)),
            ("Total Views", format_count(summary.total_views)),
            ("Total Likes", format_count(summary.total_likes)),
            ("Total Comments", format_count(summary.total_comments)),
            ("Avg Engagement", format_percent(summary.avg_engagement_rate)),
            ("Median Engagement", format_percent(summary.median_engagement_rate)),
            ("Avg Score", format_score(summary.avg_engagement_score)),
            ("Avg Viral Coef.", format_score(summary.avg_viral_coefficient)),
        ];

        ui.horizontal_wrapped(|ui| {
            for (title, value) in cards {
                egui::Frame::none()
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .rounding(6.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_min_width(110.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(title).size(11.0).color(Color32::GRAY));
                            ui.label(RichText::new(value).size(16.0).strong());
                        });
                    });
            }
        });
    }
}
