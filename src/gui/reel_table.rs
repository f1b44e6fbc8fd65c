//! Reel Table Widget
//! Striped, paginated table of the filtered and sorted reels.

use crate::gui::format::{format_count, format_percent, format_score};
use crate::metrics::{Metric, Reel, TableView};
use crate::state::Action;
use egui::{Color32, RichText};
use tracing::warn;

const HEADER_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

pub struct ReelTable;

impl ReelTable {
    /// Draw the current page. Returns the action triggered by a row or a
    /// pagination button.
    pub fn show(
        ui: &mut egui::Ui,
        view: &TableView<'_>,
        metric: Metric,
        selected: Option<usize>,
    ) -> Option<Action> {
        let mut action = None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("reel_table")
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        Self::header(ui, metric);

                        for reel in &view.rows {
                            if let Some(a) = Self::row(ui, reel, selected) {
                                action = Some(a);
                            }
                        }
                    });

                if view.rows.is_empty() {
                    ui.label(RichText::new("No matching reels").color(Color32::GRAY));
                }
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.has_previous(), egui::Button::new("◀ Previous"))
                .clicked()
            {
                action = Some(Action::PreviousPage);
            }
            ui.label(format!(
                "Page {} of {} ({} reels)",
                view.page,
                view.page_count.max(1),
                view.filtered_count
            ));
            if ui
                .add_enabled(view.has_next(), egui::Button::new("Next ▶"))
                .clicked()
            {
                action = Some(Action::NextPage);
            }
        });

        action
    }

    fn header(ui: &mut egui::Ui, metric: Metric) {
        let columns = [
            ("#", None),
            ("Reel", None),
            ("Link", None),
            ("Views", Some(Metric::Views)),
            ("Likes", Some(Metric::Likes)),
            ("Comments", Some(Metric::Comments)),
            ("Eng. Rate", Some(Metric::EngagementRate)),
            ("Eng. Score", Some(Metric::EngagementScore)),
            ("Viral Coef.", Some(Metric::ViralCoefficient)),
        ];
        for (title, column_metric) in columns {
            let text = RichText::new(title).strong().size(12.0);
            if column_metric == Some(metric) {
                ui.label(text.color(HEADER_COLOR));
            } else {
                ui.label(text);
            }
        }
        ui.end_row();
    }

    fn row(ui: &mut egui::Ui, reel: &Reel, selected: Option<usize>) -> Option<Action> {
        let mut action = None;

        ui.label(reel.id.to_string());
        if ui
            .selectable_label(selected == Some(reel.id), &reel.short_url)
            .on_hover_text(&reel.reel)
            .clicked()
        {
            action = Some(Action::Select(reel.id));
        }
        if ui.link("Open ↗").clicked() {
            open_reel(&reel.reel);
        }
        ui.label(format_count(reel.views));
        ui.label(format_count(reel.likes));
        ui.label(format_count(reel.comments));
        ui.label(format_percent(reel.engagement_rate));
        ui.label(format_score(reel.engagement_score));
        ui.label(format_score(reel.viral_coefficient));
        ui.end_row();

        action
    }
}

/// Open a Reel URL in the system browser. The URL is passed through as-is.
pub fn open_reel(url: &str) {
    if let Err(e) = open::that(url) {
        warn!(url, error = %e, "failed to open reel link");
    }
}
