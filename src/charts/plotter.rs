//! Chart Plotter Module
//! Interactive ranking charts using egui_plot.

use crate::metrics::{Metric, RankedReel};
use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotResponse};

pub const ACCENT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const LIKES_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const COMMENTS_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
    Color32::from_rgb(46, 204, 113),  // Green
];

const BAR_WIDTH: f64 = 0.6;
const CHART_HEIGHT: f32 = 280.0;

/// Draws the charts of the ranking area.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn bar_color(rank_index: usize) -> Color32 {
        PALETTE[rank_index % PALETTE.len()]
    }

    /// Bar chart of the active metric for the top entries.
    /// Returns the id of the reel whose bar was clicked.
    pub fn draw_ranking_chart(
        ui: &mut egui::Ui,
        top: &[RankedReel<'_>],
        metric: Metric,
    ) -> Option<usize> {
        let bars: Vec<Bar> = top
            .iter()
            .enumerate()
            .map(|(i, ranked)| {
                Bar::new(i as f64, metric.value(ranked.reel))
                    .width(BAR_WIDTH)
                    .name(&ranked.display_url)
                    .fill(Self::bar_color(i))
            })
            .collect();

        let response = Plot::new(format!("ranking_{:?}", metric))
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .y_axis_label(metric.label())
            .x_axis_formatter(Self::label_formatter(top))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(metric.label()).color(ACCENT_COLOR));
                plot_ui.pointer_coordinate()
            });

        Self::clicked_reel(&response, top)
    }

    /// Stacked likes/comments for the same top entries.
    pub fn draw_interaction_chart(ui: &mut egui::Ui, top: &[RankedReel<'_>]) -> Option<usize> {
        let likes_bars: Vec<Bar> = top
            .iter()
            .enumerate()
            .map(|(i, ranked)| {
                Bar::new(i as f64, ranked.reel.likes as f64)
                    .width(BAR_WIDTH)
                    .name(&ranked.display_url)
            })
            .collect();
        let comment_bars: Vec<Bar> = top
            .iter()
            .enumerate()
            .map(|(i, ranked)| {
                Bar::new(i as f64, ranked.reel.comments as f64)
                    .width(BAR_WIDTH)
                    .name(&ranked.display_url)
            })
            .collect();

        let response = Plot::new("interaction_breakdown")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .y_axis_label("Interactions")
            .x_axis_formatter(Self::label_formatter(top))
            .show(ui, |plot_ui| {
                let likes = BarChart::new(likes_bars).name("Likes").color(LIKES_COLOR);
                let comments = BarChart::new(comment_bars)
                    .name("Comments")
                    .color(COMMENTS_COLOR)
                    .stack_on(&[&likes]);
                plot_ui.bar_chart(likes);
                plot_ui.bar_chart(comments);
                plot_ui.pointer_coordinate()
            });

        Self::clicked_reel(&response, top)
    }

    /// X axis shows the display URL under each bar and nothing between bars.
    fn label_formatter(
        top: &[RankedReel<'_>],
    ) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String + 'static {
        let labels: Vec<String> = top.iter().map(|r| r.display_url.clone()).collect();
        move |mark, _range| Self::bar_label(&labels, mark.value)
    }

    fn bar_label(labels: &[String], x: f64) -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    fn clicked_reel(
        response: &PlotResponse<Option<PlotPoint>>,
        top: &[RankedReel<'_>],
    ) -> Option<usize> {
        if !response.response.clicked() {
            return None;
        }
        let point = response.inner?;
        Self::bar_at(point.x, top.len()).and_then(|i| top.get(i).map(|r| r.reel.id))
    }

    /// Index of the bar under plot coordinate `x`, if any.
    pub fn bar_at(x: f64, bar_count: usize) -> Option<usize> {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > BAR_WIDTH / 2.0 {
            return None;
        }
        let idx = idx as usize;
        (idx < bar_count).then_some(idx)
    }
}
