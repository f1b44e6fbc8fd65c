//! Control Panel Widget
//! Left side panel with data source, ranking and filter controls.

use crate::metrics::{Metric, SortOrder};
use crate::state::{Action, DashboardState, LoadPhase};
use egui::{Color32, ComboBox, RichText};

/// Severity of the status line; picks its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn color(self) -> Color32 {
        match self {
            StatusKind::Info => Color32::GRAY,
            StatusKind::Success => Color32::from_rgb(40, 167, 69),
            StatusKind::Error => Color32::from_rgb(220, 53, 69),
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    /// Text currently in the filter box; mirrored into the state on change.
    pub filter_text: String,
    pub status: String,
    pub status_kind: StatusKind,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 Reel Insights")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Performance Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = state
                    .source()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file loaded".to_string());
                ui.label(RichText::new(&path_text).size(12.0).color(
                    if state.source().is_some() {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    },
                ));

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!state.is_loading(), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                        if ui.button("🔄 Reload").clicked() {
                            action = ControlPanelAction::Reload;
                        }
                    });
                });

                let rejected = state.rejected().len();
                if rejected > 0 {
                    ui.label(
                        RichText::new(format!("⚠ {} invalid rows skipped", rejected))
                            .size(11.0)
                            .color(Color32::from_rgb(243, 156, 18)),
                    );
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Ranking Section =====
        ui.label(RichText::new("🏆 Ranking").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 90.0;
        let combo_width = 170.0;

        let mut metric = state.metric();
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Metric:"));
            ComboBox::from_id_salt("metric")
                .width(combo_width)
                .selected_text(metric.label())
                .show_ui(ui, |ui| {
                    for m in Metric::ALL {
                        ui.selectable_value(&mut metric, m, m.label());
                    }
                });
        });
        if metric != state.metric() {
            action = ControlPanelAction::Dispatch(Action::SetMetric(metric));
        }

        ui.add_space(5.0);

        let mut order = state.query().order;
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Sort Order:"));
            ui.radio_value(&mut order, SortOrder::Desc, SortOrder::Desc.label());
            ui.radio_value(&mut order, SortOrder::Asc, SortOrder::Asc.label());
        });
        if order != state.query().order {
            action = ControlPanelAction::Dispatch(Action::SetSortOrder(order));
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filter Section =====
        ui.label(RichText::new("🔍 Filter").size(14.0).strong());
        ui.add_space(5.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut self.filter_text)
                .hint_text("Search by URL...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            action = ControlPanelAction::Dispatch(Action::SetFilter(self.filter_text.clone()));
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Buttons =====
        let export_enabled = *state.phase() == LoadPhase::Ready && !state.reels().is_empty();
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(export_enabled, |ui| {
                let json_button = egui::Button::new(RichText::new("📄 Export JSON").size(14.0))
                    .min_size(egui::vec2(170.0, 30.0));
                if ui.add(json_button).clicked() {
                    action = ControlPanelAction::ExportJson;
                }

                ui.add_space(6.0);

                let png_button = egui::Button::new(RichText::new("🖼 Export Chart").size(14.0))
                    .min_size(egui::vec2(170.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportChart;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(
            RichText::new(&self.status)
                .size(11.0)
                .color(self.status_kind.color()),
        );

        action
    }

    pub fn set_status(&mut self, kind: StatusKind, status: impl Into<String>) {
        self.status_kind = kind;
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Reload,
    ExportJson,
    ExportChart,
    Dispatch(Action),
}
