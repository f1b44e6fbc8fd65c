//! Reel Insights Main Application
//! Main window with control panel, summary, charts and the reel table.

use crate::config::LaunchConfig;
use crate::data::LoadTask;
use crate::export;
use crate::gui::{
    ChartViewer, ControlPanel, ControlPanelAction, DetailPopover, ReelTable, StatusKind,
    SummaryPanel,
};
use crate::state::{Action, DashboardState, LoadPhase};
use egui::{Color32, RichText, SidePanel};
use std::path::PathBuf;
use tracing::{error, info};

/// Main application window.
pub struct ReelInsightsApp {
    state: DashboardState,
    source: PathBuf,
    control_panel: ControlPanel,
    popover: DetailPopover,

    // Async CSV loading; replacing or dropping the task cancels it
    load_task: Option<LoadTask>,
}

impl ReelInsightsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: LaunchConfig) -> Self {
        let mut app = Self {
            state: config.initial_state(),
            source: config.csv.clone(),
            control_panel: ControlPanel::new(),
            popover: DetailPopover::new(),
            load_task: None,
        };
        app.start_load(config.csv);
        app
    }

    fn dispatch(&mut self, action: Action) {
        if matches!(action, Action::ClearSelection | Action::LoadStarted) {
            self.popover.close();
        }
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Select a reel and anchor the popover at the pointer.
    fn select(&mut self, ctx: &egui::Context, id: usize) {
        let anchor = ctx.input(|i| i.pointer.interact_pos());
        self.popover.open_at(anchor);
        self.dispatch(Action::Select(id));
    }

    fn start_load(&mut self, path: PathBuf) {
        info!(path = %path.display(), "loading reel export");
        self.control_panel
            .set_status(StatusKind::Info, format!("Loading {}...", path.display()));
        self.source = path.clone();
        self.load_task = Some(LoadTask::spawn(path));
        self.dispatch(Action::LoadStarted);
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(outcome) = self.load_task.as_ref().and_then(LoadTask::poll) else {
            return;
        };
        self.load_task = None;

        match &outcome {
            Ok(dataset) => {
                let status = if dataset.rejected.is_empty() {
                    format!("Loaded {} reels", dataset.rows.len())
                } else {
                    format!(
                        "Loaded {} reels ({} rows skipped)",
                        dataset.rows.len(),
                        dataset.rejected.len()
                    )
                };
                self.control_panel.set_status(StatusKind::Success, status);
            }
            Err(e) => {
                error!(path = %self.source.display(), error = %e, "failed to load reel export");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Error: {}", e));
            }
        }

        self.dispatch(Action::LoadFinished(outcome));
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    fn handle_export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("reel_report.json")
            .save_file()
        else {
            return; // User cancelled
        };

        match export::export_json(&path, &self.state) {
            Ok(()) => self
                .control_panel
                .set_status(StatusKind::Success, format!("Exported {}", path.display())),
            Err(e) => {
                error!(error = %e, "json export failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Error: {:#}", e));
            }
        }
    }

    fn handle_export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("reel_ranking.png")
            .save_file()
        else {
            return;
        };

        match export::export_ranking_png(&path, &self.state) {
            Ok(()) => self
                .control_panel
                .set_status(StatusKind::Success, format!("Exported {}", path.display())),
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.control_panel
                    .set_status(StatusKind::Error, format!("Error: {:#}", e));
            }
        }
    }

    /// Central panel content once data is available.
    fn show_dashboard(&self, ui: &mut egui::Ui) -> Option<DashboardEvent> {
        let mut event = None;

        SummaryPanel::show(ui, &self.state.summary());
        ui.add_space(12.0);

        let top = self.state.top_reels();
        if let Some(id) = ChartViewer::show(ui, &top, self.state.metric()) {
            event = Some(DashboardEvent::Select(id));
        }
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        let view = self.state.table_view();
        let selected = self.state.selected().map(|r| r.id);
        match ReelTable::show(ui, &view, self.state.metric(), selected) {
            Some(Action::Select(id)) => event = Some(DashboardEvent::Select(id)),
            Some(action) => event = Some(DashboardEvent::Dispatch(action)),
            None => {}
        }

        event
    }
}

/// What the central panel asks the app to do after drawing.
enum DashboardEvent {
    Select(usize),
    Dispatch(Action),
}

impl eframe::App for ReelInsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.load_task.is_some() {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &self.state);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::Reload => self.start_load(self.source.clone()),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::ExportChart => self.handle_export_chart(),
                        ControlPanelAction::Dispatch(action) => self.dispatch(action),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - summary, charts and table
        let event = egui::CentralPanel::default()
            .show(ctx, |ui| match self.state.phase() {
                LoadPhase::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading reels...").size(20.0));
                    });
                    None
                }
                LoadPhase::Failed(reason) => {
                    egui::Frame::none()
                        .fill(Color32::from_rgb(248, 215, 218))
                        .rounding(5.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("⚠ Could not load data: {}", reason))
                                    .color(Color32::from_rgb(114, 28, 36)),
                            );
                        });
                    ui.add_space(8.0);
                    egui::ScrollArea::vertical()
                        .show(ui, |ui| self.show_dashboard(ui))
                        .inner
                }
                LoadPhase::Ready => egui::ScrollArea::vertical()
                    .show(ui, |ui| self.show_dashboard(ui))
                    .inner,
            })
            .inner;

        match event {
            Some(DashboardEvent::Select(id)) => self.select(ctx, id),
            Some(DashboardEvent::Dispatch(action)) => self.dispatch(action),
            None => {}
        }

        // Detail popover
        let close = self
            .state
            .selected()
            .and_then(|reel| self.popover.show(ctx, reel));
        if let Some(action) = close {
            self.dispatch(action);
        }
    }
}
