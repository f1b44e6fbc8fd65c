//! GUI module - egui-based user interface

pub mod app;
pub mod chart_viewer;
pub mod control_panel;
pub mod detail_popover;
pub mod format;
pub mod reel_table;
pub mod summary_panel;

pub use app::ReelInsightsApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction, StatusKind};
pub use detail_popover::DetailPopover;
pub use reel_table::ReelTable;
pub use summary_panel::SummaryPanel;
