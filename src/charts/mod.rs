//! Charts module - interactive plots and static export rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, ACCENT_COLOR, COMMENTS_COLOR, LIKES_COLOR, PALETTE};
pub use renderer::{RenderError, StaticChartRenderer};
