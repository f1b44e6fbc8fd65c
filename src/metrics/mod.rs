//! Metrics module - derived scores, ranking and table views

mod deriver;
mod metric;
mod ranking;
pub mod table;

pub use deriver::{short_url, MetricDeriver, Reel};
pub use metric::{Metric, SortOrder};
pub use ranking::{display_url, rank_by, top_n, RankedReel, TOP_N};
pub use table::{TableQuery, TableView, ROWS_PER_PAGE};
