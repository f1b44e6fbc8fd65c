//! Data module - CSV loading and background load tasks

mod loader;
mod reel;
mod task;

pub use loader::{Dataset, LoadError, LoadOutcome, ReelLoader, RejectedRow, RowIssue};
pub use reel::{RawReel, COMMENTS_COL, LIKES_COL, REEL_COL, REQUIRED_COLUMNS, VIEWS_COL};
pub use task::LoadTask;
