//! Stats module - dataset-wide aggregates

mod summary;

pub use summary::DatasetSummary;
