//! Reel Insights - Reel performance analytics
//!
//! Loads a CSV export of Reel metrics, derives engagement scores and serves
//! the ranking, filtering and pagination behind the dashboard.

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;
pub mod metrics;
pub mod state;
pub mod stats;
