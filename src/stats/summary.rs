//! Dataset Summary
//! Aggregate statistics over all loaded reels.

use crate::metrics::Reel;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};

/// Totals and averages for the summary strip.
///
/// Totals of an empty dataset are zero; every average is `NaN` and the
/// presentation layer renders it as a placeholder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub avg_engagement_rate: f64,
    pub avg_engagement_score: f64,
    pub avg_viral_coefficient: f64,
    pub median_engagement_rate: f64,
    pub engagement_rate_std: f64,
}

impl DatasetSummary {
    pub fn compute(reels: &[Reel]) -> Self {
        let rates: Vec<f64> = reels.iter().map(|r| r.engagement_rate).collect();

        let median_engagement_rate = if rates.is_empty() {
            f64::NAN
        } else {
            Data::new(rates.clone()).median()
        };

        Self {
            count: reels.len(),
            total_views: saturating_total(reels.iter().map(|r| r.views)),
            total_likes: saturating_total(reels.iter().map(|r| r.likes)),
            total_comments: saturating_total(reels.iter().map(|r| r.comments)),
            avg_engagement_rate: rates.iter().mean(),
            avg_engagement_score: reels.iter().map(|r| r.engagement_score).mean(),
            avg_viral_coefficient: reels.iter().map(|r| r.viral_coefficient).mean(),
            median_engagement_rate,
            engagement_rate_std: rates.iter().std_dev(),
        }
    }
}

/// Totals stay pinned at `u64::MAX` instead of wrapping.
fn saturating_total(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0u64, u64::saturating_add)
}
