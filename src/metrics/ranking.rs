//! Ranker
//! Orders records by the active metric and keeps the top entries for charts.

use crate::metrics::{Metric, Reel};
use serde::Serialize;

/// Number of entries shown in the ranking charts.
pub const TOP_N: usize = 10;

const DISPLAY_URL_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankedReel<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub display_url: String,
    #[serde(flatten)]
    pub reel: &'a Reel,
}

/// Last five characters of a short URL, used as chart label.
pub fn display_url(short_url: &str) -> String {
    let len = short_url.chars().count();
    short_url
        .chars()
        .skip(len.saturating_sub(DISPLAY_URL_CHARS))
        .collect()
}

/// All records, highest `metric` first. Ties keep ingestion order.
pub fn rank_by(reels: &[Reel], metric: Metric) -> Vec<&Reel> {
    let mut ranked: Vec<&Reel> = reels.iter().collect();
    ranked.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
    ranked
}

/// The first `n` records by `metric`, annotated for display.
pub fn top_n(reels: &[Reel], metric: Metric, n: usize) -> Vec<RankedReel<'_>> {
    rank_by(reels, metric)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, reel)| RankedReel {
            rank: i + 1,
            display_url: display_url(&reel.short_url),
            reel,
        })
        .collect()
}
