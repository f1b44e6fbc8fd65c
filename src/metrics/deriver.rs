//! Metric Deriver
//! Computes engagement rate, engagement score, viral coefficient and the short
//! URL for each raw row.

use crate::data::RawReel;
use rayon::prelude::*;
use serde::Serialize;

/// Comments count three times as much as likes in the engagement score.
pub const COMMENT_WEIGHT: f64 = 3.0;
pub const LIKE_WEIGHT: f64 = 1.0;

/// A Reel with its derived scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reel {
    pub id: usize,
    pub reel: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub engagement_rate: f64,
    pub engagement_score: f64,
    pub viral_coefficient: f64,
    pub short_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

/// Second-to-last non-empty path segment of a Reel URL.
///
/// A URL with a single segment yields that segment; one with none yields an
/// empty string.
pub fn short_url(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 => String::new(),
        1 => segments[0].to_string(),
        n => segments[n - 2].to_string(),
    }
}

pub struct MetricDeriver;

impl MetricDeriver {
    /// Derive scores for one row. Callers guarantee `views > 0`; the loader
    /// rejects every row that does not satisfy it.
    pub fn derive(raw: RawReel) -> Reel {
        let views = raw.views as f64;
        let likes = raw.likes as f64;
        let comments = raw.comments as f64;

        let engagement_rate = (likes + comments) / views * 100.0;
        let engagement_score = (likes * LIKE_WEIGHT + comments * COMMENT_WEIGHT) / views * 100.0;
        let viral_coefficient = views.log10() * engagement_rate / 100.0;

        Reel {
            id: raw.id,
            short_url: short_url(&raw.reel),
            reel: raw.reel,
            views: raw.views,
            likes: raw.likes,
            comments: raw.comments,
            engagement_rate,
            engagement_score,
            viral_coefficient,
            extra: raw.extra,
        }
    }

    /// Derive all rows in parallel, keeping ingestion order.
    pub fn derive_all(rows: Vec<RawReel>) -> Vec<Reel> {
        rows.into_par_iter().map(Self::derive).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: usize, url: &str, views: u64, likes: u64, comments: u64) -> RawReel {
        RawReel {
            id,
            reel: url.to_string(),
            views,
            likes,
            comments,
            extra: Vec::new(),
        }
    }

    #[test]
    fn derives_reference_example() {
        let reel = MetricDeriver::derive(raw(1, "https://x/y/aaa111", 1000, 100, 10));

        assert!((reel.engagement_rate - 11.0).abs() < 1e-9);
        assert!((reel.engagement_score - 13.0).abs() < 1e-9);
        assert!((reel.viral_coefficient - 3.0 * 11.0 / 100.0).abs() < 1e-9);
        assert_eq!(reel.short_url, "y");
    }

    #[test]
    fn formulas_hold_for_arbitrary_counts() {
        for (views, likes, comments) in [(1u64, 0u64, 0u64), (37, 5, 2), (2_500_000, 120_000, 9_000)] {
            let reel = MetricDeriver::derive(raw(1, "https://a/b/c", views, likes, comments));
            let v = views as f64;
            let rate = (likes + comments) as f64 / v * 100.0;
            let score = (likes as f64 + 3.0 * comments as f64) / v * 100.0;

            assert!((reel.engagement_rate - rate).abs() < 1e-9);
            assert!((reel.engagement_score - score).abs() < 1e-9);
            assert!((reel.viral_coefficient - v.log10() * rate / 100.0).abs() < 1e-9);
            assert!(reel.viral_coefficient.is_finite());
        }
    }

    #[test]
    fn short_url_handles_reel_links() {
        assert_eq!(short_url("https://www.instagram.com/reel/C4xYz12AbCd/"), "reel");
        assert_eq!(short_url("https://www.instagram.com/reel/C4xYz12AbCd/?igsh=1"), "C4xYz12AbCd");
        assert_eq!(short_url("standalone"), "standalone");
        assert_eq!(short_url("///"), "");
    }

    #[test]
    fn derive_all_keeps_order() {
        let rows = (1..=50)
            .map(|i| raw(i, &format!("https://x/r{i}/p"), 100 + i as u64, i as u64, 1))
            .collect();
        let reels = MetricDeriver::derive_all(rows);
        let ids: Vec<usize> = reels.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    }
}
