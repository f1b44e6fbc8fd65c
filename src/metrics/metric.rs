//! Ranking metric and sort order selectors.

use crate::metrics::Reel;
use clap::ValueEnum;
use serde::Serialize;

/// The fixed set of fields a user can rank and sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
pub enum Metric {
    Views,
    Likes,
    Comments,
    #[default]
    EngagementRate,
    EngagementScore,
    ViralCoefficient,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Views,
        Metric::Likes,
        Metric::Comments,
        Metric::EngagementRate,
        Metric::EngagementScore,
        Metric::ViralCoefficient,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Views => "Views",
            Metric::Likes => "Likes",
            Metric::Comments => "Comments",
            Metric::EngagementRate => "Engagement Rate (%)",
            Metric::EngagementScore => "Engagement Score",
            Metric::ViralCoefficient => "Viral Coefficient",
        }
    }

    /// Value of this metric for a record, as used for ordering and charts.
    pub fn value(self, reel: &Reel) -> f64 {
        match self {
            Metric::Views => reel.views as f64,
            Metric::Likes => reel.likes as f64,
            Metric::Comments => reel.comments as f64,
            Metric::EngagementRate => reel.engagement_rate,
            Metric::EngagementScore => reel.engagement_score,
            Metric::ViralCoefficient => reel.viral_coefficient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}
