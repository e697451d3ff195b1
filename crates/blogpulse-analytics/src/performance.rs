//! Stand-alone performance indicators for a post: engagement, quality,
//! virality, competitive position and a handful of simple rates.
//!
//! Scores are `f64` on a 0–100 scale; rates are percentages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::safe_div;
use crate::trend::TrendDataPoint;

/// Seconds on page that earn the full time component.
const FULL_TIME_ON_PAGE: f64 = 300.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementMetrics {
    pub page_views: u64,
    /// Seconds.
    pub avg_time_on_page: u64,
    /// Percent of single-page sessions.
    pub bounce_rate: f64,
    /// Percent of the page scrolled.
    pub avg_scroll_depth: f64,
    pub social_shares: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentQualityMetrics {
    pub seo_score: u8,
    pub readability_score: u8,
    pub word_count: usize,
    pub internal_links: usize,
    pub external_links: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViralityMetrics {
    pub page_views: u64,
    pub social_shares: u64,
    /// Views gained per day.
    pub growth_velocity: f64,
    /// Engagements gained per day.
    pub engagement_velocity: f64,
    /// Number of platforms the post was shared on.
    pub platform_reach: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitiveMetrics {
    pub market_share: f64,
    pub content_volume: u64,
    pub avg_engagement: f64,
    pub innovation_score: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceCalculator;

#[allow(clippy::unused_self)]
impl PerformanceCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Time on page 30, bounce rate (inverted) 25, scroll depth 20, shares
    /// up to 15 and comments up to 10. Posts without views score 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn engagement_score(&self, metrics: &EngagementMetrics) -> f64 {
        if metrics.page_views == 0 {
            return 0.0;
        }

        let time = (metrics.avg_time_on_page as f64 / FULL_TIME_ON_PAGE).min(1.0) * 30.0;
        let bounce = (1.0 - (metrics.bounce_rate / 100.0).clamp(0.0, 1.0)) * 25.0;
        let scroll = (metrics.avg_scroll_depth / 100.0).clamp(0.0, 1.0) * 20.0;
        let shares = log_points(metrics.social_shares as f64, 10.0, 15.0);
        let comments = log_points(metrics.comments as f64, 5.0, 10.0);

        (time + bounce + scroll + shares + comments).min(100.0)
    }

    #[must_use]
    pub fn content_quality_score(&self, metrics: &ContentQualityMetrics) -> f64 {
        let seo = f64::from(metrics.seo_score) * 0.4;
        let readability = f64::from(metrics.readability_score) * 0.25;

        let word_count = match metrics.word_count {
            1000..=3000 => 15.0,
            500..=999 => 10.0,
            3001..=5000 => 12.0,
            _ => 5.0,
        };
        let internal_links = match metrics.internal_links {
            3..=10 => 10.0,
            1..=2 => 7.0,
            0 => 0.0,
            _ => 6.0,
        };
        let external_links = match metrics.external_links {
            2..=5 => 10.0,
            1 => 7.0,
            0 => 0.0,
            _ => 8.0,
        };

        (seo + readability + word_count + internal_links + external_links).min(100.0)
    }

    /// Share rate 40, growth velocity up to 30, engagement velocity up to
    /// 20, platform reach up to 10.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn virality_score(&self, metrics: &ViralityMetrics) -> f64 {
        if metrics.page_views == 0 {
            return 0.0;
        }

        let share_rate = metrics.social_shares as f64 / metrics.page_views as f64;
        let shares = (share_rate * 1000.0).min(1.0) * 40.0;
        let growth = log_points(metrics.growth_velocity, 10.0, 30.0);
        let engagement = log_points(metrics.engagement_velocity, 7.0, 20.0);
        let reach = (f64::from(metrics.platform_reach) * 2.0).min(10.0);

        (shares + growth + engagement + reach).min(100.0)
    }

    #[must_use]
    pub fn roi(&self, revenue: f64, cost: f64) -> f64 {
        safe_div(revenue - cost, cost) * 100.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn conversion_rate(&self, conversions: u64, visitors: u64) -> f64 {
        safe_div(conversions as f64, visitors as f64) * 100.0
    }

    /// Growth from a zero baseline is reported as 100%.
    #[must_use]
    pub fn growth_rate(&self, current: f64, previous: f64) -> f64 {
        if previous == 0.0 {
            return 100.0;
        }
        (current - previous) / previous * 100.0
    }

    /// Least-squares slope over the point index, centred on 50. Fewer than
    /// two points score a neutral 50.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn trend_score(&self, points: &[TrendDataPoint]) -> f64 {
        if points.len() < 2 {
            return 50.0;
        }

        let n = points.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for (i, point) in points.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += point.value;
            sum_xy += x * point.value;
            sum_x2 += x * x;
        }
        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);

        (50.0 + slope * 10.0).clamp(0.0, 100.0)
    }

    /// Each month's value as a percentage of the mean, keyed 1-based.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seasonality_index(&self, monthly: &[f64]) -> BTreeMap<u32, f64> {
        if monthly.is_empty() {
            return BTreeMap::new();
        }
        let average = monthly.iter().sum::<f64>() / monthly.len() as f64;

        (1u32..)
            .zip(monthly)
            .map(|(month, &value)| {
                let index = if average > 0.0 {
                    value / average * 100.0
                } else {
                    100.0
                };
                (month, index)
            })
            .collect()
    }

    /// Market share 30, content volume 25, engagement ratio 25 (capped at
    /// twice the competitor), innovation 20.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn competitive_score(
        &self,
        own: &CompetitiveMetrics,
        competitor: &CompetitiveMetrics,
    ) -> f64 {
        let total_share = own.market_share + competitor.market_share;
        let market_share = safe_div(own.market_share, total_share) * 30.0;

        let total_volume = own.content_volume.saturating_add(competitor.content_volume);
        let volume = safe_div(own.content_volume as f64, total_volume as f64) * 25.0;

        let engagement = if competitor.avg_engagement > 0.0 {
            (own.avg_engagement / competitor.avg_engagement).min(2.0) * 12.5
        } else {
            25.0
        };

        let innovation = f64::from(own.innovation_score) * 0.2;

        (market_share + volume + engagement + innovation).min(100.0)
    }
}

/// `log10(count + 1) * scale`, capped; non-positive counts earn nothing.
fn log_points(count: f64, scale: f64, cap: f64) -> f64 {
    if count <= 0.0 {
        return 0.0;
    }
    ((count + 1.0).log10() * scale).min(cap)
}
