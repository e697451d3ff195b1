use std::collections::BTreeMap;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One observation of a metric (views, leads, revenue, ...) at a point in
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Outcome of a trend analysis. Series shorter than two points are
/// reported rather than analysed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendReport {
    InsufficientData { points: usize },
    Analyzed(Box<TrendAnalysis>),
}

impl TrendReport {
    #[must_use]
    pub fn analysis(&self) -> Option<&TrendAnalysis> {
        match self {
            TrendReport::Analyzed(analysis) => Some(analysis),
            TrendReport::InsufficientData { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub points: usize,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub start_value: f64,
    pub end_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub average_value: f64,
    pub regression: LinearRegression,
    pub direction: TrendDirection,
    pub strength: TrendStrength,
    /// Percent change from the first to the last value.
    pub total_growth: f64,
    /// Mean period-over-period percent change.
    pub average_growth_rate: f64,
    pub seasonality: Seasonality,
    pub anomalies: Vec<Anomaly>,
    /// Population standard deviation of period-over-period percent changes.
    pub volatility: f64,
    pub forecast: Vec<ForecastPoint>,
    pub insights: Vec<String>,
}

/// Least-squares fit of value against fractional days since the first
/// point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Value units per day.
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearRegression {
    #[must_use]
    pub fn predict(&self, days: f64) -> f64 {
        self.slope * days + self.intercept
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StronglyIncreasing,
    Increasing,
    Stable,
    Decreasing,
    StronglyDecreasing,
}

impl TrendDirection {
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.1 {
            TrendDirection::StronglyIncreasing
        } else if slope > 0.01 {
            TrendDirection::Increasing
        } else if slope < -0.1 {
            TrendDirection::StronglyDecreasing
        } else if slope < -0.01 {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl TrendStrength {
    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.9 {
            TrendStrength::VeryStrong
        } else if r_squared >= 0.7 {
            TrendStrength::Strong
        } else if r_squared >= 0.5 {
            TrendStrength::Moderate
        } else if r_squared >= 0.3 {
            TrendStrength::Weak
        } else {
            TrendStrength::VeryWeak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    pub average: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seasonality {
    pub has_seasonality: bool,
    /// Averages for the weekdays present in the series, Monday first.
    pub weekday_averages: Vec<WeekdayAverage>,
    /// Calendar month (1–12) to average value; only for series longer than
    /// thirty points.
    pub monthly_averages: Option<BTreeMap<u32, f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    Spike,
    Dip,
    PositiveOutlier,
    NegativeOutlier,
}

impl AnomalyKind {
    #[must_use]
    pub fn classify(actual: f64, expected: f64) -> Self {
        if actual > expected * 1.5 {
            AnomalyKind::Spike
        } else if actual < expected * 0.5 {
            AnomalyKind::Dip
        } else if actual > expected {
            AnomalyKind::PositiveOutlier
        } else {
            AnomalyKind::NegativeOutlier
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Mean of the neighbouring points.
    pub expected: f64,
    pub deviation: f64,
    pub z_score: f64,
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub predicted_value: f64,
    pub confidence_interval: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}
