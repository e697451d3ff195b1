//! Lead, trend, ROI and performance calculators for blog content.
//!
//! Every calculator is a plain value: construct it once, share it freely,
//! and call it with immutable inputs. None of them perform I/O, read the
//! clock, or return errors; degenerate input (zero visits, zero
//! investment, short series) maps to documented fallback values instead.

pub mod lead_scoring;
pub mod performance;
pub mod roi;
pub mod trend;

pub use blogpulse_core::{AttributionModel, LeadScoringRules};
pub use lead_scoring::{
    Behavior, Company, Demographics, Intent, LeadProfile, LeadScoreBreakdown, LeadScorer,
    Qualification,
};
pub use performance::{
    CompetitiveMetrics, ContentQualityMetrics, EngagementMetrics, PerformanceCalculator,
    ViralityMetrics,
};
pub use roi::{
    AttributedConversion, BrandImpact, DirectConversion, EngagementCounts, EngagementUnitValues,
    InvestmentBreakdown, PeriodRoi, PeriodRoiChange, PortfolioRoiResult, RoiCalculator,
    RoiDirection, RoiInput, RoiResult, RoiTrendAnalysis,
};
pub use trend::{
    Anomaly, AnomalyKind, ForecastPoint, LinearRegression, Seasonality, TrendAnalysis,
    TrendAnalyzer, TrendDataPoint, TrendDirection, TrendReport, TrendSettings, TrendStrength,
    WeekdayAverage,
};

/// Truncate a blended score into `[0, 100]`.
///
/// Weighted sums of whole-number bands can land a hair under the integer
/// they represent, so a tiny epsilon is added before truncating.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 1e-9).floor().clamp(0.0, 100.0) as u8
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
#[must_use]
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
