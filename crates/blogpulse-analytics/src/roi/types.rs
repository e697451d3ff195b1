use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blogpulse_core::AttributionModel;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Everything spent producing and promoting one piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentBreakdown {
    pub creation_cost: f64,
    pub promotion_cost: f64,
    pub tools_cost: f64,
    pub hours_invested: f64,
    pub hourly_rate: f64,
    pub opportunity_cost: f64,
}

impl InvestmentBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.creation_cost
            + self.promotion_cost
            + self.tools_cost
            + self.hours_invested * self.hourly_rate
            + self.opportunity_cost
    }
}

/// A sale credited entirely to the content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectConversion {
    pub customer_id: u64,
    pub revenue: f64,
    pub converted_at: Option<DateTime<Utc>>,
    pub product_type: String,
}

/// One touch of a multi-touch customer journey that ended in a sale.
///
/// `touch_position` is 1-based; `total_touches` is the journey length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributedConversion {
    pub customer_id: u64,
    pub revenue: f64,
    /// Caller-supplied credit share, used by the linear model.
    pub attribution_weight: f64,
    pub is_first_touch: bool,
    pub is_last_touch: bool,
    pub touch_position: u32,
    pub total_touches: u32,
    pub days_from_touch: u32,
    pub converted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    pub page_views: u64,
    pub social_shares: u64,
    pub comments: u64,
    pub downloads: u64,
    pub newsletter_signups: u64,
}

/// Monetary value of one unit of each engagement counter. Unset values
/// contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementUnitValues {
    pub page_view: Option<f64>,
    pub share: Option<f64>,
    pub comment: Option<f64>,
    pub download: Option<f64>,
    pub signup: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandImpact {
    pub mentions: f64,
    pub mention_value: f64,
    pub backlink_value: f64,
    pub search_visibility_value: f64,
    pub thought_leadership_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInput {
    pub content_id: u64,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Length of the measurement period in days.
    pub period_days: u32,
    pub investment: InvestmentBreakdown,
    pub direct_conversions: Vec<DirectConversion>,
    pub attributed_conversions: Vec<AttributedConversion>,
    /// Falls back to the calculator's configured model when absent.
    pub attribution_model: Option<AttributionModel>,
    pub leads: u32,
    pub new_customers: u32,
    pub average_clv: f64,
    pub engagement: EngagementCounts,
    pub engagement_values: EngagementUnitValues,
    pub brand: BrandImpact,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub content_id: u64,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub period_days: u32,
    pub attribution_model: AttributionModel,
    pub total_investment: f64,
    pub direct_revenue: f64,
    pub indirect_revenue: f64,
    pub total_revenue: f64,
    pub roi_percentage: f64,
    /// Days to recover the investment at the period's daily revenue;
    /// `-1.0` when it is never recovered.
    pub payback_period: f64,
    pub clv_impact: f64,
    pub lead_value: f64,
    pub cost_per_lead: f64,
    pub cost_per_acquisition: f64,
    pub engagement_value: f64,
    pub brand_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRoiResult {
    pub content_count: usize,
    pub total_investment: f64,
    pub total_revenue: f64,
    pub total_leads: u64,
    pub total_conversions: usize,
    pub portfolio_roi: f64,
    /// Mean of the per-item ROI percentages.
    pub average_roi: f64,
    pub average_cost_per_lead: f64,
    pub average_cost_per_conversion: f64,
    pub best_performing: Option<RoiResult>,
    pub worst_performing: Option<RoiResult>,
    pub results: Vec<RoiResult>,
}

/// ROI percentage observed for one labelled period (`"2024-Q1"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodRoi {
    pub period: String,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRoiChange {
    pub period: String,
    pub current_roi: f64,
    pub previous_roi: f64,
    pub absolute_change: f64,
    /// `0.0` when the previous ROI is zero.
    pub percentage_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiDirection {
    StronglyPositive,
    Positive,
    Stable,
    Negative,
    StronglyNegative,
}

impl RoiDirection {
    /// Classify an overall first-to-last percent change.
    #[must_use]
    pub fn from_overall_trend(trend: f64) -> Self {
        if trend > 5.0 {
            RoiDirection::StronglyPositive
        } else if trend > 0.0 {
            RoiDirection::Positive
        } else if trend < -5.0 {
            RoiDirection::StronglyNegative
        } else if trend < 0.0 {
            RoiDirection::Negative
        } else {
            RoiDirection::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiTrendAnalysis {
    pub periods: usize,
    pub changes: Vec<PeriodRoiChange>,
    pub overall_trend: f64,
    pub average_period_change: f64,
    pub direction: RoiDirection,
}
