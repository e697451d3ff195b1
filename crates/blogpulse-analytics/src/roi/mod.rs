//! Return on investment for individual posts and content portfolios.
//!
//! Revenue comes from two sources: direct conversions credited in full and
//! attributed conversions whose credit depends on the [`AttributionModel`].

mod types;

use std::collections::BTreeMap;

use blogpulse_core::AttributionModel;

use crate::safe_div;

pub use types::{
    AttributedConversion, BrandImpact, DirectConversion, EngagementCounts, EngagementUnitValues,
    InvestmentBreakdown, PeriodRoi, PeriodRoiChange, PortfolioRoiResult, RoiDirection, RoiInput,
    RoiResult, RoiTrendAnalysis,
};

/// Daily decay rate for time-decay attribution.
const TIME_DECAY_RATE: f64 = 0.1;
const FIRST_TOUCH_SHARE: f64 = 0.4;
const LAST_TOUCH_SHARE: f64 = 0.2;
const MIDDLE_TOUCH_SHARE: f64 = 0.4;
/// Tolerance when checking that linear weights sum to one per customer.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    default_model: AttributionModel,
}

impl RoiCalculator {
    /// `default_model` applies to inputs that do not name a model.
    #[must_use]
    pub fn new(default_model: AttributionModel) -> Self {
        Self { default_model }
    }

    #[must_use]
    pub fn default_model(&self) -> AttributionModel {
        self.default_model
    }

    #[must_use]
    pub fn calculate(&self, input: &RoiInput) -> RoiResult {
        let model = input.attribution_model.unwrap_or(self.default_model);

        let total_investment = input.investment.total();
        let direct_revenue: f64 = input.direct_conversions.iter().map(|c| c.revenue).sum();
        let indirect_revenue = attributed_revenue(&input.attributed_conversions, model);
        let total_revenue = direct_revenue + indirect_revenue;

        if total_investment == 0.0 {
            tracing::warn!(
                content_id = input.content_id,
                "zero investment; ROI reported as 0"
            );
        }

        let result = RoiResult {
            content_id: input.content_id,
            title: input.title.clone(),
            published_at: input.published_at,
            period_days: input.period_days,
            attribution_model: model,
            total_investment,
            direct_revenue,
            indirect_revenue,
            total_revenue,
            roi_percentage: roi_percentage(total_revenue, total_investment),
            payback_period: payback_period(total_investment, total_revenue, input.period_days),
            clv_impact: f64::from(input.new_customers) * input.average_clv,
            lead_value: safe_div(total_revenue, f64::from(input.leads)),
            cost_per_lead: safe_div(total_investment, f64::from(input.leads)),
            cost_per_acquisition: safe_div(
                total_investment,
                count_as_f64(input.direct_conversions.len()),
            ),
            engagement_value: engagement_value(&input.engagement, &input.engagement_values),
            brand_value: brand_value(&input.brand),
        };

        tracing::debug!(
            content_id = result.content_id,
            model = %model,
            roi = result.roi_percentage,
            "content ROI calculated"
        );

        result
    }

    /// Aggregate several posts. Best and worst are picked by ROI percentage;
    /// the earliest item wins ties.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_portfolio(&self, inputs: &[RoiInput]) -> PortfolioRoiResult {
        let results: Vec<RoiResult> = inputs.iter().map(|input| self.calculate(input)).collect();

        let total_investment: f64 = results.iter().map(|r| r.total_investment).sum();
        let total_revenue: f64 = results.iter().map(|r| r.total_revenue).sum();
        let total_leads: u64 = inputs.iter().map(|i| u64::from(i.leads)).sum();
        let total_conversions: usize = inputs.iter().map(|i| i.direct_conversions.len()).sum();

        let average_roi = safe_div(
            results.iter().map(|r| r.roi_percentage).sum(),
            count_as_f64(results.len()),
        );

        let mut best: Option<&RoiResult> = None;
        let mut worst: Option<&RoiResult> = None;
        for result in &results {
            if best.is_none_or(|b| result.roi_percentage > b.roi_percentage) {
                best = Some(result);
            }
            if worst.is_none_or(|w| result.roi_percentage < w.roi_percentage) {
                worst = Some(result);
            }
        }

        PortfolioRoiResult {
            content_count: inputs.len(),
            total_investment,
            total_revenue,
            total_leads,
            total_conversions,
            portfolio_roi: roi_percentage(total_revenue, total_investment),
            average_roi,
            average_cost_per_lead: safe_div(total_investment, total_leads as f64),
            average_cost_per_conversion: safe_div(
                total_investment,
                count_as_f64(total_conversions),
            ),
            best_performing: best.cloned(),
            worst_performing: worst.cloned(),
            results,
        }
    }

    /// Period-over-period ROI movement. Periods are taken in the order
    /// given.
    #[must_use]
    pub fn calculate_trends(&self, periods: &[PeriodRoi]) -> RoiTrendAnalysis {
        if periods.len() < 2 {
            tracing::debug!(periods = periods.len(), "not enough periods for ROI trend");
            return RoiTrendAnalysis {
                periods: periods.len(),
                changes: Vec::new(),
                overall_trend: 0.0,
                average_period_change: 0.0,
                direction: RoiDirection::Stable,
            };
        }

        let changes: Vec<PeriodRoiChange> = periods
            .windows(2)
            .map(|w| {
                let (previous, current) = (&w[0], &w[1]);
                PeriodRoiChange {
                    period: current.period.clone(),
                    current_roi: current.roi,
                    previous_roi: previous.roi,
                    absolute_change: current.roi - previous.roi,
                    percentage_change: percent_change(previous.roi, current.roi),
                }
            })
            .collect();

        let first = periods[0].roi;
        let last = periods[periods.len() - 1].roi;
        let overall_trend = percent_change(first, last);
        let average_period_change = safe_div(
            changes.iter().map(|c| c.percentage_change).sum(),
            count_as_f64(changes.len()),
        );

        RoiTrendAnalysis {
            periods: periods.len(),
            changes,
            overall_trend,
            average_period_change,
            direction: RoiDirection::from_overall_trend(overall_trend),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

fn roi_percentage(revenue: f64, investment: f64) -> f64 {
    safe_div(revenue - investment, investment) * 100.0
}

fn percent_change(previous: f64, current: f64) -> f64 {
    safe_div(current - previous, previous) * 100.0
}

fn payback_period(investment: f64, revenue: f64, period_days: u32) -> f64 {
    if revenue <= 0.0 || period_days == 0 {
        return -1.0;
    }
    investment / (revenue / f64::from(period_days))
}

// ---------------------------------------------------------------------------
// Attribution
// ---------------------------------------------------------------------------

fn attributed_revenue(conversions: &[AttributedConversion], model: AttributionModel) -> f64 {
    if model == AttributionModel::Linear {
        warn_unbalanced_weights(conversions);
    }
    conversions
        .iter()
        .map(|c| c.revenue * touch_credit(c, model))
        .sum()
}

/// Share of a conversion's revenue credited to this touch.
fn touch_credit(conversion: &AttributedConversion, model: AttributionModel) -> f64 {
    match model {
        AttributionModel::FirstTouch => flag_credit(conversion.is_first_touch),
        AttributionModel::LastTouch => flag_credit(conversion.is_last_touch),
        AttributionModel::Linear => conversion.attribution_weight,
        AttributionModel::TimeDecay => time_decay_weight(conversion.days_from_touch),
        AttributionModel::PositionBased => {
            position_based_weight(conversion.touch_position, conversion.total_touches)
        }
    }
}

fn flag_credit(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

fn time_decay_weight(days_from_touch: u32) -> f64 {
    (-TIME_DECAY_RATE * f64::from(days_from_touch)).exp()
}

/// 40% to the first touch, 20% to the last, 40% shared by the rest. A
/// journey of one (or of unknown length) gets full credit; positions
/// outside the journey get none.
fn position_based_weight(position: u32, total: u32) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    if position == 0 || position > total {
        return 0.0;
    }
    if position == 1 {
        FIRST_TOUCH_SHARE
    } else if position == total {
        LAST_TOUCH_SHARE
    } else {
        MIDDLE_TOUCH_SHARE / f64::from(total - 2)
    }
}

/// Linear weights are taken as given; journeys whose weights do not add
/// up to one are logged.
fn warn_unbalanced_weights(conversions: &[AttributedConversion]) {
    let mut sums: BTreeMap<u64, f64> = BTreeMap::new();
    for conversion in conversions {
        *sums.entry(conversion.customer_id).or_default() += conversion.attribution_weight;
    }
    for (customer_id, weight_sum) in sums {
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(
                customer_id,
                weight_sum,
                "linear attribution weights do not sum to one"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Non-revenue value
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn engagement_value(counts: &EngagementCounts, values: &EngagementUnitValues) -> f64 {
    [
        (counts.page_views, values.page_view),
        (counts.social_shares, values.share),
        (counts.comments, values.comment),
        (counts.downloads, values.download),
        (counts.newsletter_signups, values.signup),
    ]
    .into_iter()
    .map(|(count, unit)| count as f64 * unit.unwrap_or(0.0))
    .sum()
}

fn brand_value(brand: &BrandImpact) -> f64 {
    brand.mentions * brand.mention_value
        + brand.backlink_value
        + brand.search_visibility_value
        + brand.thought_leadership_value
}

#[cfg(test)]
#[path = "roi_test.rs"]
mod tests;
