//! Command handlers. Each decodes its input, runs one calculator and
//! returns the result as JSON.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::Value;

use blogpulse_analytics::{
    LeadProfile, LeadScorer, PeriodRoi, RoiCalculator, RoiInput, TrendAnalyzer, TrendDataPoint,
    TrendSettings,
};
use blogpulse_core::{AppConfig, LeadScoringRules, SeoVocabulary};
use blogpulse_seo::{ContentAnalyzer, ContentInput};

use crate::input::{parse, OneOrMany};

pub(crate) fn run_seo(vocabulary: SeoVocabulary, raw: &str) -> anyhow::Result<Value> {
    let content: ContentInput = parse(raw, "content object")?;
    let analysis = ContentAnalyzer::new(vocabulary).analyze(&content);
    Ok(serde_json::to_value(analysis)?)
}

/// Arrays of profiles are scored in parallel; output order follows input
/// order.
pub(crate) fn run_lead(
    rules: LeadScoringRules,
    raw: &str,
    as_of: DateTime<Utc>,
) -> anyhow::Result<Value> {
    let scorer = LeadScorer::new(rules);
    match parse::<OneOrMany<LeadProfile>>(raw, "lead profile or array of lead profiles")? {
        OneOrMany::One(profile) => Ok(serde_json::to_value(scorer.breakdown(&profile, as_of))?),
        OneOrMany::Many(profiles) => {
            let breakdowns: Vec<_> = profiles
                .par_iter()
                .map(|profile| scorer.breakdown(profile, as_of))
                .collect();
            tracing::info!(leads = breakdowns.len(), "scored lead batch");
            Ok(serde_json::to_value(breakdowns)?)
        }
    }
}

pub(crate) fn run_trend(
    config: &AppConfig,
    horizon: Option<usize>,
    raw: &str,
) -> anyhow::Result<Value> {
    let points: Vec<TrendDataPoint> = parse(raw, "array of trend data points")?;
    let analyzer = TrendAnalyzer::new(TrendSettings {
        forecast_horizon: horizon.unwrap_or(config.forecast_horizon),
        anomaly_z_threshold: config.anomaly_z_threshold,
    });
    Ok(serde_json::to_value(analyzer.analyze(&points))?)
}

pub(crate) fn run_roi(config: &AppConfig, raw: &str) -> anyhow::Result<Value> {
    let input: RoiInput = parse(raw, "ROI input object")?;
    let result = RoiCalculator::new(config.attribution_model).calculate(&input);
    Ok(serde_json::to_value(result)?)
}

pub(crate) fn run_portfolio(config: &AppConfig, raw: &str) -> anyhow::Result<Value> {
    let inputs: Vec<RoiInput> = parse(raw, "array of ROI input objects")?;
    let result = RoiCalculator::new(config.attribution_model).calculate_portfolio(&inputs);
    Ok(serde_json::to_value(result)?)
}

pub(crate) fn run_roi_trend(config: &AppConfig, raw: &str) -> anyhow::Result<Value> {
    let periods: Vec<PeriodRoi> = parse(raw, "array of period ROI objects")?;
    let result = RoiCalculator::new(config.attribution_model).calculate_trends(&periods);
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use blogpulse_core::{AttributionModel, Environment};

    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            rules_path: None,
            forecast_horizon: 7,
            attribution_model: AttributionModel::TimeDecay,
            anomaly_z_threshold: 2.0,
        }
    }

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn seo_accepts_partial_content() {
        let out = run_seo(SeoVocabulary::default(), r#"{"title": "Hello"}"#).unwrap();
        assert!(out["overall_score"].as_u64().is_some_and(|s| s <= 100));
        assert!(out["recommendations"].is_array());
    }

    #[test]
    fn single_lead_yields_object() {
        let out = run_lead(LeadScoringRules::default(), "{}", as_of()).unwrap();
        assert_eq!(out["score"], 29);
        assert_eq!(out["qualification"], "unqualified");
    }

    #[test]
    fn lead_batch_preserves_order() {
        let raw = r#"[
            {},
            {"intent": {"source_type": "contact_form", "form_completions": 2}},
            {}
        ]"#;
        let out = run_lead(LeadScoringRules::default(), raw, as_of()).unwrap();
        let scores: Vec<_> = out
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["score"].as_u64().unwrap())
            .collect();
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0], scores[2]);
        assert!(scores[1] > scores[0]);
    }

    #[test]
    fn trend_uses_configured_horizon_unless_overridden() {
        let raw = r#"[
            {"timestamp": "2025-01-01T00:00:00Z", "value": 1.0},
            {"timestamp": "2025-01-02T00:00:00Z", "value": 2.0}
        ]"#;
        let out = run_trend(&config(), None, raw).unwrap();
        assert_eq!(out["status"], "analyzed");
        assert_eq!(out["forecast"].as_array().unwrap().len(), 7);

        let out = run_trend(&config(), Some(3), raw).unwrap();
        assert_eq!(out["forecast"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn trend_reports_insufficient_data() {
        let out = run_trend(&config(), None, "[]").unwrap();
        assert_eq!(out["status"], "insufficient_data");
        assert_eq!(out["points"], 0);
    }

    #[test]
    fn roi_falls_back_to_configured_model() {
        let out = run_roi(&config(), r#"{"investment": {"creation_cost": 100.0}}"#).unwrap();
        assert_eq!(out["attribution_model"], "time_decay");
        assert_eq!(out["roi_percentage"], -100.0);
    }

    #[test]
    fn portfolio_and_roi_trend_accept_arrays() {
        let out = run_portfolio(&config(), "[{}, {}]").unwrap();
        assert_eq!(out["content_count"], 2);

        let out = run_roi_trend(
            &config(),
            r#"[{"period": "Q1", "roi": 10.0}, {"period": "Q2", "roi": 20.0}]"#,
        )
        .unwrap();
        assert_eq!(out["direction"], "strongly_positive");
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(run_roi(&config(), "[1, 2]").is_err());
        assert!(run_trend(&config(), None, r#"{"value": 1}"#).is_err());
    }
}
