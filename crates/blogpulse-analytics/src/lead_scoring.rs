//! Weighted lead quality score for blog-generated leads.
//!
//! A lead is scored on four dimensions, each on a 0–100 scale:
//! demographics (who they are), behavior (what they did on the site),
//! firmographics (the company they work for) and intent (how they
//! converted). Text fields are matched by case-insensitive substring
//! against the injected [`LeadScoringRules`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blogpulse_core::LeadScoringRules;

use crate::to_score;

// ---------------------------------------------------------------------------
// Weight constants (percent, must sum to exactly 100)
// ---------------------------------------------------------------------------

pub const W_DEMOGRAPHIC: u32 = 25;
pub const W_BEHAVIORAL: u32 = 35;
pub const W_FIRMOGRAPHIC: u32 = 25;
pub const W_INTENT: u32 = 15;

const _: () = assert!(
    W_DEMOGRAPHIC + W_BEHAVIORAL + W_FIRMOGRAPHIC + W_INTENT == 100,
    "lead score weights must sum to exactly 100"
);

const SECONDS_PER_DAY: f64 = 86_400.0;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadProfile {
    pub demographics: Demographics,
    pub behavior: Behavior,
    pub company: Company,
    pub intent: Intent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub job_title: String,
    pub industry: String,
    pub location: String,
    pub experience_level: String,
}

/// On-site activity. Durations are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Behavior {
    pub page_views: u32,
    pub total_time_on_site: u64,
    pub visit_count: u32,
    pub blog_posts_read: u32,
    pub downloads: u32,
    pub video_watch_time: u64,
    pub social_engagements: u32,
    pub service_pages_visited: bool,
    pub pricing_pages_visited: bool,
    pub contact_pages_visited: bool,
    pub search_queries: u32,
    /// `None` when the lead has no recorded activity.
    pub last_activity: Option<DateTime<Utc>>,
}

/// Company attributes. An empty `name` marks the company as unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub size: String,
    pub industry: String,
    /// Free-form revenue band, e.g. `"10m-50m"` or `"100m+"`.
    pub revenue: String,
    pub technology_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    /// How the lead was captured: `contact_form`, `download`, `cta`, ...
    pub source_type: String,
    pub content_types: Vec<String>,
    pub cta_interactions: u32,
    pub form_completions: u32,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Sales-readiness tier derived from a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    Unqualified,
    Cold,
    Warm,
    Hot,
}

impl Qualification {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Qualification::Hot,
            60..=79 => Qualification::Warm,
            40..=59 => Qualification::Cold,
            _ => Qualification::Unqualified,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Qualification::Hot => "hot",
            Qualification::Warm => "warm",
            Qualification::Cold => "cold",
            Qualification::Unqualified => "unqualified",
        }
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four dimension scores behind a lead score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoreBreakdown {
    pub demographic: f64,
    pub behavioral: f64,
    pub firmographic: f64,
    pub intent: f64,
    pub score: u8,
    pub qualification: Qualification,
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LeadScorer {
    rules: LeadScoringRules,
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::new(LeadScoringRules::default())
    }
}

impl LeadScorer {
    /// Build a scorer over `rules`. Entries are matched case-insensitively.
    #[must_use]
    pub fn new(rules: LeadScoringRules) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.trim().to_lowercase()).collect()
        };
        let mut rules = rules;
        rules.job_titles.executive = lower(rules.job_titles.executive);
        rules.job_titles.senior = lower(rules.job_titles.senior);
        rules.job_titles.practitioner = lower(rules.job_titles.practitioner);
        rules.high_fit_industries = lower(rules.high_fit_industries);
        rules.medium_fit_industries = lower(rules.medium_fit_industries);
        rules.target_locations = lower(rules.target_locations);
        rules.relevant_technologies = lower(rules.relevant_technologies);
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &LeadScoringRules {
        &self.rules
    }

    /// Lead score in `[0, 100]`. Recency is measured against `as_of`.
    #[must_use]
    pub fn score(&self, profile: &LeadProfile, as_of: DateTime<Utc>) -> u8 {
        self.breakdown(profile, as_of).score
    }

    /// Tier for an already computed score.
    #[must_use]
    pub fn qualify(&self, score: u8) -> Qualification {
        Qualification::from_score(score)
    }

    /// Dimension scores, blended total and qualification tier.
    #[must_use]
    pub fn breakdown(&self, profile: &LeadProfile, as_of: DateTime<Utc>) -> LeadScoreBreakdown {
        let demographic = clamp_pct(self.demographic_score(&profile.demographics));
        let behavioral = clamp_pct(behavioral_score(&profile.behavior, as_of));
        let firmographic = clamp_pct(self.firmographic_score(&profile.company));
        let intent = clamp_pct(intent_score(&profile.intent));

        let blended = (demographic * f64::from(W_DEMOGRAPHIC)
            + behavioral * f64::from(W_BEHAVIORAL)
            + firmographic * f64::from(W_FIRMOGRAPHIC)
            + intent * f64::from(W_INTENT))
            / 100.0;
        let score = to_score(blended);
        let qualification = Qualification::from_score(score);

        tracing::debug!(
            score,
            qualification = %qualification,
            demographic,
            behavioral,
            firmographic,
            intent,
            "lead scored"
        );

        LeadScoreBreakdown {
            demographic,
            behavioral,
            firmographic,
            intent,
            score,
            qualification,
        }
    }

    fn demographic_score(&self, demo: &Demographics) -> f64 {
        self.job_title_score(&demo.job_title) * 0.4
            + self.industry_score(&demo.industry) * 0.3
            + self.location_score(&demo.location) * 0.2
            + experience_score(&demo.experience_level) * 0.1
    }

    fn firmographic_score(&self, company: &Company) -> f64 {
        if company.name.trim().is_empty() {
            return 50.0;
        }
        company_size_score(&company.size) * 0.4
            + self.industry_score(&company.industry) * 0.3
            + revenue_score(&company.revenue) * 0.2
            + self.technology_score(&company.technology_stack) * 0.1
    }

    fn job_title_score(&self, title: &str) -> f64 {
        let title = title.to_lowercase();
        let tiers = &self.rules.job_titles;
        if contains_any(&title, &tiers.executive) {
            90.0
        } else if contains_any(&title, &tiers.senior) {
            70.0
        } else if contains_any(&title, &tiers.practitioner) {
            50.0
        } else {
            30.0
        }
    }

    fn industry_score(&self, industry: &str) -> f64 {
        let industry = industry.to_lowercase();
        if contains_any(&industry, &self.rules.high_fit_industries) {
            90.0
        } else if contains_any(&industry, &self.rules.medium_fit_industries) {
            70.0
        } else {
            50.0
        }
    }

    fn location_score(&self, location: &str) -> f64 {
        if contains_any(&location.to_lowercase(), &self.rules.target_locations) {
            85.0
        } else {
            60.0
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn technology_score(&self, stack: &[String]) -> f64 {
        if stack.is_empty() {
            return 50.0;
        }
        let matches = stack
            .iter()
            .filter(|tech| contains_any(&tech.to_lowercase(), &self.rules.relevant_technologies))
            .count();
        (50.0 + matches as f64 * 10.0).min(100.0)
    }
}

fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

fn contains_either(haystack: &str, a: &str, b: &str) -> bool {
    haystack.contains(a) || haystack.contains(b)
}

fn experience_score(experience: &str) -> f64 {
    let experience = experience.to_lowercase();
    if contains_either(&experience, "senior", "lead") {
        80.0
    } else if contains_either(&experience, "mid", "intermediate") {
        70.0
    } else if contains_either(&experience, "junior", "entry") {
        50.0
    } else {
        60.0
    }
}

fn company_size_score(size: &str) -> f64 {
    let size = size.to_lowercase();
    if contains_either(&size, "enterprise", "large") {
        90.0
    } else if contains_either(&size, "medium", "mid") {
        80.0
    } else if contains_either(&size, "small", "startup") {
        70.0
    } else {
        60.0
    }
}

fn revenue_score(revenue: &str) -> f64 {
    let revenue = revenue.to_lowercase();
    if contains_either(&revenue, "100m+", "billion") {
        95.0
    } else if contains_either(&revenue, "50m", "10m") {
        85.0
    } else if contains_either(&revenue, "1m", "5m") {
        75.0
    } else if revenue.contains("500k") {
        65.0
    } else {
        50.0
    }
}

// ---------------------------------------------------------------------------
// Behavior
// ---------------------------------------------------------------------------

fn behavioral_score(behavior: &Behavior, as_of: DateTime<Utc>) -> f64 {
    engagement_score(behavior) * 0.3
        + consumption_score(behavior) * 0.25
        + activity_score(behavior) * 0.25
        + recency_score(behavior.last_activity, as_of) * 0.2
}

/// First threshold `value` reaches, scanning from the highest.
fn tiered<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)]) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0.0, |&(_, points)| points)
}

fn engagement_score(b: &Behavior) -> f64 {
    let points = tiered(b.page_views, &[(10, 30.0), (5, 20.0), (2, 10.0)])
        + tiered(b.total_time_on_site, &[(1800, 30.0), (900, 20.0), (300, 10.0)])
        + tiered(b.visit_count, &[(5, 40.0), (3, 25.0), (2, 15.0)]);
    points.min(100.0)
}

fn consumption_score(b: &Behavior) -> f64 {
    let points = tiered(b.blog_posts_read, &[(5, 30.0), (3, 20.0), (1, 10.0)])
        + f64::from(b.downloads) * 15.0
        + tiered(b.video_watch_time, &[(600, 25.0), (300, 15.0), (60, 5.0)])
        + f64::from(b.social_engagements) * 5.0;
    points.min(100.0)
}

fn activity_score(b: &Behavior) -> f64 {
    let pages_per_visit = if b.visit_count == 0 {
        0.0
    } else {
        f64::from(b.page_views) / f64::from(b.visit_count)
    };

    let mut points = tiered(pages_per_visit, &[(5.0, 25.0), (3.0, 15.0), (2.0, 10.0)]);
    if b.service_pages_visited {
        points += 30.0;
    }
    if b.pricing_pages_visited {
        points += 35.0;
    }
    if b.contact_pages_visited {
        points += 20.0;
    }
    points += f64::from(b.search_queries) * 5.0;
    points.min(100.0)
}

#[allow(clippy::cast_precision_loss)]
fn recency_score(last_activity: Option<DateTime<Utc>>, as_of: DateTime<Utc>) -> f64 {
    let Some(last) = last_activity else {
        return 0.0;
    };
    let days = (as_of - last).num_seconds() as f64 / SECONDS_PER_DAY;
    if days <= 1.0 {
        100.0
    } else if days <= 7.0 {
        80.0
    } else if days <= 30.0 {
        60.0
    } else if days <= 90.0 {
        40.0
    } else {
        20.0
    }
}

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

fn intent_score(intent: &Intent) -> f64 {
    source_type_score(&intent.source_type) * 0.3
        + content_types_score(&intent.content_types) * 0.25
        + tiered(intent.cta_interactions, &[(5, 100.0), (3, 80.0), (1, 60.0)]).max(20.0) * 0.25
        + tiered(intent.form_completions, &[(3, 100.0), (2, 85.0), (1, 70.0)]).max(30.0) * 0.2
}

fn source_type_score(source: &str) -> f64 {
    match source.trim().to_lowercase().as_str() {
        "contact_form" => 95.0,
        "download" => 85.0,
        "cta" => 80.0,
        "newsletter" => 70.0,
        "social_share" => 60.0,
        _ => 50.0,
    }
}

#[allow(clippy::cast_precision_loss)]
fn content_types_score(types: &[String]) -> f64 {
    if types.is_empty() {
        return 40.0;
    }
    let total: f64 = types
        .iter()
        .map(|t| match t.trim().to_lowercase().as_str() {
            "case_study" => 90.0,
            "whitepaper" => 85.0,
            "webinar" => 80.0,
            "tutorial" => 70.0,
            "blog" => 60.0,
            _ => 50.0,
        })
        .sum();
    (total / types.len() as f64).min(100.0)
}

#[cfg(test)]
#[path = "lead_scoring_test.rs"]
mod tests;
