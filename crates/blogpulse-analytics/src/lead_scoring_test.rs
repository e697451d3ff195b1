use chrono::{Duration, TimeZone};

use super::*;

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn hot_profile() -> LeadProfile {
    LeadProfile {
        demographics: Demographics {
            job_title: "VP of Engineering".to_string(),
            industry: "SaaS".to_string(),
            location: "Bangalore, India".to_string(),
            experience_level: "Senior".to_string(),
        },
        behavior: Behavior {
            page_views: 12,
            total_time_on_site: 2000,
            visit_count: 6,
            blog_posts_read: 6,
            downloads: 2,
            video_watch_time: 700,
            social_engagements: 3,
            service_pages_visited: true,
            pricing_pages_visited: true,
            contact_pages_visited: true,
            search_queries: 2,
            last_activity: Some(as_of() - Duration::hours(12)),
        },
        company: Company {
            name: "Acme".to_string(),
            size: "Enterprise".to_string(),
            industry: "Software".to_string(),
            revenue: "100m+".to_string(),
            technology_stack: strings(&["React", "AWS", "Kubernetes"]),
        },
        intent: Intent {
            source_type: "contact_form".to_string(),
            content_types: strings(&["case_study", "whitepaper"]),
            cta_interactions: 5,
            form_completions: 3,
        },
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn engaged_executive_is_hot() {
    let scorer = LeadScorer::default();
    let breakdown = scorer.breakdown(&hot_profile(), as_of());

    assert_close(breakdown.demographic, 88.0);
    assert_close(breakdown.behavioral, 100.0);
    assert_close(breakdown.firmographic, 90.0);
    assert_close(breakdown.intent, 95.375);
    assert_eq!(breakdown.score, 93);
    assert_eq!(breakdown.qualification, Qualification::Hot);
    assert_eq!(scorer.score(&hot_profile(), as_of()), 93);
}

#[test]
fn empty_profile_uses_fallbacks() {
    let breakdown = LeadScorer::default().breakdown(&LeadProfile::default(), as_of());

    assert_close(breakdown.demographic, 45.0);
    assert_close(breakdown.behavioral, 0.0);
    assert_close(breakdown.firmographic, 50.0);
    assert_close(breakdown.intent, 36.0);
    assert_eq!(breakdown.score, 29);
    assert_eq!(breakdown.qualification, Qualification::Unqualified);
}

#[test]
fn qualification_thresholds() {
    let scorer = LeadScorer::default();
    assert_eq!(scorer.qualify(100), Qualification::Hot);
    assert_eq!(scorer.qualify(80), Qualification::Hot);
    assert_eq!(scorer.qualify(79), Qualification::Warm);
    assert_eq!(scorer.qualify(60), Qualification::Warm);
    assert_eq!(scorer.qualify(59), Qualification::Cold);
    assert_eq!(scorer.qualify(40), Qualification::Cold);
    assert_eq!(scorer.qualify(39), Qualification::Unqualified);
    assert_eq!(scorer.qualify(0), Qualification::Unqualified);
}

#[test]
fn job_title_tiers_check_most_senior_first() {
    let scorer = LeadScorer::default();
    assert_close(scorer.job_title_score("Chief Marketing Officer"), 90.0);
    assert_close(scorer.job_title_score("Senior Engineer"), 70.0);
    assert_close(scorer.job_title_score("Data Analyst"), 50.0);
    assert_close(scorer.job_title_score("Student"), 30.0);
}

#[test]
fn industry_and_location_tiers() {
    let scorer = LeadScorer::default();
    assert_close(scorer.industry_score("FinTech"), 90.0);
    assert_close(scorer.industry_score("Retail"), 70.0);
    assert_close(scorer.industry_score("Agriculture"), 50.0);
    assert_close(scorer.location_score("Toronto, Canada"), 85.0);
    assert_close(scorer.location_score("Lagos, Nigeria"), 60.0);
}

#[test]
fn experience_and_company_size_keywords() {
    assert_close(experience_score("Team Lead"), 80.0);
    assert_close(experience_score("Intermediate"), 70.0);
    assert_close(experience_score("entry level"), 50.0);
    assert_close(experience_score(""), 60.0);

    assert_close(company_size_score("Large"), 90.0);
    assert_close(company_size_score("mid-market"), 80.0);
    assert_close(company_size_score("Startup"), 70.0);
    assert_close(company_size_score("unknown"), 60.0);
}

#[test]
fn revenue_bands() {
    assert_close(revenue_score("1 billion"), 95.0);
    assert_close(revenue_score("100M+"), 95.0);
    assert_close(revenue_score("10m-50m"), 85.0);
    assert_close(revenue_score("1m-5m"), 75.0);
    assert_close(revenue_score("under 500k"), 65.0);
    assert_close(revenue_score(""), 50.0);
}

#[test]
fn technology_stack_adds_ten_per_relevant_entry() {
    let scorer = LeadScorer::default();
    assert_close(scorer.technology_score(&[]), 50.0);
    assert_close(scorer.technology_score(&strings(&["Cobol"])), 50.0);
    assert_close(scorer.technology_score(&strings(&["Python", "Docker"])), 70.0);
    let many = strings(&["react", "node", "python", "aws", "azure", "gcp"]);
    assert_close(scorer.technology_score(&many), 100.0);
}

#[test]
fn unnamed_company_is_neutral() {
    let scorer = LeadScorer::default();
    let company = Company {
        name: "  ".to_string(),
        size: "enterprise".to_string(),
        ..Company::default()
    };
    assert_close(scorer.firmographic_score(&company), 50.0);
}

#[test]
fn recency_bands_are_measured_from_as_of() {
    let now = as_of();
    let at = |days: i64| Some(now - Duration::days(days));
    assert_close(recency_score(None, now), 0.0);
    assert_close(recency_score(Some(now - Duration::hours(23)), now), 100.0);
    assert_close(recency_score(at(1), now), 100.0);
    assert_close(recency_score(at(7), now), 80.0);
    assert_close(recency_score(at(30), now), 60.0);
    assert_close(recency_score(at(90), now), 40.0);
    assert_close(recency_score(at(91), now), 20.0);
    // Activity after `as_of` counts as current.
    assert_close(recency_score(Some(now + Duration::days(2)), now), 100.0);
}

#[test]
fn zero_visits_do_not_divide_by_zero() {
    let behavior = Behavior {
        page_views: 10,
        visit_count: 0,
        ..Behavior::default()
    };
    assert_close(activity_score(&behavior), 0.0);
}

#[test]
fn behavior_sub_scores_cap_at_one_hundred() {
    let behavior = Behavior {
        downloads: 20,
        social_engagements: 50,
        search_queries: 40,
        ..Behavior::default()
    };
    assert_close(consumption_score(&behavior), 100.0);
    assert_close(activity_score(&behavior), 100.0);
}

#[test]
fn intent_components() {
    assert_close(source_type_score("Download"), 85.0);
    assert_close(source_type_score("cta"), 80.0);
    assert_close(source_type_score("newsletter"), 70.0);
    assert_close(source_type_score("social_share"), 60.0);
    assert_close(source_type_score("billboard"), 50.0);

    assert_close(content_types_score(&[]), 40.0);
    assert_close(content_types_score(&strings(&["webinar", "blog"])), 70.0);
    assert_close(content_types_score(&strings(&["tutorial", "podcast"])), 60.0);
}

#[test]
fn injected_rules_replace_defaults() {
    let rules = LeadScoringRules {
        target_locations: strings(&["Brazil"]),
        ..LeadScoringRules::default()
    };
    let scorer = LeadScorer::new(rules);
    assert_close(scorer.location_score("São Paulo, Brazil"), 85.0);
    assert_close(scorer.location_score("Mumbai, India"), 60.0);
    assert_eq!(scorer.rules().target_locations, vec!["brazil"]);
}

#[test]
fn qualification_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Qualification::Unqualified).unwrap(),
        "\"unqualified\""
    );
    assert_eq!(Qualification::Warm.to_string(), "warm");
}
