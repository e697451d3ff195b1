use std::path::Path;

use super::*;

#[test]
fn default_rules_pass_validation() {
    assert!(validate_rules(&RulesFile::default()).is_ok());
}

#[test]
fn empty_document_yields_defaults() {
    let rules = parse_rules("{}").unwrap();
    assert_eq!(rules, RulesFile::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let yaml = r"
lead_scoring:
  target_locations: [brazil, mexico]
";
    let rules = parse_rules(yaml).unwrap();
    assert_eq!(
        rules.lead_scoring.target_locations,
        vec!["brazil".to_string(), "mexico".to_string()]
    );
    assert_eq!(
        rules.lead_scoring.high_fit_industries,
        LeadScoringRules::default().high_fit_industries
    );
    assert_eq!(rules.seo, SeoVocabulary::default());
}

#[test]
fn lsi_groups_can_be_replaced() {
    let yaml = r"
seo:
  lsi_groups:
    - trigger: rust
      terms: [cargo, borrow checker]
";
    let rules = parse_rules(yaml).unwrap();
    assert_eq!(rules.seo.lsi_groups.len(), 1);
    assert_eq!(rules.seo.lsi_groups[0].trigger, "rust");
    assert_eq!(rules.seo.power_words, SeoVocabulary::default().power_words);
}

#[test]
fn empty_lsi_group_list_is_allowed() {
    let rules = parse_rules("seo:\n  lsi_groups: []\n").unwrap();
    assert!(rules.seo.lsi_groups.is_empty());
}

#[test]
fn unknown_field_is_rejected() {
    let result = parse_rules("lead_scoring:\n  favourite_colours: [red]\n");
    assert!(matches!(result, Err(ConfigError::RulesFileParse(_))));
}

#[test]
fn empty_list_is_rejected() {
    let result = parse_rules("seo:\n  power_words: []\n");
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("seo.power_words")),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn blank_entry_is_rejected() {
    let result = parse_rules("seo:\n  cta_phrases: [learn, '  ']\n");
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("non-empty")),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn case_insensitive_duplicate_is_rejected() {
    let result = parse_rules("lead_scoring:\n  target_locations: [USA, usa]\n");
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("duplicate entry")),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn duplicate_lsi_trigger_is_rejected() {
    let yaml = r"
seo:
  lsi_groups:
    - trigger: seo
      terms: [ranking]
    - trigger: SEO
      terms: [google]
";
    let result = parse_rules(yaml);
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("duplicate trigger")),
        "expected Validation error, got: {result:?}"
    );
}

#[test]
fn lsi_group_without_terms_is_rejected() {
    let yaml = r"
seo:
  lsi_groups:
    - trigger: seo
      terms: []
";
    assert!(matches!(parse_rules(yaml), Err(ConfigError::Validation(_))));
}

#[test]
fn missing_file_reports_path() {
    let result = load_rules(Path::new("/nonexistent/blogpulse-rules.yaml"));
    assert!(
        matches!(result, Err(ConfigError::RulesFileIo { ref path, .. }) if path.contains("blogpulse-rules.yaml")),
        "expected RulesFileIo, got: {result:?}"
    );
}

#[test]
fn rules_round_trip_through_yaml() {
    let rules = RulesFile::default();
    let yaml = serde_yaml::to_string(&rules).unwrap();
    assert_eq!(parse_rules(&yaml).unwrap(), rules);
}
