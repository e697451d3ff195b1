//! Injectable word lists used by the lead scorer and the SEO analyzer.
//!
//! Defaults reproduce the built-in vocabularies. A YAML rules file can
//! replace any list; sections and fields left out keep their defaults.
//!
//! ```yaml
//! lead_scoring:
//!   target_locations: [india, usa, uk]
//! seo:
//!   power_words: [ultimate, guide, proven]
//!   lsi_groups:
//!     - trigger: seo
//!       terms: [search engine, ranking, backlinks]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Job-title keyword tiers, checked from most to least senior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleTiers {
    pub executive: Vec<String>,
    pub senior: Vec<String>,
    pub practitioner: Vec<String>,
}

impl Default for TitleTiers {
    fn default() -> Self {
        Self {
            executive: owned(&[
                "ceo",
                "cto",
                "cfo",
                "cmo",
                "vp",
                "vice president",
                "director",
                "head of",
                "chief",
            ]),
            senior: owned(&[
                "manager",
                "lead",
                "senior",
                "principal",
                "architect",
                "consultant",
            ]),
            practitioner: owned(&[
                "developer",
                "engineer",
                "analyst",
                "specialist",
                "coordinator",
                "associate",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeadScoringRules {
    pub job_titles: TitleTiers,
    pub high_fit_industries: Vec<String>,
    pub medium_fit_industries: Vec<String>,
    pub target_locations: Vec<String>,
    pub relevant_technologies: Vec<String>,
}

impl Default for LeadScoringRules {
    fn default() -> Self {
        Self {
            job_titles: TitleTiers::default(),
            high_fit_industries: owned(&[
                "technology",
                "software",
                "saas",
                "fintech",
                "healthtech",
                "edtech",
                "startup",
            ]),
            medium_fit_industries: owned(&[
                "finance",
                "healthcare",
                "education",
                "retail",
                "ecommerce",
                "manufacturing",
            ]),
            target_locations: owned(&[
                "india",
                "usa",
                "canada",
                "uk",
                "australia",
                "singapore",
                "germany",
                "france",
            ]),
            relevant_technologies: owned(&[
                "react",
                "node",
                "python",
                "go",
                "aws",
                "azure",
                "gcp",
                "kubernetes",
                "docker",
            ]),
        }
    }
}

/// Related terms that count as topical depth when the primary keyword
/// contains `trigger`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LsiGroup {
    pub trigger: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoVocabulary {
    pub power_words: Vec<String>,
    pub cta_phrases: Vec<String>,
    pub transition_words: Vec<String>,
    pub lsi_groups: Vec<LsiGroup>,
}

impl Default for SeoVocabulary {
    fn default() -> Self {
        Self {
            power_words: owned(&[
                "ultimate",
                "complete",
                "guide",
                "best",
                "top",
                "how",
                "why",
                "what",
                "when",
                "expert",
                "proven",
                "essential",
                "amazing",
                "incredible",
                "powerful",
            ]),
            cta_phrases: owned(&[
                "learn", "discover", "find out", "get", "download", "read", "explore", "try",
                "start", "join",
            ]),
            transition_words: owned(&[
                "however",
                "therefore",
                "furthermore",
                "moreover",
                "additionally",
                "consequently",
                "meanwhile",
                "nevertheless",
                "similarly",
                "in contrast",
                "on the other hand",
                "in addition",
                "for example",
                "for instance",
            ]),
            lsi_groups: vec![LsiGroup {
                trigger: "seo".to_string(),
                terms: owned(&[
                    "search engine",
                    "optimization",
                    "ranking",
                    "keywords",
                    "google",
                    "content marketing",
                    "backlinks",
                    "meta tags",
                ]),
            }],
        }
    }
}

/// Top-level shape of the YAML rules file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesFile {
    pub lead_scoring: LeadScoringRules,
    pub seo: SeoVocabulary,
}

/// Load and validate scoring rules from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_rules(path: &Path) -> Result<RulesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RulesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_rules(&content)
}

/// Parse and validate scoring rules from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid YAML for [`RulesFile`] or
/// fails validation.
pub fn parse_rules(yaml: &str) -> Result<RulesFile, ConfigError> {
    let rules: RulesFile = serde_yaml::from_str(yaml)?;
    validate_rules(&rules)?;
    Ok(rules)
}

fn validate_rules(rules: &RulesFile) -> Result<(), ConfigError> {
    let lead = &rules.lead_scoring;
    validate_list("lead_scoring.job_titles.executive", &lead.job_titles.executive)?;
    validate_list("lead_scoring.job_titles.senior", &lead.job_titles.senior)?;
    validate_list(
        "lead_scoring.job_titles.practitioner",
        &lead.job_titles.practitioner,
    )?;
    validate_list("lead_scoring.high_fit_industries", &lead.high_fit_industries)?;
    validate_list(
        "lead_scoring.medium_fit_industries",
        &lead.medium_fit_industries,
    )?;
    validate_list("lead_scoring.target_locations", &lead.target_locations)?;
    validate_list(
        "lead_scoring.relevant_technologies",
        &lead.relevant_technologies,
    )?;

    let seo = &rules.seo;
    validate_list("seo.power_words", &seo.power_words)?;
    validate_list("seo.cta_phrases", &seo.cta_phrases)?;
    validate_list("seo.transition_words", &seo.transition_words)?;

    // An empty group list is allowed and switches LSI detection off.
    let mut seen_triggers = HashSet::new();
    for group in &seo.lsi_groups {
        let trigger = group.trigger.trim().to_lowercase();
        if trigger.is_empty() {
            return Err(ConfigError::Validation(
                "seo.lsi_groups: trigger must be non-empty".to_string(),
            ));
        }
        if !seen_triggers.insert(trigger.clone()) {
            return Err(ConfigError::Validation(format!(
                "seo.lsi_groups: duplicate trigger '{}'",
                group.trigger
            )));
        }
        validate_list(&format!("seo.lsi_groups[{trigger}].terms"), &group.terms)?;
    }

    Ok(())
}

fn validate_list(field: &str, entries: &[String]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{field}: list must contain at least one entry"
        )));
    }

    let mut seen = HashSet::new();
    for entry in entries {
        let normalized = entry.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field}: entries must be non-empty"
            )));
        }
        if !seen.insert(normalized) {
            return Err(ConfigError::Validation(format!(
                "{field}: duplicate entry '{entry}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
