//! Shared configuration and rule tables for the blogpulse calculators.
//!
//! Nothing in here computes a score. The calculator crates take the types
//! defined here as explicit parameters so that scoring vocabularies can be
//! tuned from a YAML file without touching calculator logic.

pub mod app_config;
pub mod attribution;
pub mod config;
pub mod error;
pub mod rules;

pub use app_config::{AppConfig, Environment};
pub use attribution::AttributionModel;
pub use config::{load_app_config, load_app_config_from_env, MAX_FORECAST_HORIZON};
pub use error::ConfigError;
pub use rules::{
    load_rules, parse_rules, LeadScoringRules, LsiGroup, RulesFile, SeoVocabulary, TitleTiers,
};
