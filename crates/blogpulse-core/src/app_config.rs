use std::path::PathBuf;

use crate::attribution::AttributionModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings for whatever hosts the calculators.
///
/// The calculators themselves never read this; the host passes the relevant
/// fields in as explicit parameters.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML file overriding the built-in scoring vocabularies.
    pub rules_path: Option<PathBuf>,
    /// Number of daily forecast points the trend analyzer projects.
    pub forecast_horizon: usize,
    pub attribution_model: AttributionModel,
    pub anomaly_z_threshold: f64,
}
