use crate::app_config::{AppConfig, Environment};
use crate::attribution::AttributionModel;
use crate::ConfigError;

/// Longest forecast, in days, that configuration or the CLI will accept.
pub const MAX_FORECAST_HORIZON: usize = 365;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Decoupled from the real environment so tests can use a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("BLOGPULSE_ENV", "development"));
    let log_level = or_default("BLOGPULSE_LOG_LEVEL", "info");

    let rules_path = lookup("BLOGPULSE_RULES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let forecast_horizon = or_default("BLOGPULSE_FORECAST_HORIZON", "30")
        .parse::<usize>()
        .map_err(|e| invalid("BLOGPULSE_FORECAST_HORIZON", e.to_string()))?;
    if forecast_horizon > MAX_FORECAST_HORIZON {
        return Err(invalid(
            "BLOGPULSE_FORECAST_HORIZON",
            format!("must be at most {MAX_FORECAST_HORIZON} days, got {forecast_horizon}"),
        ));
    }

    let attribution_model = or_default("BLOGPULSE_ATTRIBUTION_MODEL", "linear")
        .parse::<AttributionModel>()
        .map_err(|reason| invalid("BLOGPULSE_ATTRIBUTION_MODEL", reason))?;

    let anomaly_z_threshold = or_default("BLOGPULSE_ANOMALY_Z_THRESHOLD", "2.0")
        .parse::<f64>()
        .map_err(|e| invalid("BLOGPULSE_ANOMALY_Z_THRESHOLD", e.to_string()))?;
    if !anomaly_z_threshold.is_finite() || anomaly_z_threshold <= 0.0 {
        return Err(invalid(
            "BLOGPULSE_ANOMALY_Z_THRESHOLD",
            format!("must be a positive finite number, got {anomaly_z_threshold}"),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        rules_path,
        forecast_horizon,
        attribution_model,
        anomaly_z_threshold,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
