use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Connect timeout used when `SHOPDESK_CONNECT_TIMEOUT_SECS` is unset.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent used when `SHOPDESK_USER_AGENT` is unset.
pub const DEFAULT_USER_AGENT: &str = "shopdesk/0.1 (admin)";

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
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SHOPDESK_ENV", "development"))?;
    let api_base_url = parse_base_url(&or_default(
        "SHOPDESK_API_BASE_URL",
        "http://localhost:6060",
    ))?;
    let log_level = or_default("SHOPDESK_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SHOPDESK_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64(
        "SHOPDESK_CONNECT_TIMEOUT_SECS",
        &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
    )?;
    let user_agent = or_default("SHOPDESK_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        api_base_url,
        log_level,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPDESK_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

/// Accepts only absolute `http`/`https` origins and strips trailing slashes.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPDESK_API_BASE_URL".to_string(),
            reason: format!("\"{raw}\" is not an absolute http(s) URL"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
