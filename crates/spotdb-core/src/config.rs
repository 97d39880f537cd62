use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::geo::Coordinate;
use crate::search::{SearchDefaults, DEFAULT_ORIGIN, DEFAULT_RADIUS_KM};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config. Values that are present but malformed are errors:
/// lenient fallbacks belong to request handling, not to startup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("SPOTDB_ENV", "development"));
    let bind_addr: SocketAddr = parse_var(&lookup, "SPOTDB_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SPOTDB_LOG_LEVEL", "info");
    let seed_path = PathBuf::from(or_default("SPOTDB_SEED_PATH", "./config/spots.yaml"));

    let default_lat: f64 =
        parse_var(&lookup, "SPOTDB_DEFAULT_LAT", &DEFAULT_ORIGIN.latitude.to_string())?;
    let default_lng: f64 =
        parse_var(&lookup, "SPOTDB_DEFAULT_LNG", &DEFAULT_ORIGIN.longitude.to_string())?;
    let origin = Coordinate::new(default_lat, default_lng);
    if !origin.is_valid() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SPOTDB_DEFAULT_LAT/SPOTDB_DEFAULT_LNG".to_string(),
            reason: format!("({default_lat}, {default_lng}) is not a valid coordinate"),
        });
    }

    let radius_km: f64 = parse_var(
        &lookup,
        "SPOTDB_DEFAULT_RADIUS_KM",
        &DEFAULT_RADIUS_KM.to_string(),
    )?;
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SPOTDB_DEFAULT_RADIUS_KM".to_string(),
            reason: format!("radius must be a positive number, got {radius_km}"),
        });
    }

    let rate_limit_max_requests: usize =
        parse_var(&lookup, "SPOTDB_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs: u64 = parse_var(&lookup, "SPOTDB_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        seed_path,
        search_defaults: SearchDefaults { origin, radius_km },
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

fn parse_var<F, T>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
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
