use std::time::Duration;

use reqwest::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    /// Base URL of the upstream Pokémon API, e.g. `https://pokeapi.co/api/v2`.
    pub pokeapi_url: Url,
    /// Timeout applied to every outbound HTTP request.
    pub http_timeout: Duration,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let pokeapi_url = parse_base_url(
            "POKEAPI_BASE_URL",
            &std::env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_POKEAPI_BASE_URL.to_string()),
        )?;

        let http_timeout = match std::env::var("HTTP_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(parse_env("HTTP_TIMEOUT_SECS", &value)?),
            Err(_) => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let port = match std::env::var("PORT") {
            Ok(value) => parse_env("PORT", &value)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            pokeapi_url,
            http_timeout,
            port,
        })
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Parses an http(s) base URL.
///
/// Only http and https are accepted since request paths are appended as segments.
fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let url: Url = parse_env(name, value)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}
