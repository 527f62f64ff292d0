// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The Strava access token is deliberately not part of this struct: it is
//! looked up on every tool invocation through a
//! [`CredentialSource`](crate::services::CredentialSource).

use std::env;
use std::time::Duration;

const DEFAULT_STRAVA_API_URL: &str = "https://www.strava.com/api/v3";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Strava v3 API
    pub strava_api_url: String,
    /// Server port
    pub port: u16,
    /// Timeout applied to each Strava request
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strava_api_url: DEFAULT_STRAVA_API_URL.to_string(),
            port: DEFAULT_PORT,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            strava_api_url: env::var("STRAVA_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_STRAVA_API_URL.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            http_timeout_secs: parse_var("STRAVA_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }

    /// Config for tests: never talks to the real Strava API.
    pub fn test_default() -> Self {
        Self {
            strava_api_url: "http://127.0.0.1:9".to_string(),
            port: 0,
            http_timeout_secs: 5,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
