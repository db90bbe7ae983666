use anyhow::{ensure, Context, Result};
use std::env;

use crate::errors::DEFAULT_STATUS;

const DEFAULT_CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
const DEFAULT_CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Status sent with failures that carry no status of their own
    pub fallback_status: u16,
    pub cors: Option<CorsConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_headers: String,
    pub allow_methods: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_status: DEFAULT_STATUS,
            cors: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let fallback_status: u16 = env::var("ERROR_FALLBACK_STATUS")
            .unwrap_or_else(|_| DEFAULT_STATUS.to_string())
            .parse()
            .context("ERROR_FALLBACK_STATUS must be a valid number")?;
        ensure!(
            (100..=999).contains(&fallback_status),
            "ERROR_FALLBACK_STATUS must be an HTTP status code, got {fallback_status}"
        );

        Ok(Config {
            fallback_status,
            cors: Self::cors_config_from_env(),
        })
    }

    fn cors_config_from_env() -> Option<CorsConfig> {
        // CORS headers are only attached when an origin is configured
        let allow_origin = env::var("ERROR_CORS_ALLOW_ORIGIN").ok()?;

        Some(CorsConfig {
            allow_origin,
            allow_headers: env::var("ERROR_CORS_ALLOW_HEADERS")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOW_HEADERS.to_string()),
            allow_methods: env::var("ERROR_CORS_ALLOW_METHODS")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOW_METHODS.to_string()),
        })
    }
}

impl CorsConfig {
    /// Allow any origin with the default header and method lists.
    pub fn permissive() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_headers: DEFAULT_CORS_ALLOW_HEADERS.to_string(),
            allow_methods: DEFAULT_CORS_ALLOW_METHODS.to_string(),
        }
    }
}
