use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub users_url: String,
    pub payments_url: String,
    pub companies_url: String,
    pub ads_url: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All four service URLs are required; a gateway that cannot name its
    /// upstreams should fail at startup, not at the first request.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            users_url: env::var("USERS_URL").context("USERS_URL must be set")?,
            payments_url: env::var("PAYMENTS_URL").context("PAYMENTS_URL must be set")?,
            companies_url: env::var("COMPANIES_URL").context("COMPANIES_URL must be set")?,
            ads_url: env::var("ADS_URL").context("ADS_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("UPSTREAM_TIMEOUT_SECS must be a valid number")?,
        })
    }
}
