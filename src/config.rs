// Copyright (c) 2025 - Cowboy AI, Inc.
//! CloudSigma connection configuration

use serde::{Deserialize, Serialize};

use crate::errors::{CloudSigmaError, CloudSigmaResult};

/// Default API endpoint (Zurich region)
pub const DEFAULT_ENDPOINT: &str = "https://zrh.cloudsigma.com/api/2.0";

/// Configuration for a CloudSigma API connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudSigmaConfig {
    /// API base URL including the version segment
    pub endpoint: String,

    /// Account email used for HTTP basic authentication
    pub username: String,

    /// Account password
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for CloudSigmaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl CloudSigmaConfig {
    /// Load configuration from environment variables
    ///
    /// `CLOUDSIGMA_USERNAME` and `CLOUDSIGMA_PASSWORD` are required;
    /// `CLOUDSIGMA_ENDPOINT` and `CLOUDSIGMA_TIMEOUT_SECS` fall back to defaults.
    pub fn from_env() -> CloudSigmaResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CloudSigmaResult<Self> {
        let endpoint = lookup("CLOUDSIGMA_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let username = lookup("CLOUDSIGMA_USERNAME").ok_or_else(|| {
            CloudSigmaError::Configuration("CLOUDSIGMA_USERNAME not set".to_string())
        })?;

        let password = lookup("CLOUDSIGMA_PASSWORD").ok_or_else(|| {
            CloudSigmaError::Configuration("CLOUDSIGMA_PASSWORD not set".to_string())
        })?;

        let timeout_secs = match lookup("CLOUDSIGMA_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                CloudSigmaError::Configuration(format!("Invalid CLOUDSIGMA_TIMEOUT_SECS: {}", raw))
            })?,
            None => default_timeout(),
        };

        let config = Self {
            endpoint,
            username,
            password,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the endpoint is usable
    pub fn validate(&self) -> CloudSigmaResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(CloudSigmaError::Configuration(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CloudSigmaError::Configuration(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Join the endpoint with an API path such as `servers/detail/`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
