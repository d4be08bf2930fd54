//! Service configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `COLOR_INITIAL` | `white` |
//! | `COLOR_INDEX_POLICY` | `strict` (`strict` or `wrap`) |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{IndexPolicy, DEFAULT_COLOR};

/// Raised when an environment variable holds an unusable value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid COLOR_INDEX_POLICY: {0}")]
    InvalidIndexPolicy(String),
}

/// Settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Color the store starts with.
    pub initial_color: String,
    /// Handling of negative channel sums in emotion lookups.
    pub index_policy: IndexPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            initial_color: DEFAULT_COLOR.to_string(),
            index_policy: IndexPolicy::Strict,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    value: port.clone(),
                    source,
                })?;
        }
        if let Some(color) = lookup("COLOR_INITIAL") {
            config.initial_color = color;
        }
        if let Some(policy) = lookup("COLOR_INDEX_POLICY") {
            config.index_policy = policy.parse().map_err(ConfigError::InvalidIndexPolicy)?;
        }

        Ok(config)
    }

    /// `host:port` string for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
