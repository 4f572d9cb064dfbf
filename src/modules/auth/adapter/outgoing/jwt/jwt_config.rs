use std::env;

use crate::shared::config::ConfigError;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub leeway_seconds: u64,
}

impl JwtConfig {
    /// Load JWT verification settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: "<shorter than 32 characters>".to_string(),
            });
        }

        let leeway_raw = env::var("JWT_LEEWAY").unwrap_or_else(|_| "30".to_string());
        let leeway_seconds = leeway_raw
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid {
                key: "JWT_LEEWAY",
                value: leeway_raw.clone(),
            })?;

        Ok(Self {
            secret_key,
            leeway_seconds,
        })
    }
}
