use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl AppConfig {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "uploads";

    /// Reads server settings from the process environment.
    ///
    /// Call after the `.env` files were loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let host = required("HOST")?;
        let port_raw = required("PORT")?;
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            key: "PORT",
            value: port_raw.clone(),
        })?;

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string());

        Ok(Self {
            database_url,
            host,
            port,
            upload_dir: PathBuf::from(upload_dir),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
