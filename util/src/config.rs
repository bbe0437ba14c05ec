//! Application configuration loaded from environment variables.
//!
//! `AppConfig` is built once at process start by `main` and handed to the
//! pieces that need it. Nothing reads the environment after startup.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} has not been defined")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got `{value}`")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Loads the configuration from `.env` and the process environment.
    ///
    /// Fails if `DATABASE_URL` is missing or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port_raw = var("PORT", "8080");
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            expected: "port number",
            value: port_raw.clone(),
        })?;

        Ok(Self {
            env: var("APP_ENV", "development"),
            project_name: var("PROJECT_NAME", "examples-api"),
            log_level: var("LOG_LEVEL", "api=info,db=info,tower_http=info"),
            log_file: var("LOG_FILE", "api.log"),
            log_to_stdout: var("LOG_TO_STDOUT", "false") == "true",
            database_url,
            host: var("HOST", "0.0.0.0"),
            port,
        })
    }

    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection string handed to sea-orm.
    ///
    /// A value that is already a DSN is used as-is; anything else is treated as
    /// a SQLite file path opened in read-write-create mode.
    pub fn database_dsn(&self) -> String {
        let raw = &self.database_url;
        if raw.contains("://") || raw.starts_with("sqlite:") {
            raw.clone()
        } else {
            format!("sqlite://{raw}?mode=rwc")
        }
    }

    /// Filesystem path of a file-backed SQLite database, if that is what
    /// `DATABASE_URL` points at.
    pub fn sqlite_path(&self) -> Option<PathBuf> {
        let raw = self.database_url.as_str();
        let path = if let Some(rest) = raw.strip_prefix("sqlite://") {
            rest.split('?').next().unwrap_or(rest)
        } else if raw.contains("://") || raw.starts_with("sqlite:") {
            return None;
        } else {
            raw
        };

        if path.is_empty() || path.contains(":memory:") {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}
