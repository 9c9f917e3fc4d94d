// src/config.rs

use std::{env, path::PathBuf, str::FromStr};

use dotenvy::dotenv;
use serde::Serialize;

use crate::error::AppError;

/// Deployment environment. Production turns off console logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Development,
    Production,
}

impl FromStr for AppEnv {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "dev" | "development" | "local" => Ok(AppEnv::Development),
            "prod" | "production" => Ok(AppEnv::Production),
            other => Err(AppError::InvalidConfig(format!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for the daily-rolling log file. `None` disables the file sink.
    pub log_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_env: AppEnv::Development,
            host: "0.0.0.0".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            log_dir: Some(PathBuf::from("logs")),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_env = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => defaults.app_env,
        };

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::InvalidConfig(format!("PORT '{}': {}", value, e)))?,
            None => defaults.port,
        };

        let rust_log = lookup("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = match lookup("LOG_DIR") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(PathBuf::from(value.trim())),
            None => defaults.log_dir,
        };

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value.trim().parse::<usize>().map_err(|e| {
                AppError::InvalidConfig(format!("MAX_BODY_BYTES '{}': {}", value, e))
            })?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            app_env,
            host,
            port,
            rust_log,
            log_dir,
            cors_origins,
            max_body_bytes,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}
