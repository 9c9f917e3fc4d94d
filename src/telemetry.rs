// src/telemetry.rs

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::AppError};

const LOG_FILE_PREFIX: &str = "content-guard.log";

/// Logger configuration, decided once at startup and handed to [`init`].
///
/// Production keeps the file sink but drops console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `content_guard=debug,tower_http=info`.
    pub filter: String,
    pub console: bool,
    pub file_dir: Option<PathBuf>,
}

impl From<&Config> for LogConfig {
    fn from(config: &Config) -> Self {
        Self {
            filter: config.rust_log.clone(),
            console: !config.is_production(),
            file_dir: config.log_dir.clone(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer when dropped, so `main` must
/// hold it for the life of the process.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| AppError::InvalidConfig(format!("RUST_LOG '{}': {}", config.filter, e)))?;

    let stdout_layer = config
        .console
        .then(|| fmt::layer().with_writer(std::io::stdout).with_target(false));

    let (file_layer, guard) = match &config.file_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::InternalServerError(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnv;

    #[test]
    fn production_drops_console_output() {
        let config = Config {
            app_env: AppEnv::Production,
            ..Config::default()
        };
        let log = LogConfig::from(&config);
        assert!(!log.console);
        assert_eq!(log.file_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn development_logs_to_console() {
        let config = Config {
            rust_log: "debug".to_string(),
            log_dir: None,
            ..Config::default()
        };
        let log = LogConfig::from(&config);
        assert_eq!(
            log,
            LogConfig {
                filter: "debug".to_string(),
                console: true,
                file_dir: None,
            }
        );
    }

    #[test]
    fn rejects_invalid_filter() {
        let log = LogConfig {
            filter: "content_guard=notalevel".to_string(),
            console: false,
            file_dir: None,
        };
        assert!(matches!(init(&log), Err(AppError::InvalidConfig(_))));
    }
}
