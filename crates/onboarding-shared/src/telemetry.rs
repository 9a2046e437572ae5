//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, TelemetrySettings};
use crate::constants::DEFAULT_LOG_FILE_PREFIX;
use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(settings: &TelemetrySettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    let file_appender = settings
        .log_dir
        .as_deref()
        .map(file_appender)
        .transpose()?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .with(file_appender.map(|writer| fmt::layer().json().with_writer(writer)))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(true))
            .with(file_appender.map(|writer| fmt::layer().with_writer(writer).with_ansi(false)))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}

fn file_appender(dir: &str) -> Result<RollingFileAppender, AppError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(DEFAULT_LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}
