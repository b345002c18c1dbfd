//! # Logging Setup
//!
//! Installs the global `tracing` subscriber:
//! - console layer, text or JSON (`CARDSHOP_LOG_FORMAT=json`)
//! - optional plain-text file layer, read back by `/api/debug/logs`
//!
//! `RUST_LOG` overrides the configured filter.

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Initialise tracing for the process. Call once, before dispatching.
///
/// `log_file` is the file layer target; one-shot CLI queries pass `None` so
/// they never create or append to the server log.
pub fn init(config: &AppConfig, log_file: Option<&Path>) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::Io(format!("Cannot open log file {:?}: {}", path, e)))?,
        ),
        None => None,
    };

    let result = match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .with(file_layer(file))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .with(file_layer(file))
            .try_init(),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}

type FileLayer<S> = fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, Mutex<File>>;

/// Plain-text layer writing to the log file, if one is configured.
fn file_layer<S>(file: Option<File>) -> Option<FileLayer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(Mutex::new(file))
    })
}
