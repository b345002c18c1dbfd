//! # Application Errors
//!
//! Failures outside request handling: configuration, startup, CLI commands.
//! Request-level failures use [`crate::api::ApiError`] instead.

use cardshop_core::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file could not be read.
    #[error("Cannot read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::AppConfig`].
    #[error("Invalid config file {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// An environment override holds an unusable value.
    #[error("Invalid value for {name}: {value}")]
    ConfigValue { name: String, value: String },

    /// The logging subsystem could not be initialised.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Catalog lookup or construction failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}
