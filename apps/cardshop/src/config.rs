//! # Configuration Module
//!
//! Runtime settings for the server and CLI.
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`)
//! 3. Environment variables
//! 4. CLI flags (host/port only, applied by the `server` command)
//!
//! ## Environment Variables
//!
//! - `CARDSHOP_HOST`, `CARDSHOP_PORT`: bind address
//! - `CARDSHOP_DEBUG`: `true` enables the debug endpoints (default: true)
//! - `CARDSHOP_CORS_ORIGINS`: comma-separated origins, or `*` for all
//! - `CARDSHOP_RATE_LIMIT`: requests per second, 0 disables (default: 100)
//! - `CARDSHOP_LOG_FORMAT`: `text` or `json`
//! - `CARDSHOP_LOG_FILE`: log file path, empty disables the file log
//! - `CARDSHOP_LOG_FILTER`: tracing filter directive

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default rate limit: 100 requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    /// Enables `/api/debug/*` and verbose default logging.
    pub debug: bool,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    /// Global requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            debug: true,
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Allowed CORS origins. A single `*` allows every origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

impl CorsConfig {
    #[must_use]
    pub fn is_permissive(&self) -> bool {
        self.origins.iter().any(|origin| origin == "*")
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Plain-text log file; its tail is served by `/api/debug/logs`.
    pub file: Option<PathBuf>,
    /// Filter directive; `RUST_LOG` still takes precedence.
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            file: Some(PathBuf::from("app.log")),
            filter: None,
        }
    }
}

/// Console log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::ConfigValue {
                name: "CARDSHOP_LOG_FORMAT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|message| AppError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply `CARDSHOP_*` overrides obtained through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CARDSHOP_HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("CARDSHOP_PORT") {
            self.server.port = parse_value("CARDSHOP_PORT", &port)?;
        }
        if let Some(debug) = lookup("CARDSHOP_DEBUG") {
            self.debug = debug.trim().eq_ignore_ascii_case("true");
        }
        if let Some(origins) = lookup("CARDSHOP_CORS_ORIGINS") {
            self.cors.origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(limit) = lookup("CARDSHOP_RATE_LIMIT") {
            self.rate_limit = parse_value("CARDSHOP_RATE_LIMIT", &limit)?;
        }
        if let Some(format) = lookup("CARDSHOP_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        if let Some(file) = lookup("CARDSHOP_LOG_FILE") {
            self.logging.file = (!file.is_empty()).then(|| PathBuf::from(file));
        }
        if let Some(filter) = lookup("CARDSHOP_LOG_FILTER").filter(|f| !f.is_empty()) {
            self.logging.filter = Some(filter);
        }
        Ok(())
    }

    /// Filter directive used when `RUST_LOG` is not set.
    #[must_use]
    pub fn log_filter(&self) -> String {
        match &self.logging.filter {
            Some(filter) => filter.clone(),
            None if self.debug => {
                "cardshop=debug,cardshop_core=debug,tower_http=debug".to_string()
            }
            None => "cardshop=info,tower_http=info".to_string(),
        }
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim().parse().map_err(|_| AppError::ConfigValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
