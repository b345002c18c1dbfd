//! # Cardshop
//!
//! Library side of the `cardshop` binary: HTTP API, CLI, configuration and
//! logging setup around the `cardshop-core` content store.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::AppError;
