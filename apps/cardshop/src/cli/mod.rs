//! # Cardshop CLI Module
//!
//! This module implements the CLI interface for Cardshop.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server (default when no command is given)
//! - `cards` - List cards, with the same filters as `/api/cards`
//! - `card` - Show one card
//! - `section` - Print one content section
//! - `categories` - List declared categories

mod commands;

use crate::config::AppConfig;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Cardshop - greeting-card content API
///
/// Serves the site content and card catalog over HTTP, or queries it
/// directly from the command line.
#[derive(Parser, Debug)]
#[command(name = "cardshop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List cards, optionally filtered
    Cards {
        /// Exact category match
        #[arg(long)]
        category: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<String>,

        /// Comma-separated tags; a card matches if it has any of them
        #[arg(long)]
        tags: Option<String>,
    },

    /// Show a single card
    Card {
        /// Card ID
        #[arg(short, long)]
        id: u64,
    },

    /// Print a content section
    Section {
        /// Section name (header, hero, about, gallery, contact, footer, metadata, theme)
        #[arg(short, long)]
        name: String,
    },

    /// List declared categories
    Categories,
}

impl Cli {
    /// Whether this invocation runs the HTTP server (explicitly or by default).
    pub fn is_server(&self) -> bool {
        matches!(self.command, None | Some(Commands::Server { .. }))
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments and loaded configuration.
pub async fn execute(cli: Cli, config: AppConfig) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(config, host, port).await,
        Some(Commands::Cards {
            category,
            min_price,
            max_price,
            tags,
        }) => cmd_cards(
            json_mode,
            &CardFilterArgs {
                category,
                min_price,
                max_price,
                tags,
            },
        ),
        Some(Commands::Card { id }) => cmd_card(json_mode, id),
        Some(Commands::Section { name }) => cmd_section(&name),
        Some(Commands::Categories) => cmd_categories(json_mode),
        None => {
            // No subcommand - serve by default
            cmd_server(config, None, None).await
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
