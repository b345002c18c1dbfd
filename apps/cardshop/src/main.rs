//! # Cardshop - Greeting-Card Content API
//!
//! The main binary for the Cardshop content service.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog queries
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              apps/cardshop (THE BINARY)          │
//! │                                                  │
//! │   ┌─────────────┐          ┌─────────────┐      │
//! │   │    CLI      │          │  HTTP API   │      │
//! │   │   (clap)    │          │   (axum)    │      │
//! │   └──────┬──────┘          └──────┬──────┘      │
//! │          └───────────┬────────────┘             │
//! │                      ▼                          │
//! │              ┌───────────────┐                  │
//! │              │ cardshop-core │                  │
//! │              │ (THE CATALOG) │                  │
//! │              └───────────────┘                  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! cardshop server --host 0.0.0.0 --port 5000
//!
//! # CLI queries
//! cardshop cards --category birthday
//! cardshop card --id 3 --json-mode
//! cardshop section --name hero
//! ```

use cardshop::{AppConfig, cli, logging};
use clap::Parser;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Configuration comes first: it decides the log format and file.
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Only the server writes the log file read back by `/api/debug/logs`.
    let log_file = if cli.is_server() {
        config.logging.file.as_deref()
    } else {
        None
    };
    if let Err(e) = logging::init(&config, log_file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli, config).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Cardshop startup banner.
fn print_banner() {
    println!(
        r#"
   ___              _     _
  / __|__ _ _ _ __| |___| |_  ___ _ __
 | (__/ _` | '_/ _` (_-<| ' \/ _ \ '_ \
  \___\__,_|_| \__,_/__/|_||_\___/ .__/
                                 |_|
  All Occasion Cards content API v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
