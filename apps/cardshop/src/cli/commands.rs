//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands. Query
//! commands read the same [`ContentStore`] the server exposes.

use crate::api;
use crate::config::AppConfig;
use crate::error::AppError;
use cardshop_core::{Card, CardId, ContentStore, FilterSpec};

/// Raw filter flags for the `cards` command.
#[derive(Debug, Clone, Default)]
pub struct CardFilterArgs {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub tags: Option<String>,
}

impl CardFilterArgs {
    /// Validate into a filter spec (same rules as `/api/cards`).
    pub fn to_spec(&self) -> Result<FilterSpec, AppError> {
        Ok(FilterSpec::from_params(
            self.category.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.tags.as_deref(),
        )?)
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), AppError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = ContentStore::new()?;

    tracing::info!("{}", "=".repeat(60));
    tracing::info!("Cardshop content API starting");
    tracing::info!("Address:    {}", config.server.addr());
    tracing::info!("Debug Mode: {}", config.debug);
    tracing::info!(
        "Catalog:    {} cards, {} categories",
        store.cards().len(),
        store.categories().len()
    );
    tracing::info!("{}", "=".repeat(60));

    api::run_server(config, store).await
}

// =============================================================================
// QUERY COMMANDS
// =============================================================================

/// List cards matching the given filters.
pub fn cmd_cards(json_mode: bool, args: &CardFilterArgs) -> Result<(), AppError> {
    let spec = args.to_spec()?;
    let store = ContentStore::new()?;
    let cards = store.query(&spec);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&api::CardsResponse::new(cards, &spec))?
        );
    } else {
        for card in &cards {
            println!("{}", format_card_line(card));
        }
        println!();
        println!("{} card(s)", cards.len());
    }
    Ok(())
}

/// Show one card.
pub fn cmd_card(json_mode: bool, id: u64) -> Result<(), AppError> {
    let store = ContentStore::new()?;
    let card = store.card(CardId(id))?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(card)?);
    } else {
        println!("{}", format_card_line(card));
        println!("  {}", card.description);
        println!("  image: {}", card.image_url);
        println!("  tags:  {}", card.tags.join(", "));
    }
    Ok(())
}

/// Print a section document. Sections are opaque JSON, so output is always JSON.
pub fn cmd_section(name: &str) -> Result<(), AppError> {
    let store = ContentStore::new()?;
    let doc = store.section_by_name(name)?;
    println!("{}", serde_json::to_string_pretty(doc)?);
    Ok(())
}

/// List declared categories.
pub fn cmd_categories(json_mode: bool) -> Result<(), AppError> {
    let store = ContentStore::new()?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(store.categories())?);
    } else {
        for category in store.categories() {
            println!("{}", category);
        }
    }
    Ok(())
}

/// One-line human summary of a card.
pub fn format_card_line(card: &Card) -> String {
    format!(
        "#{:<3} {:<28} [{}] ${:.2}",
        card.id.value(),
        card.name,
        card.category,
        card.price
    )
}

// =============================================================================
// TESTS
// =============================================================================
