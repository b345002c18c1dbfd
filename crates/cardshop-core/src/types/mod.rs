//! # Core Type Definitions
//!
//! This module contains the core types of the catalog:
//! - Card identifiers and records (`CardId`, `Card`)
//! - The closed set of content sections (`Section`)
//! - Error types (`CatalogError`)
//!
//! ## Immutability
//!
//! All records are built once at startup and only handed out by reference
//! or by clone afterwards. Nothing in this module mutates after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CARD IDENTIFIER
// =============================================================================

/// Unique identifier of a card in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl CardId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CARD
// =============================================================================

/// A catalog entry.
///
/// `rotation` is the tilt the frontend applies when rendering the card and
/// carries no business meaning. `tags` keep declaration order and are not
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub rotation: f64,
    pub tags: Vec<String>,
}

impl Card {
    /// Whether any of the card's tags appears in `wanted` (exact, case-sensitive).
    #[must_use]
    pub fn has_any_tag(&self, wanted: &[String]) -> bool {
        self.tags.iter().any(|tag| wanted.contains(tag))
    }
}

// =============================================================================
// SECTION
// =============================================================================

/// One named block of static site content.
///
/// The derived `Ord` follows declaration order, which is also the order
/// sections appear in the full-content response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Hero,
    About,
    Gallery,
    Contact,
    Footer,
    Metadata,
    Theme,
}

impl Section {
    /// Every section, in canonical order.
    pub const ALL: [Section; 8] = [
        Section::Header,
        Section::Hero,
        Section::About,
        Section::Gallery,
        Section::Contact,
        Section::Footer,
        Section::Metadata,
        Section::Theme,
    ];

    /// Canonical lowercase name, as used in URLs and JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
            Section::Footer => "footer",
            Section::Metadata => "metadata",
            Section::Theme => "theme",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CatalogError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == name)
            .ok_or_else(|| CatalogError::InvalidSection(name.to_string()))
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when reading or building the catalog.
///
/// - No silent failures
/// - Lookups return `Result<T, CatalogError>`; callers map the kind to a response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The section name is not one of the known sections.
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// The section is known but the store holds no document for it.
    #[error("Section not found: {0}")]
    SectionNotFound(Section),

    /// No card carries the requested identifier.
    #[error("Card not found with ID: {0}")]
    CardNotFound(CardId),

    /// A query parameter could not be interpreted.
    #[error("Invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: String, value: String },

    /// A card references a category missing from the declared list.
    #[error("Card {card} uses undeclared category '{category}'")]
    UnknownCategory { card: CardId, category: String },

    /// Two cards share the same identifier.
    #[error("Duplicate card ID: {0}")]
    DuplicateCardId(CardId),
}

// =============================================================================
// TESTS
// =============================================================================
