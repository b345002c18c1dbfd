//! # Catalog Module
//!
//! The typed card collection and the declared category list.
//!
//! Categories are declared independently of the cards. Construction checks
//! that every card uses a declared category and that ids are unique, so a
//! mismatch fails at startup instead of surfacing in responses.

use crate::{Card, CardId, CatalogError};
use std::collections::BTreeSet;

/// The fixed collection of cards plus the declared category set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cards: Vec<Card>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    /// - `DuplicateCardId` if two cards share an id
    /// - `UnknownCategory` if a card's category is not declared
    pub fn new(cards: Vec<Card>, categories: Vec<String>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateCardId(card.id));
            }
            if !categories.contains(&card.category) {
                return Err(CatalogError::UnknownCategory {
                    card: card.id,
                    category: card.category.clone(),
                });
            }
        }
        Ok(Self { cards, categories })
    }

    /// All cards in declaration order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Declared categories in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Find a card by id (linear scan).
    pub fn card(&self, id: CardId) -> Result<&Card, CatalogError> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or(CatalogError::CardNotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
