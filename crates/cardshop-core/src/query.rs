//! # Query Module
//!
//! Card filtering for the catalog.
//!
//! Predicates are applied conjunctively in a fixed order:
//! 1. category exact match
//! 2. `price >= min_price`
//! 3. `price <= max_price`
//! 4. tag intersection (at least one shared tag)
//!
//! An absent field always passes. Surviving cards keep catalog order.

use crate::{Card, CatalogError};
use serde::Serialize;

/// Per-request filter over the catalog.
///
/// No cross-field checks: `min_price > max_price` is legal and simply
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSpec {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub tags: Vec<String>,
}

impl FilterSpec {
    /// Build a spec from raw query-string values.
    ///
    /// Empty strings count as absent. `tags` is comma-separated; empty
    /// segments are dropped.
    ///
    /// # Errors
    /// `InvalidParameter` when a price is not a finite number.
    pub fn from_params(
        category: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        tags: Option<&str>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            category: non_empty(category).map(str::to_string),
            min_price: parse_price("min_price", min_price)?,
            max_price: parse_price("max_price", max_price)?,
            tags: parse_tags(tags),
        })
    }

    /// Whether the spec filters nothing out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.tags.is_empty()
    }

    /// Whether a single card passes every predicate.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| card.category == *category)
            && self.min_price.is_none_or(|min| card.price >= min)
            && self.max_price.is_none_or(|max| card.price <= max)
            && (self.tags.is_empty() || card.has_any_tag(&self.tags))
    }
}

/// Return the cards matching `spec`, in their original relative order.
#[must_use]
pub fn filter(cards: &[Card], spec: &FilterSpec) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| spec.matches(card))
        .cloned()
        .collect()
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn parse_price(name: &str, raw: Option<&str>) -> Result<Option<f64>, CatalogError> {
    let Some(value) = non_empty(raw) else {
        return Ok(None);
    };

    match value.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(CatalogError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

// =============================================================================
// TESTS
// =============================================================================
