//! # Content Store
//!
//! Immutable, process-lifetime store of the site sections and the card
//! catalog. Built once, then shared read-only (typically behind an `Arc`).
//!
//! Sections are keyed by the closed [`Section`] enumeration; the store never
//! resolves a section by reflecting on field names.

use crate::query::{FilterSpec, filter};
use crate::{Card, CardId, Catalog, CatalogError, Section, site};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// All site content plus the typed catalog.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    sections: BTreeMap<Section, Value>,
    catalog: Catalog,
}

impl ContentStore {
    /// Build the built-in site content stamped with the current time.
    pub fn new() -> Result<Self, CatalogError> {
        Self::site(Utc::now())
    }

    /// Build the built-in site content stamped with `built_at`.
    pub fn site(built_at: DateTime<Utc>) -> Result<Self, CatalogError> {
        site::build(built_at)
    }

    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> ContentStoreBuilder {
        ContentStoreBuilder::default()
    }

    /// Get the document for a section.
    pub fn section(&self, section: Section) -> Result<&Value, CatalogError> {
        self.sections
            .get(&section)
            .ok_or(CatalogError::SectionNotFound(section))
    }

    /// Get the document for a section by its canonical name.
    ///
    /// The name is validated against the known sections before lookup.
    pub fn section_by_name(&self, name: &str) -> Result<&Value, CatalogError> {
        let section: Section = name.parse()?;
        self.section(section)
    }

    /// All sections keyed by name, in canonical order.
    pub fn all_sections(&self) -> Result<Map<String, Value>, CatalogError> {
        Section::ALL
            .into_iter()
            .map(|section| {
                self.section(section)
                    .map(|doc| (section.as_str().to_string(), doc.clone()))
            })
            .collect()
    }

    /// The full catalog in declaration order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.catalog.cards()
    }

    /// The declared category list.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    /// Look up a single card.
    pub fn card(&self, id: CardId) -> Result<&Card, CatalogError> {
        self.catalog.card(id)
    }

    /// Cards matching `spec`, in catalog order.
    #[must_use]
    pub fn query(&self, spec: &FilterSpec) -> Vec<Card> {
        filter(self.cards(), spec)
    }

    /// The site version recorded in the metadata section.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.sections
            .get(&Section::Metadata)
            .and_then(|doc| doc.get("version"))
            .and_then(Value::as_str)
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Assembles a [`ContentStore`] from explicit parts.
#[derive(Debug, Default)]
pub struct ContentStoreBuilder {
    sections: BTreeMap<Section, Value>,
    catalog: Catalog,
}

impl ContentStoreBuilder {
    /// Set the document for a section, replacing any previous one.
    #[must_use]
    pub fn section(mut self, section: Section, document: Value) -> Self {
        self.sections.insert(section, document);
        self
    }

    /// Set the card catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn build(self) -> ContentStore {
        ContentStore {
            sections: self.sections,
            catalog: self.catalog,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn site_store_has_all_sections_in_order() {
        let store = ContentStore::new().expect("build");
        let all = store.all_sections().expect("all sections");
        let keys: Vec<&str> = all.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "header", "hero", "about", "gallery", "contact", "footer", "metadata", "theme"
            ]
        );
    }

    #[test]
    fn section_by_name_matches_all_sections() {
        let store = ContentStore::new().expect("build");
        let header = store.section_by_name("header").expect("header");
        let all = store.all_sections().expect("all");
        assert_eq!(Some(header), all.get("header"));
    }

    #[test]
    fn invalid_section_name() {
        let store = ContentStore::new().expect("build");
        assert_eq!(
            store.section_by_name("invalid_section"),
            Err(CatalogError::InvalidSection("invalid_section".to_string()))
        );
    }

    #[test]
    fn recognised_but_missing_section() {
        let store = ContentStore::builder()
            .section(Section::Header, json!({"logo": "x"}))
            .build();

        assert!(store.section_by_name("header").is_ok());
        assert_eq!(
            store.section_by_name("theme"),
            Err(CatalogError::SectionNotFound(Section::Theme))
        );
        assert_eq!(
            store.all_sections(),
            Err(CatalogError::SectionNotFound(Section::Hero))
        );
    }

    #[test]
    fn card_lookup() {
        let store = ContentStore::new().expect("build");
        assert_eq!(store.card(CardId(1)).map(|c| c.name.as_str()), Ok("Birthday Celebration"));
        assert_eq!(
            store.card(CardId(999)),
            Err(CatalogError::CardNotFound(CardId(999)))
        );
    }

    #[test]
    fn version_comes_from_metadata() {
        let store = ContentStore::new().expect("build");
        assert_eq!(store.version(), Some(site::SITE_VERSION));
        assert_eq!(ContentStore::default().version(), None);
    }

    #[test]
    fn query_delegates_to_filter() {
        let store = ContentStore::new().expect("build");
        let spec = FilterSpec {
            category: Some("wedding".to_string()),
            ..FilterSpec::default()
        };
        let cards = store.query(&spec);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, CardId(3));
    }
}
