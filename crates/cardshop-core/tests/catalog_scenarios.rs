//! # Catalog Scenario Tests
//!
//! Behaviour of the built-in store, grouped by concern.
//!
//! ## Groups
//! - S0: Lookups
//! - S1: Category filter
//! - S2: Price filter
//! - S3: Tag filter

use cardshop_core::{CardId, CatalogError, ContentStore, FilterSpec, Section, filter};

fn store() -> ContentStore {
    ContentStore::new().expect("built-in content is consistent")
}

fn ids(spec: &FilterSpec) -> Vec<u64> {
    store().query(spec).iter().map(|c| c.id.value()).collect()
}

// =============================================================================
// S0: LOOKUPS
// =============================================================================

mod s0_lookups {
    use super::*;

    /// S0.1: Existing card is returned unchanged.
    #[test]
    fn card_one_is_returned_unchanged() {
        let store = store();
        let card = store.card(CardId(1)).expect("card 1");
        assert_eq!(card, &store.cards()[0]);
        assert_eq!(card.name, "Birthday Celebration");
        assert_eq!(card.tags, vec!["birthday", "celebration", "colorful"]);
    }

    /// S0.2: Missing card is reported.
    #[test]
    fn card_999_is_not_found() {
        assert_eq!(
            store().card(CardId(999)),
            Err(CatalogError::CardNotFound(CardId(999)))
        );
    }

    /// S0.3: Header section equals the one in the full content.
    #[test]
    fn header_matches_full_content() {
        let store = store();
        let all = store.all_sections().expect("all");
        assert_eq!(store.section(Section::Header).ok(), all.get("header"));
    }

    /// S0.4: Categories are the declared list, in order.
    #[test]
    fn categories_are_declared_list() {
        assert_eq!(
            store().categories(),
            ["birthday", "sympathy", "wedding", "thank_you", "holiday", "get_well"]
        );
    }

    /// S0.5: The gallery section embeds the same cards as the catalog.
    #[test]
    fn gallery_cards_match_catalog() {
        let store = store();
        let gallery = store.section(Section::Gallery).expect("gallery");
        let embedded = serde_json::to_value(store.cards()).expect("serialize");
        assert_eq!(gallery["cards"], embedded);
    }
}

// =============================================================================
// S1: CATEGORY FILTER
// =============================================================================

mod s1_category {
    use super::*;

    /// S1.1: Birthday matches exactly card 1.
    #[test]
    fn birthday() {
        let spec = FilterSpec {
            category: Some("birthday".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&spec), vec![1]);
    }

    /// S1.2: Each declared category yields only its own cards.
    #[test]
    fn every_category_is_exact() {
        let store = store();
        for category in store.categories() {
            let spec = FilterSpec {
                category: Some(category.clone()),
                ..FilterSpec::default()
            };
            let cards = filter(store.cards(), &spec);
            assert!(!cards.is_empty());
            assert!(cards.iter().all(|c| &c.category == category));
        }
    }

    /// S1.3: Unknown category is an empty result, not an error.
    #[test]
    fn unknown_category_is_empty() {
        let spec = FilterSpec {
            category: Some("anniversary".to_string()),
            ..FilterSpec::default()
        };
        assert!(ids(&spec).is_empty());
    }
}

// =============================================================================
// S2: PRICE FILTER
// =============================================================================

mod s2_price {
    use super::*;

    /// S2.1: min_price 5.0 keeps cards 2 and 3.
    #[test]
    fn min_price_five() {
        let spec = FilterSpec::from_params(None, Some("5.0"), None, None).expect("valid");
        assert_eq!(ids(&spec), vec![2, 3]);
    }

    /// S2.2: Bounds are inclusive on both ends.
    #[test]
    fn bounds_inclusive() {
        let spec = FilterSpec::from_params(None, Some("4.49"), Some("4.99"), None).expect("valid");
        assert_eq!(ids(&spec), vec![1, 5, 6]);
    }

    /// S2.3: Inverted range yields nothing.
    #[test]
    fn inverted_range() {
        let spec = FilterSpec::from_params(None, Some("6"), Some("4"), None).expect("valid");
        assert!(ids(&spec).is_empty());
    }

    /// S2.4: Malformed number fails before filtering.
    #[test]
    fn malformed_number() {
        let result = FilterSpec::from_params(None, None, Some("abc"), None);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidParameter { ref name, .. }) if name == "max_price"
        ));
    }
}

// =============================================================================
// S3: TAG FILTER
// =============================================================================

mod s3_tags {
    use super::*;

    /// S3.1: birthday,celebration matches card 1 only.
    #[test]
    fn birthday_celebration() {
        let spec = FilterSpec::from_params(None, None, None, Some("birthday,celebration"))
            .expect("valid");
        assert_eq!(ids(&spec), vec![1]);
    }

    /// S3.2: Tags from different cards union their matches.
    #[test]
    fn union_across_cards() {
        let spec = FilterSpec::from_params(None, None, None, Some("gold,winter")).expect("valid");
        assert_eq!(ids(&spec), vec![3, 5]);
    }

    /// S3.3: Matching is case-sensitive.
    #[test]
    fn case_sensitive() {
        let spec = FilterSpec::from_params(None, None, None, Some("Gold")).expect("valid");
        assert!(ids(&spec).is_empty());
    }
}
