//! # Property-Based Tests
//!
//! Filtering invariants checked with proptest over generated catalogs.

// Prices are generated from integer cents.
#![allow(clippy::float_arithmetic)]

use cardshop_core::{Card, CardId, FilterSpec, filter};
use proptest::collection::vec;
use proptest::prelude::*;

const CATEGORIES: [&str; 4] = ["birthday", "sympathy", "wedding", "holiday"];
const TAGS: [&str; 5] = ["gold", "floral", "winter", "colorful", "heartfelt"];

fn arb_card() -> impl Strategy<Value = (usize, u32, Vec<usize>)> {
    (0..CATEGORIES.len(), 100u32..1000, vec(0..TAGS.len(), 0..4))
}

fn build_cards(raw: Vec<(usize, u32, Vec<usize>)>) -> Vec<Card> {
    raw.into_iter()
        .enumerate()
        .map(|(index, (category, cents, tags))| Card {
            id: CardId(index as u64 + 1),
            name: format!("Card {}", index),
            category: CATEGORIES[category].to_string(),
            description: String::new(),
            price: f64::from(cents) / 100.0,
            image_url: String::new(),
            rotation: 0.0,
            tags: tags.into_iter().map(|t| TAGS[t].to_string()).collect(),
        })
        .collect()
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        proptest::option::of(0..CATEGORIES.len()),
        proptest::option::of(100u32..1000),
        proptest::option::of(100u32..1000),
        vec(0..TAGS.len(), 0..3),
    )
        .prop_map(|(category, min, max, tags)| FilterSpec {
            category: category.map(|c| CATEGORIES[c].to_string()),
            min_price: min.map(|m| f64::from(m) / 100.0),
            max_price: max.map(|m| f64::from(m) / 100.0),
            tags: tags.into_iter().map(|t| TAGS[t].to_string()).collect(),
        })
}

fn ids(cards: &[Card]) -> Vec<u64> {
    cards.iter().map(|c| c.id.value()).collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Result is a subsequence of the input: same relative order, no additions.
    #[test]
    fn filter_preserves_order(raw in vec(arb_card(), 0..30), spec in arb_spec()) {
        let cards = build_cards(raw);
        let result = filter(&cards, &spec);

        let result_ids = ids(&result);
        let mut sorted = result_ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(result_ids, sorted);
        prop_assert!(result.len() <= cards.len());
    }

    /// Every returned card satisfies every predicate; every dropped card fails one.
    #[test]
    fn filter_is_exact(raw in vec(arb_card(), 0..30), spec in arb_spec()) {
        let cards = build_cards(raw);
        let result = filter(&cards, &spec);
        let kept = ids(&result);

        for card in &cards {
            let expected = spec.category.as_ref().is_none_or(|c| &card.category == c)
                && spec.min_price.is_none_or(|min| card.price >= min)
                && spec.max_price.is_none_or(|max| card.price <= max)
                && (spec.tags.is_empty() || card.tags.iter().any(|t| spec.tags.contains(t)));
            prop_assert_eq!(kept.contains(&card.id.value()), expected);
        }
    }

    /// Filtering twice with the same spec changes nothing.
    #[test]
    fn filter_is_idempotent(raw in vec(arb_card(), 0..30), spec in arb_spec()) {
        let cards = build_cards(raw);
        let once = filter(&cards, &spec);
        let twice = filter(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// An empty spec is the identity.
    #[test]
    fn empty_spec_is_identity(raw in vec(arb_card(), 0..30)) {
        let cards = build_cards(raw);
        prop_assert_eq!(filter(&cards, &FilterSpec::default()), cards);
    }

    /// Price parsing accepts any finite decimal rendering.
    #[test]
    fn price_params_round_trip(cents in 0u32..100_000) {
        let raw = format!("{}.{:02}", cents / 100, cents % 100);
        let spec = FilterSpec::from_params(None, Some(&raw), Some(&raw), None);
        prop_assert!(spec.is_ok());
    }
}
