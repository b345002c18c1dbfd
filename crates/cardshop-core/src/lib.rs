//! # cardshop-core
//!
//! The greeting-card catalog and site content - THE CATALOG.
//!
//! This crate holds everything the content API serves:
//! - `types`: card records, section names, errors
//! - `catalog`: the validated card collection and category list
//! - `content`: the immutable [`ContentStore`]
//! - `query`: card filtering ([`FilterSpec`], [`filter`])
//! - `site`: the built-in content
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - The store is built once and never mutated afterwards
//! - Every lookup returns `Result<_, CatalogError>`; nothing panics

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod content;
pub mod query;
pub mod site;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use catalog::Catalog;
pub use content::{ContentStore, ContentStoreBuilder};
pub use query::{FilterSpec, filter};
pub use site::{SITE_NAME, SITE_VERSION};
pub use types::{Card, CardId, CatalogError, Section};
