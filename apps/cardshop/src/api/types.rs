//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API. Every success
//! body carries a `timestamp` taken when the response is built.

use cardshop_core::{Card, FilterSpec};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current time as an RFC 3339 / ISO-8601 UTC string.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// =============================================================================
// ERROR ENVELOPE
// =============================================================================

/// Uniform error wrapper: `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status_code: u16,
    pub error_code: String,
    pub timestamp: String,
    /// Error-specific fields such as `requested_url`.
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub debug_mode: bool,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>, debug_mode: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            message: format!("{} API is running", cardshop_core::SITE_NAME),
            timestamp: now_timestamp(),
            version: version.into(),
            debug_mode,
        }
    }
}

// =============================================================================
// CONTENT RESPONSES
// =============================================================================

/// All sections keyed by name, plus a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse {
    #[serde(flatten)]
    pub sections: Map<String, Value>,
    pub timestamp: String,
}

/// A single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResponse {
    pub section: String,
    pub data: Value,
    pub timestamp: String,
}

/// Contact section only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub contact: Value,
    pub timestamp: String,
}

// =============================================================================
// CARD RESPONSES
// =============================================================================

/// Raw `/api/cards` query parameters, validated into a [`FilterSpec`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardsQuery {
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub tags: Option<String>,
}

impl CardsQuery {
    /// Collect the known keys from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "min_price" => &mut query.min_price,
                "max_price" => &mut query.max_price,
                "tags" => &mut query.tags,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Echo of the filters that were applied. Absent filters are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub tags: Option<Vec<String>>,
}

impl From<&FilterSpec> for FiltersApplied {
    fn from(spec: &FilterSpec) -> Self {
        Self {
            category: spec.category.clone(),
            min_price: spec.min_price,
            max_price: spec.max_price,
            tags: (!spec.tags.is_empty()).then(|| spec.tags.clone()),
        }
    }
}

/// Filtered card listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
    pub total_count: usize,
    pub filters_applied: FiltersApplied,
    pub timestamp: String,
}

impl CardsResponse {
    pub fn new(cards: Vec<Card>, spec: &FilterSpec) -> Self {
        Self {
            total_count: cards.len(),
            cards,
            filters_applied: FiltersApplied::from(spec),
            timestamp: now_timestamp(),
        }
    }
}

/// A single card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub card: Card,
    pub timestamp: String,
}

/// Declared categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub total_count: usize,
    pub timestamp: String,
}

// =============================================================================
// DEBUG RESPONSES
// =============================================================================

/// `/api/debug/data` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugDataResponse {
    pub debug_info: DebugInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugInfo {
    pub data_structure: Map<String, Value>,
    pub app_config: Value,
    pub timestamp: String,
}

/// `/api/debug/logs` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugLogsResponse {
    pub debug_logs: DebugLogs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugLogs {
    pub recent_entries: Vec<String>,
    pub total_entries: usize,
    pub timestamp: String,
}
