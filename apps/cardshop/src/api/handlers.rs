//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers. Handlers only
//! read from the shared store; none of them mutate state.

use super::{
    AppState,
    error::ApiError,
    types::{
        CardResponse, CardsQuery, CardsResponse, CategoriesResponse, ContactResponse,
        ContentResponse, DebugDataResponse, DebugInfo, DebugLogs, DebugLogsResponse,
        HealthResponse, SectionResponse, now_timestamp,
    },
};
use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State, rejection::QueryRejection},
    http::{Method, Uri},
};
use cardshop_core::{CardId, FilterSpec, SITE_VERSION, Section};
use serde_json::json;
use std::collections::VecDeque;
use std::io::ErrorKind;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Number of log lines returned by `/api/debug/logs`.
pub const MAX_LOG_ENTRIES: usize = 50;

const NO_LOG_FILE: &str = "No log file found";

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::info!("Health check requested");
    let version = state.store.version().unwrap_or(SITE_VERSION);
    Json(HealthResponse::healthy(version, state.config.debug))
}

// =============================================================================
// CONTENT HANDLERS
// =============================================================================

/// All sections in one response.
pub async fn content_handler(
    State(state): State<AppState>,
) -> Result<Json<ContentResponse>, ApiError> {
    tracing::info!("All content requested");
    let sections = state.store.all_sections()?;
    Ok(Json(ContentResponse {
        sections,
        timestamp: now_timestamp(),
    }))
}

/// One section by name.
pub async fn section_handler(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<SectionResponse>, ApiError> {
    tracing::info!(section = %section, "Section content requested");
    let data = state.store.section_by_name(&section)?.clone();
    Ok(Json(SectionResponse {
        section,
        data,
        timestamp: now_timestamp(),
    }))
}

/// Contact section only.
pub async fn contact_handler(
    State(state): State<AppState>,
) -> Result<Json<ContactResponse>, ApiError> {
    tracing::info!("Contact information requested");
    let contact = state.store.section(Section::Contact)?.clone();
    Ok(Json(ContactResponse {
        contact,
        timestamp: now_timestamp(),
    }))
}

// =============================================================================
// CARD HANDLERS
// =============================================================================

/// Card listing with optional filters.
///
/// Price parameters are validated before any filtering happens.
pub async fn cards_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CardsResponse>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidParameter {
        name: "query".to_string(),
        value: rejection.body_text(),
    })?;
    let params = CardsQuery::from_pairs(pairs);

    let spec = FilterSpec::from_params(
        params.category.as_deref(),
        params.min_price.as_deref(),
        params.max_price.as_deref(),
        params.tags.as_deref(),
    )?;

    let cards = state.store.query(&spec);
    tracing::debug!(count = cards.len(), filters = ?spec, "Cards retrieved");
    Ok(Json(CardsResponse::new(cards, &spec)))
}

/// Single card by id.
///
/// A path segment that is not an unsigned integer does not match the route
/// and yields `NOT_FOUND`, not `CARD_NOT_FOUND`.
pub async fn card_handler(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(raw_id): Path<String>,
) -> Result<Json<CardResponse>, ApiError> {
    let id = parse_card_id(&raw_id).ok_or_else(|| ApiError::NotFound {
        url: requested_url(&uri),
    })?;
    tracing::info!(card_id = id.value(), "Card requested by ID");

    let card = state.store.card(id)?.clone();
    tracing::debug!(name = %card.name, "Card retrieved");
    Ok(Json(CardResponse {
        card,
        timestamp: now_timestamp(),
    }))
}

fn parse_card_id(raw: &str) -> Option<CardId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().map(CardId)
}

/// Declared category list.
pub async fn categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    tracing::info!("Categories requested");
    let categories = state.store.categories().to_vec();
    Json(CategoriesResponse {
        total_count: categories.len(),
        categories,
        timestamp: now_timestamp(),
    })
}

// =============================================================================
// DEBUG HANDLERS
// =============================================================================

fn ensure_debug(state: &AppState) -> Result<(), ApiError> {
    if state.config.debug {
        Ok(())
    } else {
        Err(ApiError::DebugDisabled)
    }
}

/// Full data structure and effective configuration.
pub async fn debug_data_handler(
    State(state): State<AppState>,
) -> Result<Json<DebugDataResponse>, ApiError> {
    ensure_debug(&state)?;
    tracing::info!("Debug data structure requested");

    let data_structure = state.store.all_sections()?;
    let app_config = json!({
        "debug": state.config.debug,
        "rate_limit": state.config.rate_limit,
        "cors_origins": state.config.cors.origins,
        "log_format": state.config.logging.format,
        "log_file": state.config.logging.file,
    });

    Ok(Json(DebugDataResponse {
        debug_info: DebugInfo {
            data_structure,
            app_config,
            timestamp: now_timestamp(),
        },
    }))
}

/// Tail of the log file.
pub async fn debug_logs_handler(
    State(state): State<AppState>,
) -> Result<Json<DebugLogsResponse>, ApiError> {
    ensure_debug(&state)?;
    tracing::info!("Debug logs requested");

    let recent_entries = match &state.config.logging.file {
        Some(path) => read_log_tail(path, MAX_LOG_ENTRIES).await?,
        None => vec![NO_LOG_FILE.to_string()],
    };

    Ok(Json(DebugLogsResponse {
        debug_logs: DebugLogs {
            total_entries: recent_entries.len(),
            recent_entries,
            timestamp: now_timestamp(),
        },
    }))
}

async fn read_log_tail(path: &std::path::Path, limit: usize) -> Result<Vec<String>, ApiError> {
    let read_error =
        |e: std::io::Error| ApiError::Internal(format!("Cannot read log file {:?}: {}", path, e));

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![NO_LOG_FILE.to_string()]),
        Err(e) => return Err(read_error(e)),
    };

    // Only the last `limit` lines are kept in memory.
    let mut reader = BufReader::new(file);
    let mut tail = VecDeque::with_capacity(limit.saturating_add(1));
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await.map_err(read_error)? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        tail.push_back(String::from_utf8_lossy(line).into_owned());
        if tail.len() > limit {
            tail.pop_front();
        }
    }

    Ok(tail.into())
}

// =============================================================================
// FALLBACKS
// =============================================================================

/// Unmatched route.
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound {
        url: requested_url(&uri),
    }
}

/// Known route, wrong method.
pub async fn method_not_allowed_handler(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        url: requested_url(&uri),
    }
}

/// Path and query of the request, whatever form the request target took.
fn requested_url(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn card_id_must_be_plain_digits() {
        assert_eq!(parse_card_id("1"), Some(CardId(1)));
        assert_eq!(parse_card_id("0"), Some(CardId(0)));
        assert_eq!(parse_card_id("+1"), None);
        assert_eq!(parse_card_id("-1"), None);
        assert_eq!(parse_card_id("abc"), None);
        assert_eq!(parse_card_id(""), None);
        assert_eq!(parse_card_id("99999999999999999999999"), None);
    }

    #[test]
    fn requested_url_ignores_request_target_form() {
        let absolute: Uri = "http://localhost/api/cards/abc?x=1".parse().expect("uri");
        let origin: Uri = "/api/cards/abc?x=1".parse().expect("uri");
        assert_eq!(requested_url(&absolute), "/api/cards/abc?x=1");
        assert_eq!(requested_url(&origin), "/api/cards/abc?x=1");
    }

    #[tokio::test]
    async fn log_tail_keeps_last_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        for i in 0..10 {
            write!(file, "line {}\r\n", i).expect("write");
        }
        write!(file, "last").expect("write");
        file.flush().expect("flush");

        let tail = read_log_tail(file.path(), 3).await.expect("tail");
        assert_eq!(tail, vec!["line 8", "line 9", "last"]);
    }

    #[tokio::test]
    async fn log_tail_tolerates_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"ok\n\xff\xfebad\n").expect("write");
        file.flush().expect("flush");

        let tail = read_log_tail(file.path(), MAX_LOG_ENTRIES).await.expect("tail");
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0], "ok");
        assert!(tail[1].ends_with("bad"));
    }

    #[tokio::test]
    async fn log_tail_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tail = read_log_tail(&dir.path().join("absent.log"), MAX_LOG_ENTRIES)
            .await
            .expect("tail");
        assert_eq!(tail, vec![NO_LOG_FILE]);
    }
}
