use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{debug, info};

use crate::catalog::store::TextCatalog;
use crate::cli::{load_catalog, ServeArgs};
use crate::core::types::MatchLevel;
use crate::markov::ChainModel;
use crate::matching::engine::TextMatcher;
use crate::matching::scoring::{rank_matches, MatchingConfig};
use crate::utils::validation::{check_text_size, MAX_TEXT_BYTES};

/// Request bodies carry at most two texts plus JSON overhead
pub const MAX_BODY_SIZE: usize = 2 * MAX_TEXT_BYTES + 64 * 1024;

/// Helper function to convert u128 milliseconds to u64 for JSON
#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// One catalog entry as listed by `GET /api/catalog`
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub tokens: usize,
    pub description: Option<String>,
}

/// Shared application state
pub struct AppState {
    pub entries: Vec<CatalogEntry>,
    pub matcher: TextMatcher,
}

impl AppState {
    /// Build the state for a catalog, registering every reference once
    #[must_use]
    pub fn new(catalog: &TextCatalog) -> Self {
        let entries = catalog
            .references
            .iter()
            .map(|r| CatalogEntry {
                name: r.name.clone(),
                tokens: r.chain().len(),
                description: r.description.clone(),
            })
            .collect();

        Self {
            entries,
            matcher: catalog.matcher(),
        }
    }
}

/// Enhanced error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub text: String,
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub reference: String,
    pub query: String,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

fn error_response(status: StatusCode, error_type: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            error_type: error_type.to_string(),
            details: None,
        }),
    )
        .into_response()
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    (
        rejection.status(),
        Json(create_safe_error_response(
            "invalid_request",
            "Request body must be valid JSON",
            Some(rejection.body_text().as_str()),
        )),
    )
        .into_response()
}

/// Reject texts the matcher should never see
#[allow(clippy::result_large_err)]
fn validate_text(field: &str, text: &str) -> Result<(), Response> {
    if check_text_size(text.len()).is_err() {
        return Err(error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "text_too_large",
            &format!("Field '{field}' exceeds the {MAX_TEXT_BYTES} byte limit"),
        ));
    }
    if text.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "empty_text",
            &format!("Field '{field}' must not be empty"),
        ));
    }
    Ok(())
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes and handlers only, without the network-facing middleware.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/match", post(match_handler))
        .route("/api/compare", post(compare_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(catalog: &TextCatalog) -> anyhow::Result<Router> {
    let state = Arc::new(AppState::new(catalog));

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    let app = api_router(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("strict-transport-security"),
                HeaderValue::from_static("max-age=31536000; includeSubDomains"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            // IP-based rate limiting to prevent abuse
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            // Limit concurrent requests to prevent DOS
            .layer(ConcurrencyLimitLayer::new(100)),
    );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_ref(), args.catalog_dir.as_ref())?;
    info!("Serving {} references", catalog.len());
    let app = create_router(&catalog)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting markov-match web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.entries.len(),
        "references": state.entries,
    }))
}

async fn match_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Response {
    let start_time = Instant::now();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&rejection),
    };

    if let Err(response) = validate_text("text", &request.text) {
        return response;
    }

    let mut config = MatchingConfig::default();
    if let Some(min_score) = request.min_score {
        if !(0.0..=1.0).contains(&min_score) {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_min_score",
                "min_score must be between 0.0 and 1.0",
            );
        }
        config = config.with_min_score(min_score);
    }
    if let Some(limit) = request.limit {
        config = config.with_limit(limit);
    }

    let query_chain = ChainModel::from_text(&request.text);
    let query_tokens = query_chain.len();
    let matches = rank_matches(state.matcher.match_chain(&query_chain), &config);

    let results: Vec<serde_json::Value> = matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "name": m.name,
                "confidence": m.confidence,
                "level": m.level(),
            })
        })
        .collect();

    let processing_time = elapsed_ms(start_time);
    debug!(
        "Matched {} query tokens in {}ms ({} results)",
        query_tokens,
        processing_time,
        results.len()
    );

    Json(serde_json::json!({
        "matches": results,
        "query_tokens": query_tokens,
        "elapsed_ms": processing_time,
    }))
    .into_response()
}

async fn compare_handler(payload: Result<Json<CompareRequest>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&rejection),
    };

    for (field, text) in [("reference", &request.reference), ("query", &request.query)] {
        if let Err(response) = validate_text(field, text) {
            return response;
        }
    }

    let score =
        ChainModel::from_text(&request.reference).compare(&ChainModel::from_text(&request.query));

    Json(serde_json::json!({
        "score": score,
        "level": MatchLevel::from_score(score),
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::ReferenceText;

    #[test]
    fn test_app_state_entries_follow_catalog_order() {
        let mut catalog = TextCatalog::new();
        catalog
            .add_reference(ReferenceText::new("b", "one two three").with_description("second"))
            .unwrap();
        catalog.add_reference(ReferenceText::new("a", "four")).unwrap();

        let state = AppState::new(&catalog);
        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(state.entries[0].tokens, 3);
        assert_eq!(state.entries[0].description.as_deref(), Some("second"));
        assert_eq!(state.matcher.len(), 2);
    }

    #[test]
    fn test_create_router_with_embedded_catalog() {
        let catalog = TextCatalog::load_embedded().unwrap();
        assert!(create_router(&catalog).is_ok());
    }

    #[test]
    fn test_safe_error_response_hides_details() {
        let response = create_safe_error_response("x", "Something failed", Some("secret path"));
        assert_eq!(response.error, "Something failed");
        assert!(response.details.is_none());
    }
}
