use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::donor::Donor;
use crate::core::recipient::Recipient;
use crate::matching::engine::evaluate_batch;
use crate::report::{MatchReport, TimestampIdSource};
use crate::utils::validation::{validate_donors, ValidationError};

/// Request body cap. A full batch of 10k donor records stays well under this.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024; // 8MB

/// Maximum in-flight requests before new connections queue.
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// One matching run: a recipient and the candidate donors to evaluate.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub recipient: Recipient,
    pub donors: Vec<Donor>,
}

/// Error body returned on 4xx responses.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
#[must_use]
pub fn create_router() -> Router {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    Router::new()
        .route("/api/match", post(match_handler))
        .route("/api/health", get(health_handler))
        .layer(
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
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                // Limit request body size
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router();

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting kidney-match web server at http://{addr}");

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

/// Liveness probe
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Run a matching request through boundary validation and the engine.
fn process_match(request: MatchRequest) -> Result<MatchReport, ValidationError> {
    validate_donors(&request.donors)?;
    let results = evaluate_batch(&request.recipient, &request.donors)?;

    let mut id_source = TimestampIdSource;
    Ok(MatchReport::build(
        request.recipient,
        results,
        &mut id_source,
        Utc::now(),
    ))
}

/// API endpoint for matching a recipient against candidate donors
async fn match_handler(payload: Result<Json<MatchRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let body = create_safe_error_response(
                "invalid_request",
                "Request body is not a valid match request",
                Some(&rejection.to_string()),
            );
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    tracing::debug!(
        "match request: recipient {} vs {} donors",
        request.recipient.id,
        request.donors.len()
    );

    match process_match(request) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            // Validation failures are caller errors, surfaced verbatim
            let body = ErrorResponse {
                error: err.to_string(),
                error_type: "validation_error".to_string(),
                details: None,
            };
            (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
        }
    }
}
