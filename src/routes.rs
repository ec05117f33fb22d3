//! HTTP routes, DTOs and handlers.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Deserializer, Serialize};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::fibonacci::{self, FibonacciError};
use crate::sort::{self, DEMO_NUMBERS};
use crate::stats::Stats;

/// Index used by the fixed `GET /fibonacci` demo.
pub const DEMO_FIBONACCI_INDEX: i64 = 10;

/// Upper bound for the `/sum` demo.
pub const DEMO_SUM_LIMIT: u64 = 100;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SortResponse {
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
}

/// Body of `POST /fibonacci`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FibonacciRequest {
    pub n: i64,
}

#[derive(Debug, Deserialize)]
struct FibonacciQuery {
    #[serde(default, deserialize_with = "blank_as_zero")]
    n: i64,
}

/// `?n=` and `?n` count as absent.
fn blank_as_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse().map_err(serde::de::Error::custom),
    }
}

/// Wire form of a Fibonacci outcome.
///
/// `result` is `null` on failure; `error` is omitted on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct FibonacciResponse {
    pub n: i64,
    pub result: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FibonacciResponse {
    fn new(n: i64, outcome: &std::result::Result<i64, FibonacciError>) -> Self {
        match outcome {
            Ok(value) => Self {
                n,
                result: Some(*value),
                error: None,
            },
            Err(e) => Self {
                n,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Builds the application router.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if an allowed origin is not a valid header value.
pub fn router(config: &ServerConfig) -> Result<Router> {
    let mut router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route("/sum", get(sum))
        .route("/bubblesort", get(bubble_sort_demo))
        .route("/greet/{name}", get(greet))
        .route("/fibonacci", get(fibonacci_demo).post(fibonacci_body))
        .route("/fibonacci/{n}", get(fibonacci_path))
        .route("/fibonacci-param", get(fibonacci_param))
        .route("/calculate-stats", post(calculate_stats))
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(cors_layer(&config.allowed_origins)?);
    }

    Ok(router)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| Error::invalid_config(format!("invalid CORS origin {origin:?}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorResponse {
        error: message.into(),
    });
    (status, body).into_response()
}

fn fibonacci_reply(n: i64) -> (StatusCode, Json<FibonacciResponse>) {
    let outcome = fibonacci::compute(n);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::debug!(n, error = %e, "Fibonacci request rejected");
            StatusCode::BAD_REQUEST
        },
    };
    (status, Json(FibonacciResponse::new(n, &outcome)))
}

// === Plain text ===

async fn home() -> &'static str {
    "This is the home page."
}

async fn health() -> &'static str {
    "OK"
}

async fn hello() -> &'static str {
    "Hello, World!"
}

async fn sum() -> String {
    format!(
        "Sum of 1 to {} is: {}",
        DEMO_SUM_LIMIT,
        sort::sum_to(DEMO_SUM_LIMIT)
    )
}

// === JSON demos ===

async fn bubble_sort_demo() -> Json<SortResponse> {
    let mut sorted = DEMO_NUMBERS;
    sort::bubble_sort(&mut sorted);
    Json(SortResponse {
        original: DEMO_NUMBERS.to_vec(),
        sorted: sorted.to_vec(),
    })
}

async fn greet(Path(name): Path<String>) -> Response {
    if name.trim().is_empty() || name == "{name}" {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Name in path cannot be empty or placeholder.",
        );
    }
    Json(MessageResponse {
        message: format!("Hello, {name}! Welcome."),
    })
    .into_response()
}

// === Fibonacci ===

async fn fibonacci_demo() -> (StatusCode, Json<FibonacciResponse>) {
    fibonacci_reply(DEMO_FIBONACCI_INDEX)
}

async fn fibonacci_path(Path(n): Path<i64>) -> (StatusCode, Json<FibonacciResponse>) {
    fibonacci_reply(n)
}

async fn fibonacci_param(
    Query(query): Query<FibonacciQuery>,
) -> (StatusCode, Json<FibonacciResponse>) {
    fibonacci_reply(query.n)
}

async fn fibonacci_body(
    body: std::result::Result<Json<FibonacciRequest>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(req)) => fibonacci_reply(req.n).into_response(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed Fibonacci body");
            error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "Request body must be a JSON object with an integer 'n': {}",
                    rejection.body_text()
                ),
            )
        },
    }
}

// === Statistics ===

async fn calculate_stats(body: Bytes) -> Response {
    let values: Option<Vec<f64>> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice(&body) {
            Ok(values) => values,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed statistics body");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Request body must be a JSON array of numbers: {e}"),
                );
            },
        }
    };

    match Stats::from_values(values.as_deref().unwrap_or(&[])) {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "Statistics request rejected");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        },
    }
}
