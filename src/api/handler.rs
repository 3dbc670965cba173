//! HTTP routes for the summarizer service.
//!
//! This module handles:
//! - Liveness (`GET /`)
//! - Summarization (`POST /api/summarize`), including request validation
//! - Router layers: CORS, request tracing, panic recovery

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use crate::core::models::{HealthStatus, SummarizationRequest};
use crate::features::Summarizer;

pub const HEALTH_PATH: &str = "/";
pub const SUMMARIZE_PATH: &str = "/api/summarize";

/// Method/path pairs served by [`router`], logged at startup.
pub const ROUTES: &[(&str, &str)] = &[("GET", HEALTH_PATH), ("POST", SUMMARIZE_PATH)];

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    #[must_use]
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(SUMMARIZE_PATH, post(summarize))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin is accepted. The origin is mirrored rather than `*` because
/// credentials are allowed.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub async fn health() -> Json<HealthStatus> {
    Json(helpers::health())
}

#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizationRequest>, JsonRejection>,
) -> Response {
    info!("Received summarization request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected summarization request: {}", rejection.body_text());
            return helpers::invalid_request();
        }
    };

    if request.text.trim().is_empty() {
        warn!("Rejected summarization request: empty text");
        return helpers::invalid_request();
    }

    match state.summarizer.summarize(&request.text).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("Summarization error: {}", e);
            helpers::processing_failed()
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    helpers::processing_failed()
}
