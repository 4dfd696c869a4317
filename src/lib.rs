//! Fare engine web service.
//!
//! Prices rideshare, courier and delivery requests in Trinidad and Tobago
//! and exposes the calculator over HTTP/JSON.

pub mod config;
pub mod error;
pub mod pricing;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer,
};

use error::AppError;
use pricing::FareService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fares: Arc<FareService>,
}

impl AppState {
    pub fn new(fares: FareService) -> Self {
        Self {
            fares: Arc::new(fares),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Turn a handler panic into a logged 500 instead of a dropped connection
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
