pub mod error;
pub mod handlers;

use crate::service::IntervalService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<IntervalService>,
}

/// Build application router
pub fn create_app(service: Arc<IntervalService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/producers/intervals", get(handlers::producer_intervals))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}
