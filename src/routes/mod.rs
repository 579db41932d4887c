pub mod health;
pub mod maintenance;

use crate::flags::ConfigFlags;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub flags: Arc<ConfigFlags>,
}

impl AppState {
    pub fn new(flags: ConfigFlags) -> Self {
        Self {
            flags: Arc::new(flags),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .fallback(maintenance::maintenance_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
