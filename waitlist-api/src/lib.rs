//! Waitlist signup service with a token-gated admin surface.
//!
//! Public: `POST /api/waitlist`. Admin: `POST /api/admin/login`, then
//! `GET /api/admin/waitlist` and `PATCH /api/admin/waitlist/{id}` with
//! `Authorization: Bearer <token>`.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::WaitlistStore;
use crate::services::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WaitlistStore>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<dyn WaitlistStore>, auth: AuthService) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api::routes(state.clone()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
