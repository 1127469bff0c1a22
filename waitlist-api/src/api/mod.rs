mod admin_waitlist;
mod auth;
mod waitlist;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::middleware::require_admin;
use crate::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/waitlist", get(admin_waitlist::list_entries))
        .route("/waitlist/:id", patch(admin_waitlist::update_contacted))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    let admin = Router::new()
        .route("/login", post(auth::login))
        .merge(protected);

    Router::new()
        .route("/waitlist", post(waitlist::signup))
        .nest("/admin", admin)
}
