use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::SignupRequest;
use crate::AppState;

/// Public signup form submission.
pub async fn signup(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let entry = payload.into_new_entry().map_err(AppError::BadRequest)?;

    let stored = state.store.insert(entry).await?;
    tracing::info!(id = %stored.id, role = %stored.role, "Waitlist signup stored");

    Ok(Json(json!({ "ok": true })))
}
