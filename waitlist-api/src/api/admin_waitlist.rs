use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{ContactedUpdate, WaitlistEntry};
use crate::AppState;

const LIST_LIMIT: u32 = 500;

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<WaitlistEntry>>> {
    let entries = state.store.list_recent(LIST_LIMIT).await?;
    Ok(Json(entries))
}

pub async fn update_contacted(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ContactedUpdate>, JsonRejection>,
) -> Result<Json<WaitlistEntry>> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::BadRequest("Invalid id".to_string()))?;
    let Json(update) = payload.map_err(|_| AppError::BadRequest("Invalid body".to_string()))?;

    let contacted_at = update.contacted.then(Utc::now);
    let entry = state
        .store
        .set_contacted(id, contacted_at)
        .await?
        .ok_or_else(|| AppError::NotFound("Waitlist entry not found".to_string()))?;

    tracing::info!(id = %entry.id, contacted = update.contacted, "Waitlist entry updated");
    Ok(Json(entry))
}
