//! Entry CRUD handlers.
//!
//! These handlers use the repository trait object for storage access. The
//! cache-aside reads and write invalidation happen inside the cached
//! repository decorator, so nothing here knows a cache exists.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use entryd_core::entry::{Entry, EntryId, EntryPayload};
use entryd_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Response body for `DELETE /api/entries`.
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub message: &'static str,
    #[serde(rename = "affectedRows")]
    pub affected_rows: u64,
}

/// Parses the `{id}` path segment.
///
/// A segment that is not an integer cannot name a stored entry, so it is
/// reported as not found.
fn parse_entry_id(raw: &str) -> Result<EntryId, RepositoryError> {
    raw.parse().map_err(|_| RepositoryError::NotFound {
        entity_type: "Entry",
        id: raw.to_string(),
    })
}

/// List all entries (GET /api/entries).
#[axum::debug_handler]
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    let entries = state.entry_repo.list_entries().await?;
    Ok(Json(entries))
}

/// Get a single entry (GET /api/entries/{id}).
#[axum::debug_handler]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, AppError> {
    let id = parse_entry_id(&id)?;

    let entry = state
        .entry_repo
        .get_entry(id)
        .await?
        .ok_or_else(|| RepositoryError::entry_not_found(id))?;

    Ok(Json(entry))
}

/// Create a new entry (POST /api/entries).
#[axum::debug_handler]
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    let Json(payload) = payload?;
    let new_entry = payload.validate()?;

    let entry = state.entry_repo.create_entry(&new_entry).await?;

    tracing::info!(entry_id = entry.id, "Created entry");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Replace an entry's fields (PUT /api/entries/{id}).
#[axum::debug_handler]
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<Json<Entry>, AppError> {
    let id = parse_entry_id(&id)?;
    let Json(payload) = payload?;
    let new_entry = payload.validate()?;

    let entry = state.entry_repo.update_entry(id, &new_entry).await?;

    tracing::info!(entry_id = id, "Updated entry");
    Ok(Json(entry))
}

/// Delete an entry (DELETE /api/entries/{id}).
#[axum::debug_handler]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_entry_id(&id)?;

    state.entry_repo.delete_entry(id).await?;

    tracing::info!(entry_id = id, "Deleted entry");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every entry (DELETE /api/entries).
#[axum::debug_handler]
pub async fn delete_all_entries(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted = state.entry_repo.delete_all_entries().await?;

    Ok(Json(DeleteAllResponse {
        message: "All entries deleted",
        affected_rows: deleted,
    }))
}
