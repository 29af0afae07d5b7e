use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

pub const DELETED_MESSAGE: &str = "Eintrag erfolgreich entfernt";

/// DELETE /entry/{slug} handler - Remove the first entry with this slug
#[utoipa::path(
    delete,
    path = routes::ENTRY_ITEM,
    params(
        ("slug" = String, Path, description = "Slug of the entry to remove")
    ),
    responses(
        (status = 200, description = "Entry removed", body = String, content_type = "text/plain"),
        (status = 404, description = "No entry with this slug", body = String, content_type = "text/plain"),
        (status = 500, description = "Store file could not be read or written", body = String, content_type = "text/plain")
    ),
    tag = "entries"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if !state.store.remove(&slug).await? {
        return Err(ApiError::EntryNotFound(slug));
    }

    tracing::info!("Removed entry with slug: {}", slug);
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
