use crate::error::ApiError;
use crate::models::Entry;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

/// GET /entries handler - Dump the store file
///
/// Requires `Authorization: Bearer <token>`. The body is the file exactly as
/// last written, without parsing; a store that was never written lists as `[]`.
#[utoipa::path(
    get,
    path = routes::ENTRIES,
    responses(
        (status = 200, description = "All entries in insertion order", body = Vec<Entry>),
        (status = 403, description = "Missing or invalid bearer token", body = String, content_type = "text/plain"),
        (status = 500, description = "Store file could not be read", body = String, content_type = "text/plain")
    ),
    security(("bearer" = [])),
    tag = "entries"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let data = state.store.read_raw().await?;

    tracing::info!("Listed store file ({} bytes)", data.len());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        data,
    ))
}
