use crate::error::ApiError;
use crate::models::CreateEntryRequest;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub const CREATED_MESSAGE: &str = "Eintrag erfolgreich hinzugefügt";

/// POST /entry handler - Register a slug for a url
///
/// Neither the url nor the uniqueness of the slug is checked; a second entry
/// with an existing slug is appended behind the first one.
#[utoipa::path(
    post,
    path = routes::ENTRY,
    request_body = CreateEntryRequest,
    responses(
        (status = 200, description = "Entry appended", body = String, content_type = "text/plain"),
        (status = 500, description = "Store file could not be read or written", body = String, content_type = "text/plain")
    ),
    tag = "entries"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let entry = request.into_entry();
    let slug = entry.slug.clone();

    state.store.append(entry).await?;

    tracing::info!("Added entry with slug: {}", slug);
    Ok((StatusCode::OK, CREATED_MESSAGE))
}
