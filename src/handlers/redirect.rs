use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped in a Location header besides `%` and non-ASCII
const LOCATION_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a stored url for use as a Location header
///
/// Existing `%XX` escapes are kept; a `%` not followed by two hex digits
/// becomes `%25`.
fn encode_location(url: &str) -> String {
    let mut parts = url.split('%');
    let mut encoded = String::with_capacity(url.len());

    if let Some(first) = parts.next() {
        encoded.extend(utf8_percent_encode(first, LOCATION_ESCAPES));
    }
    for part in parts {
        let bytes = part.as_bytes();
        let is_escape =
            bytes.len() >= 2 && bytes[0].is_ascii_hexdigit() && bytes[1].is_ascii_hexdigit();
        encoded.push_str(if is_escape { "%" } else { "%25" });
        encoded.extend(utf8_percent_encode(part, LOCATION_ESCAPES));
    }

    encoded
}

async fn redirect_to(state: &AppState, slug: String) -> Result<Response, ApiError> {
    let Some(entry) = state.store.find(&slug).await? else {
        return Err(ApiError::EntryNotFound(slug));
    };

    // entries created without a url have nowhere to go
    let Some(url) = entry.url else {
        return Err(ApiError::InvalidTarget(slug));
    };

    let location = HeaderValue::try_from(encode_location(&url))
        .map_err(|_| ApiError::InvalidTarget(slug.clone()))?;

    tracing::info!("Redirecting {} to {}", slug, url);
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// GET /{slug} handler - Redirect to the url registered for a slug
///
/// Uses the first entry whose slug matches exactly and answers with
/// 301 Moved Permanently.
#[utoipa::path(
    get,
    path = routes::REDIRECT,
    params(
        ("slug" = String, Path, description = "Slug of the entry to follow")
    ),
    responses(
        (status = 301, description = "Redirect to the stored url, percent-encoded"),
        (status = 404, description = "No entry with this slug", body = String, content_type = "text/plain"),
        (status = 500, description = "Store file could not be read, or the entry has no url", body = String, content_type = "text/plain")
    ),
    tag = "entries"
)]
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    redirect_to(&state, slug).await
}

/// GET /entry handler - Same lookup for the slug `entry`
///
/// `/entry` is registered for POST, so GET requests on it never reach the
/// `/{slug}` route.
pub async fn entry_slug_redirect_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let slug = routes::ENTRY.trim_start_matches('/').to_string();
    redirect_to(&state, slug).await
}
