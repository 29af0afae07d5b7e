//! Axum router assembly.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::auth::require_bearer;
use crate::handlers::{
    create_handler, delete_handler, entry_slug_redirect_handler, list_handler, redirect_handler,
    root_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/entries` wins over the `/{slug}` catch-all, so `entries` can never be
/// followed as a redirect slug. GET on `/entry` is routed to the slug lookup,
/// and the documentation lives below `/api-docs/`, out of the slug namespace.
pub fn build(state: AppState) -> Router {
    let protected = Router::new()
        .route(routes::ENTRIES, get(list_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(
            routes::ENTRY,
            post(create_handler).get(entry_slug_redirect_handler),
        )
        .route(routes::ENTRY_ITEM, delete(delete_handler))
        .route(routes::REDIRECT, get(redirect_handler))
        .merge(protected)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
