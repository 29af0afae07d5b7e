use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models::{CreateEntryRequest, Entry};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "slugstash API",
        version = "1.0.0",
        description = "A slug to url redirect service backed by a flat JSON file"
    ),
    paths(
        handlers::root::root_handler,
        handlers::list::list_handler,
        handlers::redirect::redirect_handler,
        handlers::create::create_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Entry,
            CreateEntryRequest
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "entries", description = "Slug registration and redirects"),
        (name = "misc", description = "Miscellaneous endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme used by GET /entries
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
