// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const ENTRIES: &str = "/entries";
pub const ENTRY: &str = "/entry";
pub const ENTRY_ITEM: &str = "/entry/{slug}";
pub const REDIRECT: &str = "/{slug}";
pub const SWAGGER_UI: &str = "/api-docs/ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
