use crate::routes;

pub const GREETING: &str = "Hallo Welt!";

/// GET / handler - Static greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "misc"
)]
pub async fn root_handler() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_text, TestApp};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_root_greeting() {
        let app = TestApp::new();

        let response = app.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, GREETING);
    }

    #[tokio::test]
    async fn test_root_ignores_store_state() {
        let app = TestApp::new();
        std::fs::write(app.store.path(), "garbage").unwrap();

        let response = app.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, GREETING);
    }
}
