pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_export;
use crate::preview::handlers::{handle_list_templates, handle_preview};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handle_list_templates))
        .route("/api/v1/preview", post(handle_preview))
        .route("/api/v1/export", post(handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::export::rasterizer::Snapshot;
    use crate::export::{ExportError, Rasterizer, VectorRasterizer};
    use crate::layout::measure::DocumentLayout;
    use crate::layout::PageGeometry;

    struct BrokenRasterizer;

    #[async_trait]
    impl Rasterizer for BrokenRasterizer {
        async fn rasterize(
            &self,
            _layout: DocumentLayout,
            _page: PageGeometry,
            _scale: f32,
        ) -> Result<Snapshot, ExportError> {
            Err(ExportError::Rasterize("out of memory".to_string()))
        }
    }

    fn app_with(rasterizer: Arc<dyn Rasterizer>) -> Router {
        build_router(AppState {
            config: Config::default(),
            rasterizer,
            page: PageGeometry::a4(),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(VectorRasterizer))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v1/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["modern", "classic", "professional"]);
    }

    #[tokio::test]
    async fn test_preview_with_upstream_data() {
        let body = json!({
            "personal_details": { "name": "Jane Doe", "email": "jane@example.com" },
            "resume_data": { "skills": ["Rust"] }
        });
        let response = app()
            .oneshot(post_json("/api/v1/preview?template=classic", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let preview = body_json(response).await;
        assert_eq!(preview["template"], "classic");
        assert_eq!(preview["page_count"], 1);
        assert_eq!(preview["current_page"], 1);
        assert_eq!(preview["document"]["personal_info"]["name"], "Jane Doe");
        assert_eq!(preview["document"]["skills"], json!(["Rust"]));
        assert!(preview["html"].as_str().unwrap().contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_preview_malformed_data_uses_placeholders() {
        let body = json!({ "personal_details": "garbage", "resume_data": [1, 2, 3] });
        let response = app()
            .oneshot(post_json("/api/v1/preview?template=nonexistent&page=7", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let preview = body_json(response).await;
        assert_eq!(preview["template"], "modern");
        assert_eq!(preview["current_page"], 1);
        assert_eq!(preview["document"]["personal_info"]["name"], "Your Name");
    }

    #[tokio::test]
    async fn test_export_returns_pdf_download() {
        let body = json!({ "personal_details": { "name": "Jane Doe" } });
        let response = app().oneshot(post_json("/api/v1/export", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        assert_eq!(response.headers()["x-page-count"], "1");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_preview_predicts_export_page_count() {
        let experience: Vec<Value> = (0..14)
            .map(|i| {
                json!({
                    "title": format!("Engineer {i}"),
                    "company": "Acme",
                    "duration": "2016 - 2019",
                    "description": [
                        "Rebuilt the billing pipeline and reduced invoice errors across every region we served",
                        "Mentored four engineers through their first on-call rotations and design reviews",
                        "Introduced contract tests between services and cut integration failures in half"
                    ]
                })
            })
            .collect();
        let body = json!({ "resume_data": { "experience": experience } });

        let preview = body_json(
            app()
                .oneshot(post_json("/api/v1/preview", body.clone()))
                .await
                .unwrap(),
        )
        .await;
        let export = app().oneshot(post_json("/api/v1/export", body)).await.unwrap();
        assert_eq!(export.status(), StatusCode::OK);

        let exported_pages: u64 = export.headers()["x-page-count"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(exported_pages > 1);
        assert_eq!(preview["export_page_count"], exported_pages);
    }

    #[tokio::test]
    async fn test_export_failure_is_reported_as_json() {
        let response = app_with(Arc::new(BrokenRasterizer))
            .oneshot(post_json("/api/v1/export", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "EXPORT_FAILED");
    }
}
