pub mod builder;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render;
use crate::state::AppState;
use crate::summary::handlers as summary;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API
        .route("/api/v1/resumes/render", post(render::handle_render))
        .route(
            "/api/v1/resumes/render/preview",
            post(render::handle_render_preview),
        )
        // Summary API
        .route("/api/v1/summaries", post(summary::handle_summarize))
        // Front-end wizard
        .route("/api/resume-builder", post(builder::handle_resume_builder))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::tests::test_config;
    use crate::render::handlers::WARNINGS_HEADER;
    use crate::summary::tests::StubSummarizer;
    use crate::summary::{ExtractiveSummarizer, Summarizer};

    fn app(summarizer: Arc<dyn Summarizer>) -> Router {
        build_router(AppState {
            config: test_config(),
            summarizer,
        })
    }

    fn stub_app(output: &str) -> Router {
        app(Arc::new(StubSummarizer::returning(output)))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = stub_app("unused")
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_render_returns_html_with_warning_count() {
        let response = post_json(
            stub_app("unused"),
            "/api/v1/resumes/render",
            json!({"name": "Ada", "experiences": [{"job_title": "Engineer"}, "bogus"]}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(response.headers()[WARNINGS_HEADER], "1");

        let html = body_text(response).await;
        assert!(html.contains("<h1>Ada</h1>"));
        assert_eq!(html.matches("<div class=\"experience\">").count(), 1);
    }

    #[tokio::test]
    async fn test_render_non_object_payload_still_renders() {
        let response = post_json(stub_app("unused"), "/api/v1/resumes/render", json!(42)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h2>Hobbies and Interests</h2>"));
    }

    #[tokio::test]
    async fn test_render_preview_lists_warnings() {
        let response = post_json(
            stub_app("unused"),
            "/api/v1/resumes/render/preview",
            json!({"skills": "Rust"}),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["warnings"][0]["field"], "skills");
        assert!(body["html"].as_str().unwrap().contains("<h2>Skills</h2>"));
    }

    #[tokio::test]
    async fn test_summaries_endpoint() {
        let response = post_json(
            stub_app("<pad> backend engineer at Acme. scaled the API</s>"),
            "/api/v1/summaries",
            json!({"work_experience_text": "Backend engineer at Acme. Scaled the API."}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["summary"],
            "I worked as backend engineer at Acme. \nscaled the API"
        );
        assert_eq!(body["backend"], "stub");
    }

    #[tokio::test]
    async fn test_summaries_from_resume_data() {
        let stub = Arc::new(StubSummarizer::returning("engineer"));
        let response = post_json(
            app(stub.clone()),
            "/api/v1/summaries",
            json!({"resume_data": {"experiences": [
                {"job_title": "Engineer", "company": "Acme", "achievements": ["Led team"]}
            ]}}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            stub.seen.lock().unwrap()[0],
            "Engineer at Acme: Led team"
        );
    }

    #[tokio::test]
    async fn test_summaries_blank_input_is_bad_request() {
        let response = post_json(
            stub_app("unused"),
            "/api/v1/summaries",
            json!({"work_experience_text": "   "}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = post_json(stub_app("unused"), "/api/v1/summaries", json!({})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summaries_backend_failure_is_bad_gateway() {
        let response = post_json(
            app(Arc::new(StubSummarizer::failing("model unavailable"))),
            "/api/v1/summaries",
            json!({"work_experience_text": "Engineer at Acme."}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "SUMMARIZER_ERROR");
    }

    #[tokio::test]
    async fn test_builder_summary_step() {
        let response = post_json(
            app(Arc::new(ExtractiveSummarizer)),
            "/api/resume-builder",
            json!({
                "step": "summary",
                "work_experience_text": "Engineer at Acme: Led team, Shipped feature"
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.starts_with("I worked as "));
        assert!(summary.contains("Engineer at Acme"));
    }

    #[tokio::test]
    async fn test_builder_generate_html_step() {
        let response = post_json(
            stub_app("unused"),
            "/api/resume-builder",
            json!({"step": "generate-html", "resume_data": {"skills": ["Python", "Go"]}}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["html"].as_str().unwrap().contains("<p>Python, Go</p>"));
    }

    #[tokio::test]
    async fn test_builder_unknown_step_rejected() {
        let response = post_json(
            stub_app("unused"),
            "/api/resume-builder",
            json!({"step": "publish"}),
        )
        .await;
        assert!(response.status().is_client_error());
    }
}
