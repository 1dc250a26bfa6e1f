pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career catalog
        .route("/career-recommendation", post(catalog::handle_recommendation))
        .route("/career-to-languages", get(catalog::handle_languages_for_career))
        .route("/career-details", get(catalog::handle_career_details))
        .route("/all-career-paths", get(catalog::handle_all_careers))
        // Assistant (LLM relay)
        .route("/gemini-chat", post(assistant::handle_chat))
        .route(
            "/ai-tools/resume-analyzer",
            post(assistant::handle_resume_analyzer),
        )
        .route(
            "/ai-tools/learning-path-generator",
            post(assistant::handle_learning_path),
        )
        .route(
            "/ai-tools/resume-upload",
            post(assistant::handle_resume_upload),
        )
        .route("/generate-learning-plan", post(assistant::handle_learning_plan))
        .route("/analyze-resume", post(assistant::handle_analyze_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::state::test_support::state_with_csv;

    #[tokio::test]
    async fn test_health_reports_record_count() {
        let state = state_with_csv("Programming Language,Career Path\nRust,Systems Engineer\nGo,SRE\n");
        let response = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["records"], 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let state = state_with_csv("Programming Language,Career Path\n");
        let response = build_router(state)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
