pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::resume::extract::MAX_UPLOAD_BYTES;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the file itself.
const UPLOAD_SLACK_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes",
            post(resume::handle_upload_resume)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + UPLOAD_SLACK_BYTES)),
        )
        .route("/api/v1/resumes/analyze", post(resume::handle_analyze_resume))
        .route("/api/v1/candidates/:id", get(resume::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/interviews",
            get(interview::handle_candidate_interviews),
        )
        .route(
            "/api/v1/candidates/:id/analytics",
            get(interview::handle_candidate_analytics),
        )
        // Interview API
        .route("/api/v1/roles", get(interview::handle_list_roles))
        .route("/api/v1/questions", post(interview::handle_generate_questions))
        .route("/api/v1/interviews", post(interview::handle_start_interview))
        .route(
            "/api/v1/interviews/:id",
            get(interview::handle_get_interview).delete(interview::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/complete",
            post(interview::handle_complete_interview),
        )
        .route("/api/v1/evaluate", post(interview::handle_evaluate))
        // Jobs API
        .route("/api/v1/jobs/search", post(jobs::handle_search_jobs))
        .route(
            "/api/v1/jobs/recommendations",
            post(jobs::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::interview::provider::FallbackQuestionProvider;
    use crate::jobs::matching::KeywordJobMatcher;
    use crate::jobs::search::JobSearchClient;
    use crate::store::MemoryStore;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemoryStore::default()),
            question_provider: Arc::new(FallbackQuestionProvider::new(None)),
            job_matcher: Arc::new(KeywordJobMatcher),
            job_search: None,
            archive: None,
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                redis_url: None,
                session_ttl_secs: 60,
                job_search_url: "http://127.0.0.1:9/".to_string(),
                job_search_api_key: None,
                question_service_url: None,
                anthropic_api_key: None,
                s3: None,
                http_timeout_secs: 1,
            },
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn multipart_request(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let boundary = "intervue-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_fallbacks() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "intervue-api");
        assert_eq!(body["integrations"]["store"], "memory");
        assert_eq!(body["integrations"]["question_service"], "static-bank");
        assert_eq!(body["integrations"]["job_search"], "fallback");
    }

    #[tokio::test]
    async fn test_analyze_then_fetch_candidate() {
        let app = build_router(test_state());
        let (status, profile) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/analyze",
            Some(json!({"text": "5 years of experience in JavaScript, React, AWS. email: a@b.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["experience_years"], 5.0);
        assert_eq!(profile["contact"]["email"], "a@b.com");
        assert!(profile["ats_score"].as_u64().unwrap() > 20);

        let id = profile["candidate_id"].as_str().unwrap();
        let (status, fetched) =
            send(&app, Method::GET, &format!("/api/v1/candidates/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["candidate_id"], id);
    }

    #[tokio::test]
    async fn test_unknown_candidate_is_404() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/candidates/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let app = build_router(test_state());
        let request = multipart_request(
            "cv.txt",
            "text/plain",
            b"Led a team of 4 engineers. 3+ years of experience with Python and Docker.",
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let profile: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(profile["experience_years"], 3.0);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_still_builds_profile() {
        let app = build_router(test_state());
        let request = multipart_request("cv.pdf", "application/pdf", b"definitely not a pdf");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let profile: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(profile["experience_years"], 0.0);
        assert_eq!(profile["domain"], "General");
    }

    #[tokio::test]
    async fn test_unsupported_upload_rejected() {
        let app = build_router(test_state());
        let request = multipart_request("cv.png", "image/png", b"\x89PNG");
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_interview_flow() {
        let app = build_router(test_state());
        let (status, session) = send(
            &app,
            Method::POST,
            "/api/v1/interviews",
            Some(json!({"role": "backend", "question_count": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(session["questions"].as_array().unwrap().len(), 3);
        assert_eq!(session["question_source"], "static-bank");

        let id = session["session_id"].as_str().unwrap().to_string();
        let (status, answer) = send(
            &app,
            Method::POST,
            &format!("/api/v1/interviews/{id}/answers"),
            Some(json!({"question_index": 0, "transcript": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(answer["evaluation"]["overall"], 0);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/interviews/{id}/answers"),
            Some(json!({"question_index": 0, "transcript": "again"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, completed) = send(
            &app,
            Method::POST,
            &format!("/api/v1/interviews/{id}/complete"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(completed["status"], "completed");
        assert_eq!(completed["summary"]["answered"], 1);

        let (status, _) =
            send(&app, Method::DELETE, &format!("/api/v1/interviews/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &format!("/api/v1/interviews/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_evaluate_empty_answer_is_zero() {
        let app = build_router(test_state());
        let (status, evaluation) = send(
            &app,
            Method::POST,
            "/api/v1/evaluate",
            Some(json!({
                "question": "Explain the difference between processes and threads.",
                "type": "technical",
                "difficulty": "hard",
                "transcript": ""
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        for field in ["technical", "communication", "completeness", "overall"] {
            assert_eq!(evaluation[field], 0, "{field}");
        }
    }

    #[tokio::test]
    async fn test_roles_listed() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/roles", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["roles"].as_array().unwrap().len() >= 8);
    }

    #[tokio::test]
    async fn test_job_search_without_api_is_unavailable() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/search",
            Some(json!({"keywords": "rust developer"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "unavailable");
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_recommendations_fall_back_to_static_listings() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/recommendations",
            Some(json!({
                "profile": {
                    "skills": ["aws", "kubernetes", "docker"],
                    "domain": "Cloud & DevOps",
                    "experience_years": 4.0
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");

        let jobs = body["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 4);
        let scores: Vec<u64> = jobs.iter().map(|j| j["match_score"].as_u64().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(scores.iter().all(|s| (70..=98).contains(s)));
        assert!(body["insights"]["career_path"].as_str().unwrap().contains("DevOps"));
    }

    #[tokio::test]
    async fn test_recommendations_require_a_profile() {
        let app = build_router(test_state());
        let (status, _) = send(&app, Method::POST, "/api/v1/jobs/recommendations", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failing_job_search_falls_back() {
        let mut state = test_state();
        state.job_search = Some(
            JobSearchClient::new("http://127.0.0.1:9/api/", "key", Duration::from_secs(2)).unwrap(),
        );
        let app = build_router(state);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/search",
            Some(json!({"keywords": "rust developer", "location": "Remote"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "unavailable");
        assert_eq!(body["total"], 0);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/recommendations",
            Some(json!({"profile": {"skills": ["python"], "domain": "Data Science & AI"}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["jobs"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_candidate_history_and_analytics() {
        let app = build_router(test_state());
        let (_, profile) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/analyze",
            Some(json!({"text": "3 years of experience with Python, Django and PostgreSQL."})),
        )
        .await;
        let candidate_id = profile["candidate_id"].as_str().unwrap().to_string();

        let (_, analytics) = send(
            &app,
            Method::GET,
            &format!("/api/v1/candidates/{candidate_id}/analytics"),
            None,
        )
        .await;
        assert_eq!(analytics["total_interviews"], 0);
        assert!(analytics["strongest_dimension"].is_null());

        let (status, session) = send(
            &app,
            Method::POST,
            "/api/v1/interviews",
            Some(json!({"role": "backend", "candidate_id": candidate_id, "question_count": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let session_id = session["session_id"].as_str().unwrap().to_string();

        send(
            &app,
            Method::POST,
            &format!("/api/v1/interviews/{session_id}/answers"),
            Some(json!({
                "question_index": 0,
                "transcript": "I would design the service around clear APIs. For example, \
                    I once split a monolith into smaller services with their own databases."
            })),
        )
        .await;
        send(
            &app,
            Method::POST,
            &format!("/api/v1/interviews/{session_id}/complete"),
            None,
        )
        .await;

        let (status, history) = send(
            &app,
            Method::GET,
            &format!("/api/v1/candidates/{candidate_id}/interviews"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let interviews = history["interviews"].as_array().unwrap();
        assert_eq!(interviews.len(), 1);
        assert_eq!(interviews[0]["session_id"], session_id.as_str());

        let (status, analytics) = send(
            &app,
            Method::GET,
            &format!("/api/v1/candidates/{candidate_id}/analytics"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(analytics["total_interviews"], 1);
        assert_eq!(analytics["completed_interviews"], 1);
        assert!(analytics["average_score"].as_u64().unwrap() > 0);
        assert!(analytics["strongest_dimension"].is_string());
    }
}
