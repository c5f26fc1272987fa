//! Router-level tests for worksheet generation

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use makos_server::api::{AppState, build_api_router};
use makos_server::auth::{AuthClient, AuthError, CookieNames, Session};
use makos_server::config::Config;
use makos_server::worksheet::{Worksheet, WorksheetError, WorksheetGenerator, WorksheetInput};
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

struct NoAuth;

#[async_trait]
impl AuthClient for NoAuth {
    async fn exchange_code_for_session(
        &self,
        _code: &str,
        _code_verifier: Option<&str>,
    ) -> Result<Session, AuthError> {
        Err(AuthError::Provider("unused".to_string()))
    }

    async fn get_session(&self, _access_token: Option<&str>) -> Result<Option<Session>, AuthError> {
        Ok(None)
    }
}

struct FailingGenerator;

#[async_trait]
impl WorksheetGenerator for FailingGenerator {
    async fn generate_worksheet(&self, _input: &WorksheetInput) -> Result<Worksheet, WorksheetError> {
        Err(WorksheetError::Api {
            status: 529,
            body: "overloaded".to_string(),
        })
    }
}

fn state() -> AppState {
    let cookies = CookieNames::for_provider(&Url::parse("https://proj.supabase.co").unwrap());
    AppState::new(Config::default(), Arc::new(NoAuth), cookies)
}

async fn post(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/worksheets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_generates_draft_worksheet() {
    let body = json!({
        "topic": "Volcanoes",
        "subject": "Science",
        "grade_level": "4",
        "question_count": 3,
        "question_types": ["true_false", "essay"]
    });
    let (status, worksheet) = post(build_api_router(Arc::new(state())), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(worksheet["title"], "Volcanoes Worksheet");
    assert_eq!(worksheet["status"], "draft");
    assert!(worksheet["id"].as_str().unwrap().starts_with("ws_"));

    let kinds: Vec<&str> = worksheet["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["true_false", "essay", "true_false"]);
    assert_eq!(worksheet["questions"][1]["points"], 10);
}

#[tokio::test]
async fn test_rejects_missing_topic() {
    let (status, body) = post(
        build_api_router(Arc::new(state())),
        r#"{"topic": " ", "question_count": 2}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "topic is required");
}

#[tokio::test]
async fn test_rejects_too_many_questions() {
    let mut state = state();
    state.config.worksheet.max_questions = 5;
    let (status, body) = post(
        build_api_router(Arc::new(state)),
        r#"{"topic": "Volcanoes", "question_count": 6}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("between 1 and 5"));
}

#[tokio::test]
async fn test_rejects_malformed_body() {
    let (status, body) = post(build_api_router(Arc::new(state())), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generator_failure_is_bad_gateway() {
    let state = state().with_worksheet_generator(Arc::new(FailingGenerator));
    let (status, body) = post(
        build_api_router(Arc::new(state)),
        r#"{"topic": "Volcanoes"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to generate worksheet");
}
