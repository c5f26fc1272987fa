//! Worksheet generation endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use serde_json::json;

use super::server::AppState;
use crate::worksheet::{WorksheetError, WorksheetInput};

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub async fn generate_worksheet_handler(
    State(state): State<Arc<AppState>>,
    input: Result<Json<WorksheetInput>, JsonRejection>,
) -> Response {
    let input = match input {
        Ok(Json(input)) => input,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    if let Err(err) = input.validate(state.config.worksheet.max_questions) {
        return error_response(StatusCode::BAD_REQUEST, err.to_string());
    }

    let start = Instant::now();
    let result = state.worksheets.generate_worksheet(&input).await;
    histogram!("worksheet.generate_ms").record(start.elapsed().as_millis() as f64);

    match result {
        Ok(worksheet) => {
            counter!("worksheet.generated", "result" => "ok").increment(1);
            Json(worksheet).into_response()
        }
        Err(WorksheetError::InvalidInput(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            counter!("worksheet.generated", "result" => "error").increment(1);
            tracing::error!("worksheet generation failed for '{}': {}", input.topic, err);
            error_response(StatusCode::BAD_GATEWAY, "Failed to generate worksheet")
        }
    }
}
