use crate::app_context::AppContext;
use crate::scoring::requests::SubmitScoreRequest;
use crate::scoring::responses::{
    ScoreSessionResponse, ScoreSubmissionError, SubmitScoreResponse,
};
use crate::scoring::services::ScoringHttpHandler;
use crate::storage::scores::HashMapScoreStorage;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn submit(
    State(app_context): State<AppContext<HashMapScoreStorage>>,
    request: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> (StatusCode, Json<SubmitScoreResponse>) {
    let handler = ScoringHttpHandler::new(app_context);
    let response = match request {
        Ok(Json(request)) => handler.submit(request).await,
        Err(rejection) => {
            tracing::info!(%rejection, "Failed to read a score submission.");
            handler.refuse(ScoreSubmissionError::MalformedBody)
        }
    };
    let status = if response.error {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(response))
}

#[axum::debug_handler]
pub async fn session(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapScoreStorage>>,
) -> (StatusCode, Json<ScoreSessionResponse>) {
    let response = ScoringHttpHandler::new(app_context)
        .session(&session_id)
        .await;
    let status = if response.error {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, Json(response))
}
