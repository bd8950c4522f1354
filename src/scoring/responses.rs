use crate::scoring::models::{Points, ScoreRecord};
use crate::scoring::verdict::Verdict;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ScoreSubmissionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Points>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_distance: Option<String>,
}

impl SubmitScoreResponse {
    pub fn refused(error_code: ScoreSubmissionError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            session_id: None,
            username: None,
            distance: None,
            points: None,
            verdict: None,
            message: None,
            formatted_distance: None,
        }
    }
}

/// All possible reasons why a score submission may be refused.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreSubmissionError {
    MalformedBody,
    MissingUsername,
    UsernameTooLong,
    MissingImageId,
    InvalidGuessCoordinates,
    InvalidTrueCoordinates,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ScoreSessionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ScoreRecord>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreSessionError {
    SessionNotFound,
}
