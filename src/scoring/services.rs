use crate::app_context::AppContext;
use crate::scoring::consts::MAX_USERNAME_LENGTH;
use crate::scoring::models::ScoreRecord;
use crate::scoring::requests::{SubmitScoreRequest, ValidSubmission};
use crate::scoring::responses::{
    ScoreSessionError, ScoreSessionResponse, ScoreSubmissionError, SubmitScoreResponse,
};
use crate::scoring::verdict::{format_distance, Verdict};
use crate::scoring;
use crate::storage::interface::IScoreStorage;
use std::time::{SystemTime, UNIX_EPOCH};
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

pub struct ScoringHttpHandler<SS: IScoreStorage> {
    app_context: AppContext<SS>,
}

impl<SS: IScoreStorage> ScoringHttpHandler<SS> {
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn submit(&self, request: SubmitScoreRequest) -> SubmitScoreResponse {
        let ValidSubmission {
            username,
            image_id,
            guess,
            truth,
        } = match validate(&request) {
            Ok(submission) => submission,
            Err(error_code) => return self.refuse(error_code),
        };
        if let Some(nominatim) = &self.app_context.nominatim {
            let (guess_on_land, truth_on_land) =
                tokio::join!(nominatim.is_on_land(guess), nominatim.is_on_land(truth));
            if !guess_on_land || !truth_on_land {
                tracing::warn!(
                    guess_on_land,
                    truth_on_land,
                    "One or both coordinates may be off land."
                );
            }
        }

        let outcome = scoring::score(guess, truth);
        let session_id = Uuid::new_v4().to_string();
        let record = ScoreRecord {
            session_id: session_id.clone(),
            username: username.clone(),
            image_id,
            guess_location: guess,
            true_location: truth,
            distance: outcome.distance,
            points: outcome.points,
            timestamp: unix_timestamp(),
        };
        self.app_context.scores.save(record).await;
        let stored_sessions = self.app_context.scores.count().await;
        tracing::info!(
            task = "score_calculated",
            username = %username,
            session_id = %session_id,
            distance = outcome.distance,
            points = outcome.points,
            stored_sessions,
        );

        let verdict = Verdict::for_distance(outcome.distance);
        SubmitScoreResponse {
            error: false,
            error_code: None,
            session_id: Some(session_id),
            username: Some(username),
            distance: Some(outcome.distance),
            points: Some(outcome.points),
            verdict: Some(verdict),
            message: Some(verdict.message().to_string()),
            formatted_distance: Some(format_distance(outcome.distance)),
        }
    }

    pub fn refuse(&self, error_code: ScoreSubmissionError) -> SubmitScoreResponse {
        tracing::info!(task = "score_refused", reason = ?error_code);
        SubmitScoreResponse::refused(error_code)
    }

    pub async fn session(&self, session_id: &str) -> ScoreSessionResponse {
        match self.app_context.scores.get(session_id).await {
            Some(record) => ScoreSessionResponse {
                error: false,
                error_code: None,
                record: Some(record),
            },
            None => ScoreSessionResponse {
                error: true,
                error_code: Some(ScoreSessionError::SessionNotFound),
                record: None,
            },
        }
    }
}

fn validate(request: &SubmitScoreRequest) -> Result<ValidSubmission, ScoreSubmissionError> {
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|username| !username.is_empty())
        .ok_or(ScoreSubmissionError::MissingUsername)?;
    if username.graphemes(true).count() > MAX_USERNAME_LENGTH {
        return Err(ScoreSubmissionError::UsernameTooLong);
    }
    let image_id = request
        .image_id
        .as_deref()
        .map(str::trim)
        .filter(|image_id| !image_id.is_empty())
        .ok_or(ScoreSubmissionError::MissingImageId)?;
    let guess = request
        .guess()
        .filter(|guess| guess.validate().is_ok())
        .ok_or(ScoreSubmissionError::InvalidGuessCoordinates)?;
    let truth = request
        .truth()
        .filter(|truth| truth.validate().is_ok())
        .ok_or(ScoreSubmissionError::InvalidTrueCoordinates)?;
    Ok(ValidSubmission {
        username: username.to_string(),
        image_id: image_id.to_string(),
        guess,
        truth,
    })
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
