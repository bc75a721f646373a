//! HTTP Handlers

use crate::application::config::QuizConfig;
use crate::application::start_quiz::StartQuizUseCase;
use crate::application::submit_answer::{SubmitAnswerInput, SubmitAnswerUseCase, SubmitOutcome};
use crate::domain::catalog::QuizCatalog;
use crate::domain::matcher::AnswerMatcher;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::UserId;
use crate::error::{QuizError, QuizResult};
use crate::presentation::dto::{StartRequest, StartResponse, SubmitRequest, SubmitResponse};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

const CORRECT_MESSAGE: &str = "Congratulations! You have won a lottery draw.";
const FAILED_MESSAGE: &str =
    "Sorry, you have used up all your attempts. Please come back tomorrow.";

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub catalog: Arc<QuizCatalog>,
    pub matcher: Arc<AnswerMatcher>,
    pub config: Arc<QuizConfig>,
}

/// POST /api/start
pub async fn start_quiz<S>(
    State(state): State<QuizAppState<S>>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> QuizResult<Json<StartResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let req = match payload {
        Ok(Json(req)) => req,
        // a request without a JSON body is read as `{}`
        Err(JsonRejection::MissingJsonContentType(_)) => StartRequest::default(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected start body");
            return Err(QuizError::InvalidRequest);
        }
    };

    let user_id = req
        .user_id
        .and_then(UserId::new)
        .ok_or(QuizError::MissingField("user_id"))?;

    let use_case = StartQuizUseCase::new(
        state.sessions.clone(),
        state.catalog.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(user_id).await?;

    Ok(Json(StartResponse {
        question: output.question,
        question_id: output.question_id,
        attempts_left: output.attempts_left,
    }))
}

/// POST /api/submit
pub async fn submit_answer<S>(
    State(state): State<QuizAppState<S>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> QuizResult<Json<SubmitResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected submit body");
        QuizError::InvalidRequest
    })?;

    let user_id = req.user_id.and_then(UserId::new);
    let input = match (user_id, req.question_id, req.answer) {
        (Some(user_id), Some(question_id), Some(answer)) => SubmitAnswerInput {
            user_id,
            question_id,
            answer,
        },
        _ => return Err(QuizError::InvalidRequest),
    };

    let use_case = SubmitAnswerUseCase::new(
        state.sessions.clone(),
        state.catalog.clone(),
        state.matcher.clone(),
        state.config.clone(),
    );

    let outcome = use_case.execute(input).await?;

    Ok(Json(to_response(outcome)))
}

fn to_response(outcome: SubmitOutcome) -> SubmitResponse {
    match outcome {
        SubmitOutcome::Correct { explanation } => SubmitResponse::Correct {
            explanation,
            message: CORRECT_MESSAGE.to_string(),
        },
        SubmitOutcome::Wrong {
            explanation,
            correct_answer,
            attempts_left,
        } => SubmitResponse::Wrong {
            explanation,
            correct_answer,
            attempts_left,
            message: wrong_message(attempts_left),
        },
        SubmitOutcome::Failed {
            explanation,
            correct_answer,
        } => SubmitResponse::Failed {
            explanation,
            correct_answer,
            attempts_left: 0,
            message: FAILED_MESSAGE.to_string(),
        },
    }
}

fn wrong_message(attempts_left: u32) -> String {
    match attempts_left {
        1 => "Wrong answer, 1 attempt left.".to_string(),
        n => format!("Wrong answer, {n} attempts left."),
    }
}
