//! Quiz Error Types
//!
//! Request-level failures of the quiz API. Responses carry the small
//! `{message, attempts_left?}` JSON body the front-end reads.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::presentation::dto::ErrorResponse;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
#[derive(Debug, Error)]
pub enum QuizError {
    /// A required request field is absent or empty
    #[error("missing {0}")]
    MissingField(&'static str),

    /// Unknown session or quiz, or the quiz is not the one presented
    #[error("invalid request")]
    InvalidRequest,

    /// The user has no attempts left
    #[error("No attempts left today, please come back tomorrow.")]
    AttemptsExhausted,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::MissingField(_)
            | QuizError::InvalidRequest
            | QuizError::AttemptsExhausted => StatusCode::BAD_REQUEST,
            QuizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client. Internal details stay in the logs.
    pub fn to_body(&self) -> ErrorResponse {
        match self {
            QuizError::AttemptsExhausted => ErrorResponse {
                message: self.to_string(),
                attempts_left: Some(0),
            },
            QuizError::Internal(_) => ErrorResponse {
                message: "internal server error".to_string(),
                attempts_left: None,
            },
            _ => ErrorResponse {
                message: self.to_string(),
                attempts_left: None,
            },
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::Internal(msg) => {
                tracing::error!(message = %msg, "Quiz internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Quiz request rejected");
            }
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
