//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use crate::domain::value_objects::QuizId;
use serde::{Deserialize, Serialize};

/// Request for POST /api/start
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRequest {
    pub user_id: Option<String>,
}

/// Response for POST /api/start
#[derive(Debug, Clone, Serialize)]
pub struct StartResponse {
    pub question: String,
    pub question_id: QuizId,
    pub attempts_left: u32,
}

/// Request for POST /api/submit
///
/// Every field is optional here so that an incomplete body is answered
/// with the API's own error rather than the extractor's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequest {
    pub user_id: Option<String>,
    pub question_id: Option<QuizId>,
    pub answer: Option<String>,
}

/// Response for POST /api/submit
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum SubmitResponse {
    Correct {
        explanation: String,
        message: String,
    },
    Wrong {
        explanation: String,
        correct_answer: String,
        attempts_left: u32,
        message: String,
    },
    Failed {
        explanation: String,
        correct_answer: String,
        attempts_left: u32,
        message: String,
    },
}

/// Body of every 4xx/5xx response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts_left: Option<u32>,
}
