//! JSON Data Loaders
//!
//! Quiz and synonym data are static JSON files read once at startup.

use crate::domain::catalog::QuizCatalog;
use crate::domain::entities::Quiz;
use crate::domain::matcher::{SynonymTable, parse_alternatives};
use crate::domain::value_objects::QuizId;
use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Synonym table shipped with the crate
const DEFAULT_SYNONYMS: &str = include_str!("../../data/synonyms.json");

/// One entry of the quiz data file
#[derive(Debug, Deserialize)]
struct QuizRecord {
    id: QuizId,
    question: String,
    answer: String,
    explanation: String,
}

impl From<QuizRecord> for Quiz {
    fn from(record: QuizRecord) -> Self {
        Quiz::new(
            record.id,
            record.question,
            record.answer,
            record.explanation,
        )
    }
}

/// Parse a quiz catalog from a JSON array of quiz records
pub fn parse_catalog(json: &str) -> AppResult<QuizCatalog> {
    let records: Vec<QuizRecord> = serde_json::from_str(json)?;
    let quizzes: Vec<Quiz> = records.into_iter().map(Quiz::from).collect();

    for quiz in &quizzes {
        if parse_alternatives(&quiz.answer).is_empty() {
            tracing::warn!(question_id = %quiz.id, "Quiz has no usable answer and can never be solved");
        }
    }

    QuizCatalog::new(quizzes).map_app_err(ErrorKind::UnprocessableEntity, "invalid quiz catalog")
}

/// Read and parse the quiz data file
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<QuizCatalog> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_message(format!("failed to read quiz data {}", path.display()))
    })?;
    parse_catalog(&json)
}

/// Parse a synonym table from a JSON object of raw → canonical tokens
pub fn parse_synonyms(json: &str) -> AppResult<SynonymTable> {
    let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
    Ok(SynonymTable::new(entries))
}

/// Read and parse a synonym table file
pub fn load_synonyms(path: impl AsRef<Path>) -> AppResult<SynonymTable> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_message(format!("failed to read synonyms {}", path.display()))
    })?;
    parse_synonyms(&json)
}

/// The synonym table embedded in the crate
pub fn default_synonyms() -> AppResult<SynonymTable> {
    parse_synonyms(DEFAULT_SYNONYMS)
}
