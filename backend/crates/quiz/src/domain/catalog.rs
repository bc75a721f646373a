//! Quiz Catalog
//!
//! The immutable set of quizzes served by the process.

use crate::domain::entities::Quiz;
use crate::domain::value_objects::QuizId;
use std::collections::HashMap;
use thiserror::Error;

/// Reasons a quiz list cannot become a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("quiz catalog is empty")]
    Empty,

    #[error("duplicate quiz id: {0}")]
    DuplicateId(QuizId),
}

/// Immutable quiz list with an id index
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    quizzes: Vec<Quiz>,
    index: HashMap<QuizId, usize>,
}

impl QuizCatalog {
    /// Build a catalog. Requires at least one quiz and unique ids.
    pub fn new(quizzes: Vec<Quiz>) -> Result<Self, CatalogError> {
        if quizzes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(quizzes.len());
        for (position, quiz) in quizzes.iter().enumerate() {
            if index.insert(quiz.id, position).is_some() {
                return Err(CatalogError::DuplicateId(quiz.id));
            }
        }

        Ok(Self { quizzes, index })
    }

    pub fn get(&self, id: QuizId) -> Option<&Quiz> {
        self.index.get(&id).map(|&position| &self.quizzes[position])
    }

    pub fn all(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}
