//! Domain Entities
//!
//! Core business entities for the quiz domain.

use crate::domain::value_objects::QuizId;
use std::collections::HashSet;

/// Quiz entity - a single riddle
///
/// `answer` may hold several accepted answers separated by delimiters,
/// see [`crate::domain::matcher::parse_alternatives`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

impl Quiz {
    pub fn new(
        id: QuizId,
        question: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }
}

/// Session entity - per-user quiz progress
///
/// Invariants:
/// - `attempts` never exceeds the configured maximum
/// - `current_question` is set only between a start and the next submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Wrong submissions so far
    pub attempts: u32,
    /// Quizzes already solved
    pub answered: HashSet<QuizId>,
    /// Quiz currently presented to the user
    pub current_question: Option<QuizId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts_left(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

    pub fn is_exhausted(&self, max_attempts: u32) -> bool {
        self.attempts >= max_attempts
    }

    pub fn has_answered(&self, quiz_id: QuizId) -> bool {
        self.answered.contains(&quiz_id)
    }

    pub fn is_current(&self, quiz_id: QuizId) -> bool {
        self.current_question == Some(quiz_id)
    }

    /// Mark a quiz as the one awaiting an answer
    pub fn present(&mut self, quiz_id: QuizId) {
        self.current_question = Some(quiz_id);
    }

    pub fn record_correct(&mut self, quiz_id: QuizId) {
        self.answered.insert(quiz_id);
        self.current_question = None;
    }

    /// Count a wrong answer and return the attempts left.
    ///
    /// Reaching zero ends the current question.
    pub fn record_wrong(&mut self, max_attempts: u32) -> u32 {
        self.attempts = self.attempts.saturating_add(1).min(max_attempts);
        let left = self.attempts_left(max_attempts);
        if left == 0 {
            self.current_question = None;
        }
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 3;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.attempts, 0);
        assert!(session.answered.is_empty());
        assert!(session.current_question.is_none());
        assert_eq!(session.attempts_left(MAX), MAX);
        assert!(!session.is_exhausted(MAX));
    }

    #[test]
    fn test_record_correct_clears_current() {
        let mut session = Session::new();
        session.present(QuizId::new(4));
        assert!(session.is_current(QuizId::new(4)));

        session.record_correct(QuizId::new(4));
        assert!(session.has_answered(QuizId::new(4)));
        assert!(session.current_question.is_none());
        assert_eq!(session.attempts, 0);
    }

    #[test]
    fn test_record_wrong_counts_down() {
        let mut session = Session::new();
        session.present(QuizId::new(1));

        assert_eq!(session.record_wrong(MAX), 2);
        assert!(session.is_current(QuizId::new(1)));
        assert_eq!(session.record_wrong(MAX), 1);
        assert!(session.is_current(QuizId::new(1)));
        assert_eq!(session.record_wrong(MAX), 0);
        assert!(session.current_question.is_none());
        assert!(session.is_exhausted(MAX));
    }

    #[test]
    fn test_record_wrong_respects_given_max() {
        let mut session = Session::new();
        session.present(QuizId::new(1));
        assert_eq!(session.record_wrong(1), 0);
        assert!(session.is_exhausted(1));
        assert!(!session.is_exhausted(5));
        assert_eq!(session.attempts_left(5), 4);
    }

    #[test]
    fn test_attempts_never_exceed_max() {
        let mut session = Session::new();
        for _ in 0..10 {
            session.record_wrong(MAX);
            assert!(session.attempts <= MAX);
        }
        assert_eq!(session.attempts, MAX);
        assert_eq!(session.attempts_left(MAX), 0);
    }
}
