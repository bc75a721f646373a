//! Submit Answer Use Case

use crate::application::config::QuizConfig;
use crate::domain::catalog::QuizCatalog;
use crate::domain::matcher::AnswerMatcher;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{QuizId, UserId};
use crate::error::{QuizError, QuizResult};
use std::sync::Arc;

/// Input DTO for submit answer
#[derive(Debug, Clone)]
pub struct SubmitAnswerInput {
    pub user_id: UserId,
    pub question_id: QuizId,
    pub answer: String,
}

/// Result of judging one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Solved; the quiz joins the answered set
    Correct { explanation: String },
    /// Wrong, the user may retry the same question
    Wrong {
        explanation: String,
        correct_answer: String,
        attempts_left: u32,
    },
    /// Wrong and no attempts left
    Failed {
        explanation: String,
        correct_answer: String,
    },
}

impl SubmitOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Correct { .. } => "correct",
            SubmitOutcome::Wrong { .. } => "wrong",
            SubmitOutcome::Failed { .. } => "failed",
        }
    }
}

/// Submit Answer Use Case
pub struct SubmitAnswerUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    catalog: Arc<QuizCatalog>,
    matcher: Arc<AnswerMatcher>,
    config: Arc<QuizConfig>,
}

impl<S> SubmitAnswerUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(
        session_repo: Arc<S>,
        catalog: Arc<QuizCatalog>,
        matcher: Arc<AnswerMatcher>,
        config: Arc<QuizConfig>,
    ) -> Self {
        Self {
            session_repo,
            catalog,
            matcher,
            config,
        }
    }

    pub async fn execute(&self, input: SubmitAnswerInput) -> QuizResult<SubmitOutcome> {
        let Some(mut session) = self.session_repo.find(&input.user_id).await? else {
            tracing::debug!(user_id = %input.user_id, "Submit without session");
            return Err(QuizError::InvalidRequest);
        };

        let Some(quiz) = self.catalog.get(input.question_id) else {
            tracing::debug!(question_id = %input.question_id, "Submit for unknown quiz");
            return Err(QuizError::InvalidRequest);
        };

        if !session.is_current(quiz.id) {
            tracing::debug!(
                user_id = %input.user_id,
                question_id = %input.question_id,
                current = ?session.current_question,
                "Submit for a question that is not current"
            );
            return Err(QuizError::InvalidRequest);
        }

        let outcome = if self.matcher.is_correct(&quiz.answer, &input.answer) {
            session.record_correct(quiz.id);
            SubmitOutcome::Correct {
                explanation: quiz.explanation.clone(),
            }
        } else {
            match session.record_wrong(self.config.max_attempts) {
                0 => SubmitOutcome::Failed {
                    explanation: quiz.explanation.clone(),
                    correct_answer: quiz.answer.clone(),
                },
                attempts_left => SubmitOutcome::Wrong {
                    explanation: quiz.explanation.clone(),
                    correct_answer: quiz.answer.clone(),
                    attempts_left,
                },
            }
        };

        self.session_repo.save(&input.user_id, &session).await?;

        tracing::info!(
            user_id = %input.user_id,
            question_id = %quiz.id,
            result = outcome.as_str(),
            attempts_left = session.attempts_left(self.config.max_attempts),
            "Judged answer"
        );

        Ok(outcome)
    }
}
