//! Start Quiz Use Case

use crate::application::config::QuizConfig;
use crate::domain::catalog::QuizCatalog;
use crate::domain::repository::SessionRepository;
use crate::domain::services::pick_quiz;
use crate::domain::value_objects::{QuizId, UserId};
use crate::error::{QuizError, QuizResult};
use std::sync::Arc;

/// Output DTO for start quiz
#[derive(Debug, Clone)]
pub struct StartQuizOutput {
    pub question_id: QuizId,
    pub question: String,
    pub attempts_left: u32,
}

/// Start Quiz Use Case
pub struct StartQuizUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    catalog: Arc<QuizCatalog>,
    config: Arc<QuizConfig>,
}

impl<S> StartQuizUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, catalog: Arc<QuizCatalog>, config: Arc<QuizConfig>) -> Self {
        Self {
            session_repo,
            catalog,
            config,
        }
    }

    pub async fn execute(&self, user_id: UserId) -> QuizResult<StartQuizOutput> {
        let max_attempts = self.config.max_attempts;

        let mut session = match self.session_repo.find(&user_id).await? {
            Some(session) => session,
            None => {
                tracing::info!(user_id = %user_id, "New quiz session");
                Default::default()
            }
        };

        if session.is_exhausted(max_attempts) {
            tracing::info!(user_id = %user_id, "Start refused, no attempts left");
            return Err(QuizError::AttemptsExhausted);
        }

        let quiz = {
            let mut rng = rand::rng();
            pick_quiz(&self.catalog, &session, &mut rng)
        }
        .ok_or_else(|| QuizError::Internal("quiz catalog is empty".to_string()))?;

        session.present(quiz.id);
        self.session_repo.save(&user_id, &session).await?;

        let attempts_left = session.attempts_left(max_attempts);

        tracing::info!(
            user_id = %user_id,
            question_id = %quiz.id,
            attempts_left,
            "Presented question"
        );

        Ok(StartQuizOutput {
            question_id: quiz.id,
            question: quiz.question.clone(),
            attempts_left,
        })
    }
}
