//! Quiz Router

use crate::application::config::QuizConfig;
use crate::domain::catalog::QuizCatalog;
use crate::domain::matcher::AnswerMatcher;
use crate::domain::repository::SessionRepository;
use crate::infra::memory::InMemorySessionRepository;
use crate::presentation::handlers::{self, QuizAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the quiz router backed by the in-memory session table
pub fn quiz_router(catalog: QuizCatalog, matcher: AnswerMatcher, config: QuizConfig) -> Router {
    quiz_router_generic(InMemorySessionRepository::new(), catalog, matcher, config)
}

/// Create a quiz router for any session repository implementation
pub fn quiz_router_generic<S>(
    sessions: S,
    catalog: QuizCatalog,
    matcher: AnswerMatcher,
    config: QuizConfig,
) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = QuizAppState {
        sessions: Arc::new(sessions),
        catalog: Arc::new(catalog),
        matcher: Arc::new(matcher),
        config: Arc::new(config),
    };

    Router::new()
        .route("/start", post(handlers::start_quiz::<S>))
        .route("/submit", post(handlers::submit_answer::<S>))
        .with_state(state)
}
