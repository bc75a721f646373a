//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, answer matcher, quiz selection, repository traits
//! - `application/` - Use cases (start, submit)
//! - `infra/` - In-memory session table, JSON data loaders
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Users are anonymous; the client picks its own user id
//! - A user may give `max_attempts` wrong answers, after which start is refused
//! - Answers are judged by equality after normalization and synonym folding
//! - Sessions live in memory for the lifetime of the process

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QuizConfig;
pub use domain::catalog::QuizCatalog;
pub use domain::matcher::{AnswerMatcher, SynonymTable};
pub use error::{QuizError, QuizResult};
pub use infra::memory::InMemorySessionRepository;
pub use presentation::router::{quiz_router, quiz_router_generic};

pub mod loader {
    pub use crate::infra::json::*;
}
