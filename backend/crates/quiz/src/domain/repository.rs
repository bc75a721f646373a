//! Repository Traits
//!
//! Interfaces for session storage. Implementation is in infrastructure layer.

use crate::domain::entities::Session;
use crate::domain::value_objects::UserId;
use crate::error::QuizResult;

/// Session repository trait
///
/// Callers read a session, change it, and save it back. Two concurrent
/// writers for the same user are last-write-wins.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Get the session of a user, if one was ever saved
    async fn find(&self, user_id: &UserId) -> QuizResult<Option<Session>>;

    /// Insert or replace the session of a user
    async fn save(&self, user_id: &UserId, session: &Session) -> QuizResult<()>;
}
