//! In-memory Repository Implementation
//!
//! Sessions live for the lifetime of the process. Nothing expires and
//! nothing is persisted.

use crate::domain::entities::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::UserId;
use crate::error::QuizResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local session table keyed by user id
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<UserId, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users seen so far
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn find(&self, user_id: &UserId) -> QuizResult<Option<Session>> {
        Ok(self.sessions.read().await.get(user_id).cloned())
    }

    async fn save(&self, user_id: &UserId, session: &Session) -> QuizResult<()> {
        self.sessions
            .write()
            .await
            .insert(user_id.clone(), session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::QuizId;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_find_unknown_user() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find(&user("nobody")).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let repo = InMemorySessionRepository::new();
        let mut session = Session::new();
        session.present(QuizId::new(2));

        repo.save(&user("u1"), &session).await.unwrap();

        assert_eq!(repo.find(&user("u1")).await.unwrap(), Some(session));
        assert!(repo.find(&user("u2")).await.unwrap().is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_replaces_and_clones_share_state() {
        let repo = InMemorySessionRepository::new();
        let handle = repo.clone();

        let mut session = Session::new();
        repo.save(&user("u1"), &session).await.unwrap();
        session.record_wrong(3);
        handle.save(&user("u1"), &session).await.unwrap();

        let stored = repo.find(&user("u1")).await.unwrap().unwrap();
        assert_eq!(stored.attempts, 1);
        assert_eq!(repo.len().await, 1);
    }
}
