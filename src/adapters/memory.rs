//! In-memory adapter for the `SessionStore` port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::SessionError;
use crate::ports::id_gen::{IdGenerator, SessionId};
use crate::ports::store::{SessionRecord, SessionStore};

/// Session store backed by an in-process map.
///
/// Candidate ids come from the injected generator. The whole
/// check-then-insert step runs under one lock, so two concurrent callers
/// can never both win the same candidate id.
pub struct MemoryStore {
    id_gen: Box<dyn IdGenerator>,
    sessions: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl MemoryStore {
    /// Creates an empty store minting ids from the given generator.
    #[must_use]
    pub fn new(id_gen: Box<dyn IdGenerator>) -> Self {
        Self { id_gen, sessions: Mutex::new(HashMap::new()) }
    }

    /// Returns the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn generate_and_store(
        &self,
        user_id: &str,
        meta_data: &str,
    ) -> Result<SessionId, SessionError> {
        let id = self.id_gen.generate()?;

        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&id) {
            return Err(SessionError::Collision);
        }
        sessions.insert(
            id.clone(),
            SessionRecord { user_id: user_id.to_string(), meta_data: meta_data.to_string() },
        );
        tracing::trace!(user_id, id_len = id.len(), "stored new session");
        Ok(id)
    }

    async fn get(&self, session: &SessionId) -> Result<SessionRecord, SessionError> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(session).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::RandomSource;
    use crate::adapters::sequence::SequenceIdGenerator;

    #[tokio::test]
    async fn stores_and_resolves_a_session() {
        let store = MemoryStore::new(Box::new(RandomSource::os()));

        let id = store.generate_and_store("user-42", "theme=dark").await.unwrap();
        let record = store.get(&id).await.unwrap();

        assert_eq!(record.user_id, "user-42");
        assert_eq!(record.meta_data, "theme=dark");
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_candidate_id_reports_collision() {
        let gen = SequenceIdGenerator::new([
            SessionId::from(vec![7; 16]),
            SessionId::from(vec![7; 16]),
        ]);
        let store = MemoryStore::new(Box::new(gen));

        store.generate_and_store("alice", "").await.unwrap();
        let err = store.generate_and_store("bob", "").await.unwrap_err();

        assert!(err.is_collision());
        // The losing write must not clobber the existing record.
        let record = store.get(&SessionId::from(vec![7; 16])).await.unwrap();
        assert_eq!(record.user_id, "alice");
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_empty_record() {
        let store = MemoryStore::new(Box::new(RandomSource::os()));

        let record = store.get(&SessionId::from(vec![9; 16])).await.unwrap();

        assert_eq!(record, SessionRecord::default());
    }

    #[tokio::test]
    async fn generator_failure_is_not_reported_as_collision() {
        let store = MemoryStore::new(Box::new(SequenceIdGenerator::new([])));

        let err = store.generate_and_store("carol", "").await.unwrap_err();

        assert!(matches!(err, SessionError::Entropy(_)));
    }
}
