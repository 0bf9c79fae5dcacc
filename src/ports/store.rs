//! Session store port for persisting and resolving sessions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::ports::id_gen::SessionId;

/// The identity and metadata a session resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The user the session represents. Empty if no session exists.
    pub user_id: String,
    /// Arbitrary caller-supplied data stored alongside the user.
    /// Empty if no session exists.
    pub meta_data: String,
}

/// Persists sessions and resolves them back to their owner.
///
/// Implementations are the only arbiter of concurrent writes: two callers
/// racing on the same candidate id must not both observe success, so the
/// create step needs atomic create-if-absent semantics.
///
/// Both operations are async; callers impose deadlines or cancellation by
/// wrapping the returned future (e.g. `tokio::time::timeout`) or dropping
/// it. The crate itself adds no timeout of its own.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mints a candidate session id (typically via an [`IdGenerator`]),
    /// persists the id → (`user_id`, `meta_data`) mapping, and returns the
    /// id on success.
    ///
    /// [`IdGenerator`]: crate::ports::id_gen::IdGenerator
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Collision`] if and only if the candidate id
    /// already exists in the store; any other failure (entropy, backend,
    /// transport) is returned as its own variant.
    async fn generate_and_store(
        &self,
        user_id: &str,
        meta_data: &str,
    ) -> Result<SessionId, SessionError>;

    /// Resolves a previously issued session id to its record.
    ///
    /// If no session exists for the id, returns a record with empty
    /// `user_id` and `meta_data` rather than an error: sessions are looked
    /// up expecting a user key to exist, so absence carries no dedicated
    /// signal.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine failures (backend unavailable,
    /// transport), never to represent a missing session.
    async fn get(&self, session: &SessionId) -> Result<SessionRecord, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_the_absent_value() {
        let record = SessionRecord::default();
        assert!(record.user_id.is_empty());
        assert!(record.meta_data.is_empty());
    }
}
