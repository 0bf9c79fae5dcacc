//! Collision-safe session creation over pluggable id generation and storage.
//!
//! [`create_session`] asks a [`SessionStore`] to mint and persist a session
//! for a user, retrying only when the freshly generated id collides with an
//! existing one. The store and the entropy behind it are injected through
//! the port traits in [`ports`], with ready-made implementations in
//! [`adapters`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), session_store::SessionError> {
//! use session_store::adapters::{MemoryStore, RandomSource};
//! use session_store::{create_session, SessionStore};
//!
//! let store = MemoryStore::new(Box::new(RandomSource::os()));
//! let session = create_session(&store, "user-42", "theme=dark", 5).await?;
//! let record = store.get(&session).await?;
//! assert_eq!(record.user_id, "user-42");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod error;
pub mod ports;

pub use error::SessionError;
pub use ports::{IdGenerator, SessionId, SessionRecord, SessionStore};

/// Creates a new session for `user_id` with `meta_data` attached, retrying
/// up to `max_attempts` times on id collisions.
///
/// Random ids make collisions unlikely but not impossible, and an existing
/// session must never be overwritten, so each collision is answered by
/// minting a fresh candidate. Only the collision signal is retried: success
/// and every other error return immediately on the attempt that produced
/// them. `max_attempts` of zero exhausts the budget without ever invoking
/// the store.
///
/// # Errors
///
/// Returns [`SessionError::Collision`] when the attempt budget is exhausted
/// with only collisions observed, signaling identifier-space pressure
/// rather than a transient failure. All other store errors are propagated
/// unchanged from the first attempt that produced them.
pub async fn create_session<S>(
    store: &S,
    user_id: &str,
    meta_data: &str,
    max_attempts: usize,
) -> Result<SessionId, SessionError>
where
    S: SessionStore + ?Sized,
{
    for attempt in 0..max_attempts {
        match store.generate_and_store(user_id, meta_data).await {
            Err(SessionError::Collision) => {
                tracing::debug!(attempt, "session id collided with an existing session");
            }
            outcome => return outcome,
        }
    }
    Err(SessionError::Collision)
}
