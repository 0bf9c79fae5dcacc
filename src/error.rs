//! Crate-wide error type for session creation and lookup.

use std::error::Error;

/// Errors produced while generating, storing, or looking up sessions.
///
/// `Collision` is the only retryable variant: [`crate::create_session`]
/// retries on it and returns every other variant to the caller unchanged.
/// Backends must report a duplicate candidate id as `Collision` and nothing
/// else, so that the retry loop can distinguish it by pattern match.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The candidate session id already exists in the store.
    ///
    /// Also returned by [`crate::create_session`] when its attempt budget is
    /// exhausted with only collisions observed.
    #[error("unable to store session, an existing session id already exists")]
    Collision,

    /// The entropy source failed to produce a session id.
    #[error("entropy source failed to produce a session id")]
    Entropy(#[source] Box<dyn Error + Send + Sync>),

    /// The session store failed for a reason other than a collision.
    #[error("session store failure")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

impl SessionError {
    /// Wraps an entropy-source failure.
    pub fn entropy(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Entropy(err.into())
    }

    /// Wraps a backend failure that is not a collision.
    pub fn storage(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Storage(err.into())
    }

    /// Returns `true` if this error is the collision signal.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision)
    }
}
