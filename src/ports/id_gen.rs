//! ID generator port for minting session identifiers.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// An opaque session identifier.
///
/// A session id is a sequence of bytes with no internal structure; do not
/// depend on the specifics of the underlying representation. Uniqueness
/// within one store's namespace is the only invariant. Ids should be at
/// least 16 bytes (128 bits) to stay hard to guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Vec<u8>);

impl SessionId {
    /// Returns the raw bytes of the identifier.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the identifier and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the identifier length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the identifier has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for SessionId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SessionId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Mints candidate session identifiers.
///
/// Abstracting id generation decouples "how random" from "how used":
/// stores take any generator, so cryptographic-quality and deterministic
/// test sources substitute for each other freely.
pub trait IdGenerator: Send + Sync {
    /// Generates a new candidate session identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying byte source fails. The failure
    /// cause is passed through unmodified; no partial identifier is ever
    /// returned.
    fn generate(&self) -> Result<SessionId, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_its_bytes() {
        let id = SessionId::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(id.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(id.len(), 4);
        assert!(!id.is_empty());
        assert_eq!(id.clone().into_bytes(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn empty_session_id_is_empty() {
        let id = SessionId::from(Vec::new());
        assert!(id.is_empty());
        assert_eq!(id.len(), 0);
    }
}
