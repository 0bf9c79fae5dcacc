//! Entropy-backed adapter for the `IdGenerator` port.

use std::sync::Mutex;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::SessionError;
use crate::ports::id_gen::{IdGenerator, SessionId};

/// Recommended minimum id length in bytes (128 bits of entropy).
pub const RECOMMENDED_LENGTH: usize = 16;

/// Generates session ids by filling a fixed-length buffer from an injected
/// random byte source.
///
/// The source is any [`RngCore`]; pass [`OsRng`] for cryptographic-quality
/// ids or a seeded rng for deterministic tests.
pub struct RandomSource<R> {
    rng: Mutex<R>,
    length: usize,
}

impl<R: RngCore> RandomSource<R> {
    /// Creates a generator producing ids of `length` bytes from `rng`.
    #[must_use]
    pub fn new(length: usize, rng: R) -> Self {
        Self { rng: Mutex::new(rng), length }
    }
}

impl RandomSource<OsRng> {
    /// Creates a generator over the operating system's entropy source at
    /// the recommended length.
    #[must_use]
    pub fn os() -> Self {
        Self::new(RECOMMENDED_LENGTH, OsRng)
    }
}

impl Default for RandomSource<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore + Send> IdGenerator for RandomSource<R> {
    fn generate(&self) -> Result<SessionId, SessionError> {
        let mut buf = vec![0u8; self.length];
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        rng.try_fill_bytes(&mut buf).map_err(SessionError::entropy)?;
        Ok(SessionId::from(buf))
    }
}
