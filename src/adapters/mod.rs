//! Concrete implementations of the port traits.
//!
//! `random` and `sequence` implement the id generator port; `memory`
//! implements the session store port. External backends (SQL, key-value)
//! implement the same traits outside this crate.

pub mod memory;
pub mod random;
pub mod sequence;

pub use memory::MemoryStore;
pub use random::{RandomSource, RECOMMENDED_LENGTH};
pub use sequence::SequenceIdGenerator;
