//! Pill identifier generation.
//!
//! Every created pill and every split-produced part asks an [`IdGenerator`]
//! for a fresh token. The default draws UUID v4s; tests use
//! [`SequentialIds`] for reproducible output.

use crate::types::PillId;
use uuid::Uuid;

/// Source of unique pill identifiers.
pub trait IdGenerator {
    /// Return a token never returned before by this generator.
    fn new_id(&mut self) -> PillId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> PillId {
        PillId::from_uuid(Uuid::new_v4())
    }
}

/// Deterministic identifiers: UUIDs built from an incrementing counter.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u128) -> Self {
        Self { next }
    }

    /// Number of identifiers handed out so far (when started at 1).
    pub fn issued(&self) -> u128 {
        self.next - 1
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&mut self) -> PillId {
        let id = PillId::from_uuid(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}
