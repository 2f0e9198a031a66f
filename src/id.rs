use crate::domain::card::CardId;
use std::fmt;
use uuid::Uuid;

/// Source of fresh card identifiers.
///
/// The board takes a provider at construction, so callers decide how
/// identifiers are minted and tests can supply deterministic ones.
pub trait IdProvider: fmt::Debug + Send {
    /// Returns an identifier not used by any existing card
    fn next_id(&mut self) -> CardId;
}

/// Random identifiers backed by UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&mut self) -> CardId {
        CardId::new(Uuid::new_v4().to_string())
    }
}

/// Counter-based identifiers (`card-1`, `card-2`, ...) for tests and fixtures
#[derive(Debug, Clone)]
pub struct SequentialIdProvider {
    next: u32,
}

impl SequentialIdProvider {
    const PREFIX: &'static str = "card-";

    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Starts counting at `next`, e.g. past an already-seeded card set
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&mut self) -> CardId {
        let id = CardId::new(format!("{}{}", Self::PREFIX, self.next));
        self.next += 1;
        id
    }
}
