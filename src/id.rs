//! Game id generation.

use crate::games::connect::GameId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique game ids.
///
/// Passed to [`GameService`](crate::GameService) at construction so tests
/// can substitute a deterministic strategy. Any `Fn() -> String` closure
/// that is `Send + Sync` also qualifies.
pub trait IdGenerator: Send + Sync {
    /// Produces the next id.
    fn next_id(&self) -> GameId;
}

impl<F> IdGenerator for F
where
    F: Fn() -> GameId + Send + Sync,
{
    fn next_id(&self) -> GameId {
        self()
    }
}

/// Random v4 UUIDs, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> GameId {
        uuid::Uuid::new_v4().to_string()
    }
}

/// `<prefix>-0`, `<prefix>-1`, ... for reproducible runs.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator whose ids start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> GameId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
