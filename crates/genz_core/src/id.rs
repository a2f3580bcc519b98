//! Post id sources.
//!
//! # Responsibility
//! - Generate fresh post ids behind an injectable interface.
//! - Let tests supply deterministic ids.
//!
//! # Invariants
//! - A source never returns the same id twice on its own.
//! - Uniqueness against existing posts is checked by the store, not here.

use crate::model::post::PostId;
use uuid::Uuid;

const POST_ID_PREFIX: &str = "p_";

/// Source of fresh post ids.
pub trait IdSource: Send {
    fn next_post_id(&mut self) -> PostId;
}

/// Random ids backed by UUID v4 (`p_<32 hex chars>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_post_id(&mut self) -> PostId {
        format!("{POST_ID_PREFIX}{}", Uuid::new_v4().simple())
    }
}

/// Monotonic ids (`p_1`, `p_2`, ...).
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::with_prefix(POST_ID_PREFIX)
    }

    /// Starts a counter at 1 with a caller-provided prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn next_post_id(&mut self) -> PostId {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
