//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical post record and its reaction counters.
//! - Provide copy-on-write helpers so rendered snapshots stay valid.
//!
//! # Invariants
//! - `id` is stable and never reused for another post in one store.
//! - `reactions` always holds `REACTION_SLOT_COUNT` counters.
//! - `reactions[LOCKED_REACTION_SLOT]` is always `0`.
//! - `author_id` is not validated against the user directory.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a post (`p1`, `p_...`).
pub type PostId = String;

/// Number of reaction counters carried by every post.
pub const REACTION_SLOT_COUNT: usize = 5;

/// Index of the reaction slot that can never be incremented.
pub const LOCKED_REACTION_SLOT: usize = 4;

/// Classification of a reaction slot for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionSlotKind {
    /// Slot accepts increments.
    Open,
    /// Slot is permanently fixed at zero.
    Locked,
}

/// Reaction decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionsError {
    WrongLength(usize),
    LockedSlotNonZero(u32),
}

impl Display for ReactionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "reactions must have exactly {REACTION_SLOT_COUNT} counters, got {len}"
            ),
            Self::LockedSlotNonZero(value) => write!(
                f,
                "reaction slot {LOCKED_REACTION_SLOT} is locked and must be 0, got {value}"
            ),
        }
    }
}

impl Error for ReactionsError {}

/// Fixed-size reaction counters for one post.
///
/// Serialized as a plain JSON array of five integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Reactions([u32; REACTION_SLOT_COUNT]);

impl Reactions {
    /// All counters at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Returns the counter at `slot`, or `None` when out of range.
    pub fn get(&self, slot: usize) -> Option<u32> {
        self.0.get(slot).copied()
    }

    /// Returns the counters as a slice in slot order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Returns a copy with `slot` incremented by one.
    ///
    /// Returns `None` for the locked slot, out-of-range slots and a counter
    /// already at `u32::MAX`, so the caller can treat all three as a no-op
    /// without touching any state.
    pub fn incremented(&self, slot: usize) -> Option<Self> {
        if slot_kind(slot)? == ReactionSlotKind::Locked {
            return None;
        }
        let mut next = *self;
        next.0[slot] = next.0[slot].checked_add(1)?;
        Some(next)
    }

    /// Iterates `(slot, count, kind)` triples for rendering.
    pub fn slots(&self) -> impl Iterator<Item = (usize, u32, ReactionSlotKind)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(slot, count)| slot_kind(slot).map(|kind| (slot, *count, kind)))
    }
}

impl TryFrom<Vec<u32>> for Reactions {
    type Error = ReactionsError;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        let counters: [u32; REACTION_SLOT_COUNT] = value
            .try_into()
            .map_err(|rejected: Vec<u32>| ReactionsError::WrongLength(rejected.len()))?;
        if counters[LOCKED_REACTION_SLOT] != 0 {
            return Err(ReactionsError::LockedSlotNonZero(
                counters[LOCKED_REACTION_SLOT],
            ));
        }
        Ok(Self(counters))
    }
}

impl From<Reactions> for Vec<u32> {
    fn from(value: Reactions) -> Self {
        value.0.to_vec()
    }
}

/// Returns the kind of `slot`, or `None` when it is out of range.
pub fn slot_kind(slot: usize) -> Option<ReactionSlotKind> {
    match slot {
        LOCKED_REACTION_SLOT => Some(ReactionSlotKind::Locked),
        s if s < REACTION_SLOT_COUNT => Some(ReactionSlotKind::Open),
        _ => None,
    }
}

/// Canonical post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Serialized as `authorId` to match external schema naming.
    #[serde(rename = "authorId")]
    pub author_id: UserId,
    pub reactions: Reactions,
}

impl Post {
    /// Creates a post with all reaction counters at zero.
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<UserId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author_id: author_id.into(),
            reactions: Reactions::zeroed(),
        }
    }

    /// Returns a new snapshot with `patch` merged in.
    ///
    /// `id`, `author_id` and `reactions` are carried over unchanged.
    pub fn patched(&self, patch: &PostPatch) -> Self {
        Self {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            content: patch.content.clone().unwrap_or_else(|| self.content.clone()),
            ..self.clone()
        }
    }

    /// Returns a new snapshot with one more reaction in `slot`.
    pub fn with_reaction(&self, slot: usize) -> Option<Self> {
        let reactions = self.reactions.incremented(slot)?;
        Some(Self {
            reactions,
            ..self.clone()
        })
    }
}

/// Partial field update for a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
