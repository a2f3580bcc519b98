//! View models handed to the view layer.
//!
//! # Responsibility
//! - Carry resolved entities for each route.
//! - Own the fixed fallback strings shown for misses.
//!
//! # Invariants
//! - Views are snapshots; holding one never blocks store mutation.
//! - Miss views carry the requested id, not a partial entity.

use crate::model::notification::Notification;
use crate::model::post::{Post, ReactionSlotKind};
use crate::model::user::User;
use crate::service::editor::EditorState;
use std::sync::Arc;

pub const POST_NOT_FOUND_TEXT: &str = "Post not found";
pub const USER_NOT_FOUND_TEXT: &str = "User not found";
pub const NO_POSTS_TEXT: &str = "No posts";

/// Post paired with its resolved author display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub post: Arc<Post>,
    pub author_name: String,
}

impl PostCard {
    /// Button labels for the reaction row, in slot order.
    pub fn reaction_labels(&self) -> Vec<String> {
        self.post
            .reactions
            .slots()
            .map(|(slot, count, kind)| reaction_label(slot, count, kind))
            .collect()
    }
}

/// Label for one reaction button (`React 1: 2`, `Locked: 0`).
pub fn reaction_label(slot: usize, count: u32, kind: ReactionSlotKind) -> String {
    match kind {
        ReactionSlotKind::Open => format!("React {}: {count}", slot + 1),
        ReactionSlotKind::Locked => "Locked: 0".to_string(),
    }
}

/// Resolved content for one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// `/`: every post plus the roster for the author picker.
    Posts { posts: Vec<PostCard>, users: Vec<User> },
    /// `/users`
    Users { users: Vec<User> },
    /// `/users/:userId` hit.
    UserDetail { user: User, posts: Vec<Arc<Post>> },
    /// `/users/:userId` miss.
    UserNotFound { user_id: String },
    /// `/notifications`
    Notifications { items: Vec<Notification> },
    /// `/posts/:postId` hit, with the post's editor state.
    PostDetail { card: PostCard, editor: EditorState },
    /// `/posts/:postId` miss.
    PostNotFound { post_id: String },
}

impl View {
    /// Fixed display text for miss views; `None` for views with content.
    pub fn fallback_text(&self) -> Option<&'static str> {
        match self {
            Self::UserNotFound { .. } => Some(USER_NOT_FOUND_TEXT),
            Self::PostNotFound { .. } => Some(POST_NOT_FOUND_TEXT),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.fallback_text().is_some()
    }
}
