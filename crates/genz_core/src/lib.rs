//! Core domain logic for GenZ.
//! This crate is the single source of truth for post, user and
//! notification invariants and for per-post view/edit state.

pub mod config;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod seed;
pub mod service;
pub mod session;
pub mod view;

pub use config::CoreConfig;
pub use id::{IdSource, SequentialIdSource, UuidIdSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::Notification;
pub use model::post::{
    Post, PostId, PostPatch, ReactionSlotKind, Reactions, ReactionsError, LOCKED_REACTION_SLOT,
    REACTION_SLOT_COUNT,
};
pub use model::user::{User, UserId};
pub use repo::post_repo::{InMemoryPostRepository, PostRepository};
pub use repo::user_repo::{UserDirectory, UNKNOWN_AUTHOR};
pub use route::{Route, RouteError};
pub use service::editor::{EditDraft, EditorAction, EditorError, EditorState, PostDetailEditor};
pub use service::notification_service::{canonical_notifications, NotificationCenter};
pub use service::post_service::PostStore;
pub use service::resolver::{EntityResolver, Resolution};
pub use session::AppSession;
pub use view::{PostCard, View, NO_POSTS_TEXT, POST_NOT_FOUND_TEXT, USER_NOT_FOUND_TEXT};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
