//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the path-to-view contract and mutation entry points to Dart via
//!   FRB.
//! - Own the single process session the Flutter view layer talks to.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call other than `session_reset` fails softly until a session exists.
//! - Calls are serialized through one session lock.

use genz_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppSession, EditorState, Notification, PostCard, PostPatch, User, View,
};
use log::{info, warn};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static SESSION: Lazy<Mutex<Option<AppSession>>> = Lazy::new(|| Mutex::new(None));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Post row for list/detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    /// Resolved author name, `Unknown` for dangling authors.
    pub author_name: String,
    /// Five counters; the last one is the locked slot.
    pub reactions: Vec<u32>,
    /// Button labels in slot order (`React 1: 0`, ..., `Locked: 0`).
    pub reaction_labels: Vec<String>,
}

/// User row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    pub id: String,
    pub name: String,
}

/// Notification row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: String,
    pub text: String,
}

/// Flattened view envelope for one path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewResponse {
    /// `posts|users|user_detail|user_not_found|notifications|post_detail|post_not_found|error`.
    pub kind: String,
    pub posts: Vec<PostItem>,
    pub users: Vec<UserItem>,
    pub notifications: Vec<NotificationItem>,
    /// `viewing|editing` for `post_detail`, empty otherwise.
    pub editor_state: String,
    pub draft_title: Option<String>,
    pub draft_content: Option<String>,
    /// Fallback display text for misses, or the error message.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the call changed state.
    pub ok: bool,
    /// Affected post id, when there is one.
    pub post_id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, post_id: Option<String>) -> Self {
        Self {
            ok: true,
            post_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            post_id: None,
            message: message.into(),
        }
    }
}

/// Replaces the process session with a freshly seeded one.
///
/// # FFI contract
/// - Drops every post created, every reaction and every open editor.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() -> ActionResponse {
    let mut guard = match SESSION.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("event=session_reset module=ffi status=recovered reason=poisoned_lock");
            poisoned.into_inner()
        }
    };
    *guard = Some(AppSession::seeded());
    info!("event=session_reset module=ffi status=ok");
    ActionResponse::success("Session ready.", None)
}

/// Resolves one navigation path into a view envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn view_path(path: String) -> ViewResponse {
    match with_session(|session| session.view(path.as_str())) {
        Ok(Ok(view)) => to_view_response(view),
        Ok(Err(err)) => error_view(err.to_string()),
        Err(err) => error_view(err),
    }
}

/// Creates a post; a skipped create leaves the store untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn post_create(title: String, content: String, author_id: String) -> ActionResponse {
    match with_session(|session| session.create_post(title, content, author_id)) {
        Ok(Some(post)) => ActionResponse::success("Post created.", Some(post.id.clone())),
        Ok(None) => ActionResponse::failure("post_create skipped"),
        Err(err) => ActionResponse::failure(format!("post_create failed: {err}")),
    }
}

/// Merges the provided fields into an existing post.
#[flutter_rust_bridge::frb(sync)]
pub fn post_update(
    post_id: String,
    title: Option<String>,
    content: Option<String>,
) -> ActionResponse {
    let patch = PostPatch { title, content };
    match with_session(|session| session.update_post(post_id.as_str(), &patch)) {
        Ok(Some(post)) => ActionResponse::success("Post updated.", Some(post.id.clone())),
        Ok(None) => ActionResponse::failure(format!("post_update skipped: {post_id}")),
        Err(err) => ActionResponse::failure(format!("post_update failed: {err}")),
    }
}

/// Adds one reaction; the locked slot and unknown posts are no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn post_react(post_id: String, slot: u32) -> ActionResponse {
    let slot = usize::try_from(slot).unwrap_or(usize::MAX);
    match with_session(|session| session.increment_reaction(post_id.as_str(), slot)) {
        Ok(Some(post)) => ActionResponse::success("Reaction added.", Some(post.id.clone())),
        Ok(None) => ActionResponse::failure(format!("post_react skipped: {post_id} slot {slot}")),
        Err(err) => ActionResponse::failure(format!("post_react failed: {err}")),
    }
}

/// Replaces the notification feed with the canonical set.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications_refresh() -> ActionResponse {
    match with_session(AppSession::refresh_notifications) {
        Ok(()) => ActionResponse::success("Notifications refreshed.", None),
        Err(err) => ActionResponse::failure(format!("notifications_refresh failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_begin(post_id: String) -> ActionResponse {
    editor_action("editor_begin", post_id, |session, id| session.begin_edit(id))
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_set_title(post_id: String, title: String) -> ActionResponse {
    editor_action("editor_set_title", post_id, |session, id| {
        session.set_draft_title(id, title)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_set_content(post_id: String, content: String) -> ActionResponse {
    editor_action("editor_set_content", post_id, |session, id| {
        session.set_draft_content(id, content)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn editor_cancel(post_id: String) -> ActionResponse {
    editor_action("editor_cancel", post_id, |session, id| session.cancel_edit(id))
}

/// Commits the draft and returns the editor to viewing.
#[flutter_rust_bridge::frb(sync)]
pub fn editor_save(post_id: String) -> ActionResponse {
    editor_action("editor_save", post_id, |session, id| {
        session.save_edit(id).map(|_| ())
    })
}

fn editor_action(
    name: &str,
    post_id: String,
    f: impl FnOnce(&mut AppSession, &str) -> Result<(), genz_core::EditorError>,
) -> ActionResponse {
    match with_session(|session| f(session, post_id.as_str())) {
        Ok(Ok(())) => ActionResponse::success("Editor updated.", Some(post_id)),
        Ok(Err(err)) => ActionResponse::failure(format!("{name} rejected: {err}")),
        Err(err) => ActionResponse::failure(format!("{name} failed: {err}")),
    }
}

fn with_session<T>(f: impl FnOnce(&mut AppSession) -> T) -> Result<T, String> {
    let mut guard = SESSION
        .lock()
        .map_err(|_| "session lock poisoned; call session_reset".to_string())?;
    let session = guard
        .as_mut()
        .ok_or_else(|| "session not initialized; call session_reset".to_string())?;
    Ok(f(session))
}

fn to_view_response(view: View) -> ViewResponse {
    let message = view.fallback_text().unwrap_or_default().to_string();
    match view {
        View::Posts { posts, users } => ViewResponse {
            kind: "posts".to_string(),
            posts: posts.iter().map(to_post_item).collect(),
            users: users.iter().map(to_user_item).collect(),
            ..ViewResponse::default()
        },
        View::Users { users } => ViewResponse {
            kind: "users".to_string(),
            users: users.iter().map(to_user_item).collect(),
            ..ViewResponse::default()
        },
        View::UserDetail { user, posts } => ViewResponse {
            kind: "user_detail".to_string(),
            users: vec![to_user_item(&user)],
            posts: posts
                .into_iter()
                .map(|post| {
                    to_post_item(&PostCard {
                        post,
                        author_name: user.name.clone(),
                    })
                })
                .collect(),
            ..ViewResponse::default()
        },
        View::UserNotFound { .. } => ViewResponse {
            kind: "user_not_found".to_string(),
            message,
            ..ViewResponse::default()
        },
        View::Notifications { items } => ViewResponse {
            kind: "notifications".to_string(),
            notifications: items.iter().map(to_notification_item).collect(),
            ..ViewResponse::default()
        },
        View::PostDetail { card, editor } => {
            let (draft_title, draft_content) = match &editor {
                EditorState::Editing(draft) => {
                    (Some(draft.title.clone()), Some(draft.content.clone()))
                }
                EditorState::Viewing => (None, None),
            };
            ViewResponse {
                kind: "post_detail".to_string(),
                posts: vec![to_post_item(&card)],
                editor_state: editor.label().to_string(),
                draft_title,
                draft_content,
                ..ViewResponse::default()
            }
        }
        View::PostNotFound { .. } => ViewResponse {
            kind: "post_not_found".to_string(),
            message,
            ..ViewResponse::default()
        },
    }
}

fn error_view(message: String) -> ViewResponse {
    ViewResponse {
        kind: "error".to_string(),
        message,
        ..ViewResponse::default()
    }
}

fn to_post_item(card: &PostCard) -> PostItem {
    PostItem {
        id: card.post.id.clone(),
        title: card.post.title.clone(),
        content: card.post.content.clone(),
        author_id: card.post.author_id.clone(),
        author_name: card.author_name.clone(),
        reactions: card.post.reactions.as_slice().to_vec(),
        reaction_labels: card.reaction_labels(),
    }
}

fn to_user_item(user: &User) -> UserItem {
    UserItem {
        id: user.id.clone(),
        name: user.name.clone(),
    }
}

fn to_notification_item(item: &Notification) -> NotificationItem {
    NotificationItem {
        id: item.id.clone(),
        text: item.text.clone(),
    }
}
