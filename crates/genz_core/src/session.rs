//! Application session: the store object injected into the view layer.
//!
//! # Responsibility
//! - Own the user directory, post store, notification feed and the editors
//!   of displayed posts for one session.
//! - Expose the path-to-view contract and every mutation entry point.
//!
//! # Invariants
//! - Built once per session from the fixed seed; no global defaults.
//! - Views are recomputed from current state on every call.
//! - Editors are created lazily per post id and start in `Viewing`.
//! - An editor is stored only once `begin_edit` succeeds for its post.

use crate::id::{IdSource, UuidIdSource};
use crate::model::post::{Post, PostId, PostPatch};
use crate::repo::post_repo::InMemoryPostRepository;
use crate::repo::user_repo::UserDirectory;
use crate::route::{Route, RouteError};
use crate::seed::{seed_posts, seed_users};
use crate::service::editor::{EditorError, EditorState, PostDetailEditor};
use crate::service::notification_service::NotificationCenter;
use crate::service::post_service::PostStore;
use crate::service::resolver::{EntityResolver, Resolution};
use crate::view::{PostCard, View};
use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One interactive session over the in-memory stores.
#[derive(Debug)]
pub struct AppSession {
    users: UserDirectory,
    posts: PostStore<InMemoryPostRepository>,
    notifications: NotificationCenter,
    editors: BTreeMap<PostId, PostDetailEditor>,
}

impl AppSession {
    /// Seeded session with random post ids.
    pub fn seeded() -> Self {
        Self::with_id_source(Box::new(UuidIdSource))
    }

    /// Seeded session with a caller-provided id source.
    ///
    /// # Invariants
    /// - Users: `u1 Alice`, `u2 Bob`, `u3 Charlie`.
    /// - Posts: `p1` by `u1`, `p2` by `u2`, all reactions zero.
    /// - Notification feed starts empty.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        let session = Self {
            users: UserDirectory::new(seed_users()),
            posts: PostStore::with_id_source(
                InMemoryPostRepository::with_posts(seed_posts()),
                ids,
            ),
            notifications: NotificationCenter::new(),
            editors: BTreeMap::new(),
        };
        info!(
            "event=session_open module=session status=ok users={} posts={}",
            session.users.len(),
            session.posts.len()
        );
        session
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn posts(&self) -> &PostStore<InMemoryPostRepository> {
        &self.posts
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Fresh resolver over current state.
    pub fn resolver(&self) -> EntityResolver<'_, InMemoryPostRepository> {
        EntityResolver::new(&self.posts, &self.users)
    }

    pub fn create_post(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Option<Arc<Post>> {
        self.posts.create_post(title, content, author_id)
    }

    pub fn update_post(&mut self, id: &str, patch: &PostPatch) -> Option<Arc<Post>> {
        self.posts.update_post(id, patch)
    }

    pub fn increment_reaction(&mut self, id: &str, slot: usize) -> Option<Arc<Post>> {
        self.posts.increment_reaction(id, slot)
    }

    pub fn refresh_notifications(&mut self) {
        self.notifications.refresh();
    }

    /// Current editor state for `post_id`; `Viewing` when never opened.
    pub fn editor_state(&self, post_id: &str) -> EditorState {
        self.editors
            .get(post_id)
            .map(|editor| editor.state().clone())
            .unwrap_or_default()
    }

    pub fn begin_edit(&mut self, post_id: &str) -> Result<(), EditorError> {
        if let Some(editor) = self.editors.get_mut(post_id) {
            return editor.begin_edit(&self.posts);
        }
        let mut editor = PostDetailEditor::new(post_id);
        editor.begin_edit(&self.posts)?;
        self.editors.insert(post_id.to_string(), editor);
        Ok(())
    }

    pub fn set_draft_title(
        &mut self,
        post_id: &str,
        title: impl Into<String>,
    ) -> Result<(), EditorError> {
        match self.editors.get_mut(post_id) {
            Some(editor) => editor.set_title(title),
            None => PostDetailEditor::new(post_id).set_title(title),
        }
    }

    pub fn set_draft_content(
        &mut self,
        post_id: &str,
        content: impl Into<String>,
    ) -> Result<(), EditorError> {
        match self.editors.get_mut(post_id) {
            Some(editor) => editor.set_content(content),
            None => PostDetailEditor::new(post_id).set_content(content),
        }
    }

    pub fn cancel_edit(&mut self, post_id: &str) -> Result<(), EditorError> {
        match self.editors.get_mut(post_id) {
            Some(editor) => editor.cancel(),
            None => PostDetailEditor::new(post_id).cancel(),
        }
    }

    pub fn save_edit(&mut self, post_id: &str) -> Result<Option<Arc<Post>>, EditorError> {
        match self.editors.get_mut(post_id) {
            Some(editor) => editor.save(&mut self.posts),
            None => PostDetailEditor::new(post_id).save(&mut self.posts),
        }
    }

    /// Number of posts that have been opened for editing this session.
    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Resolves `path` into the view for that screen.
    ///
    /// Entity misses are `View::UserNotFound` / `View::PostNotFound`, not
    /// errors; only an unroutable path is an error.
    pub fn view(&self, path: &str) -> Result<View, RouteError> {
        let route = Route::parse(path)?;
        debug!("event=view_resolve module=session status=ok path={}", route.path());
        Ok(self.view_route(&route))
    }

    pub fn view_route(&self, route: &Route) -> View {
        let resolver = self.resolver();
        match route {
            Route::Posts => View::Posts {
                posts: self
                    .posts
                    .list_posts()
                    .into_iter()
                    .map(|post| self.card(post))
                    .collect(),
                users: self.users.list().to_vec(),
            },
            Route::Users => View::Users {
                users: self.users.list().to_vec(),
            },
            Route::User(user_id) => match resolver.resolve_user(user_id) {
                Resolution::Found(user) => View::UserDetail {
                    user: user.clone(),
                    posts: self.posts.posts_by_author(user_id),
                },
                Resolution::NotFound => View::UserNotFound {
                    user_id: user_id.clone(),
                },
            },
            Route::Notifications => View::Notifications {
                items: self.notifications.list().to_vec(),
            },
            Route::Post(post_id) => match resolver.resolve_post(post_id) {
                Resolution::Found(post) => View::PostDetail {
                    card: self.card(post),
                    editor: self.editor_state(post_id),
                },
                Resolution::NotFound => View::PostNotFound {
                    post_id: post_id.clone(),
                },
            },
        }
    }

    fn card(&self, post: Arc<Post>) -> PostCard {
        let author_name = self.resolver().author_name(&post).to_string();
        PostCard { post, author_name }
    }
}

impl Default for AppSession {
    fn default() -> Self {
        Self::seeded()
    }
}
