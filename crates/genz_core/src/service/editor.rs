//! Per-post view/edit state machine.
//!
//! # Responsibility
//! - Track whether one displayed post is being viewed or edited.
//! - Buffer title/content edits in a draft until they are saved.
//!
//! # Invariants
//! - Initial state is `Viewing`; there is no terminal state.
//! - Draft edits never touch the stored post before `save`.
//! - A rejected transition leaves the editor exactly as it was.
//! - The editor keeps only the post id; the post is re-read on every use.

use crate::model::post::{Post, PostId, PostPatch};
use crate::repo::post_repo::PostRepository;
use crate::service::post_service::PostStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Uncommitted title/content edits for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub content: String,
}

impl EditDraft {
    /// Seeds a draft from the post's current fields.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }

    fn into_patch(self) -> PostPatch {
        PostPatch {
            title: Some(self.title),
            content: Some(self.content),
        }
    }
}

/// Editor state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Viewing,
    Editing(EditDraft),
}

impl EditorState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing(_) => "editing",
        }
    }
}

/// Editor input kinds, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    BeginEdit,
    SetTitle,
    SetContent,
    Cancel,
    Save,
}

impl EditorAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeginEdit => "begin_edit",
            Self::SetTitle => "set_title",
            Self::SetContent => "set_content",
            Self::Cancel => "cancel",
            Self::Save => "save",
        }
    }
}

/// Rejected editor inputs. The editor state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The action is not valid in the current state.
    InvalidTransition {
        action: EditorAction,
        state: &'static str,
    },
    /// The edited post does not resolve.
    PostNotFound(PostId),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { action, state } => {
                write!(f, "`{}` is not allowed while {state}", action.as_str())
            }
            Self::PostNotFound(id) => write!(f, "post not found: {id}"),
        }
    }
}

impl Error for EditorError {}

/// View/edit lifecycle for one displayed post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailEditor {
    post_id: PostId,
    state: EditorState,
}

impl PostDetailEditor {
    /// Opens an editor in `Viewing` for `post_id`.
    pub fn new(post_id: impl Into<PostId>) -> Self {
        Self {
            post_id: post_id.into(),
            state: EditorState::Viewing,
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.state {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Viewing => None,
        }
    }

    /// `Viewing -> Editing`, seeding the draft from the current post.
    pub fn begin_edit<R: PostRepository>(
        &mut self,
        store: &PostStore<R>,
    ) -> Result<(), EditorError> {
        if self.is_editing() {
            return Err(rejected(&self.post_id, EditorAction::BeginEdit, "editing"));
        }
        let post = store
            .get_post(&self.post_id)
            .ok_or_else(|| EditorError::PostNotFound(self.post_id.clone()))?;

        self.state = EditorState::Editing(EditDraft::from_post(&post));
        debug!(
            "event=editor_begin module=post_editor status=ok post_id={}",
            self.post_id
        );
        Ok(())
    }

    /// Replaces the draft title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), EditorError> {
        self.draft_mut(EditorAction::SetTitle)?.title = title.into();
        Ok(())
    }

    /// Replaces the draft content.
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), EditorError> {
        self.draft_mut(EditorAction::SetContent)?.content = content.into();
        Ok(())
    }

    /// `Editing -> Viewing`, discarding the draft.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.draft_mut(EditorAction::Cancel)?;
        self.state = EditorState::Viewing;
        debug!(
            "event=editor_cancel module=post_editor status=ok post_id={}",
            self.post_id
        );
        Ok(())
    }

    /// `Editing -> Viewing`, committing the draft through `update_post`.
    ///
    /// Returns the updated snapshot, or `None` when the store treated the
    /// update as a no-op.
    pub fn save<R: PostRepository>(
        &mut self,
        store: &mut PostStore<R>,
    ) -> Result<Option<Arc<Post>>, EditorError> {
        let draft = match std::mem::take(&mut self.state) {
            EditorState::Editing(draft) => draft,
            EditorState::Viewing => {
                return Err(rejected(&self.post_id, EditorAction::Save, "viewing"));
            }
        };

        let updated = store.update_post(&self.post_id, &draft.into_patch());
        info!(
            "event=editor_save module=post_editor status={} post_id={}",
            if updated.is_some() { "ok" } else { "skipped" },
            self.post_id
        );
        Ok(updated)
    }

    fn draft_mut(&mut self, action: EditorAction) -> Result<&mut EditDraft, EditorError> {
        match &mut self.state {
            EditorState::Editing(draft) => Ok(draft),
            EditorState::Viewing => Err(rejected(&self.post_id, action, "viewing")),
        }
    }
}

fn rejected(post_id: &str, action: EditorAction, state: &'static str) -> EditorError {
    debug!(
        "event=editor_reject module=post_editor status=error post_id={} action={} state={}",
        post_id,
        action.as_str(),
        state
    );
    EditorError::InvalidTransition { action, state }
}
