//! Post store use-case service.
//!
//! # Responsibility
//! - Provide create/update/react/list entry points over a post repository.
//! - Own post id generation through an injectable `IdSource`.
//!
//! # Invariants
//! - Every operation is total; an unusable input degrades to a no-op.
//! - A no-op touches no state, not even a counter.
//! - Mutations publish a new `Arc<Post>` snapshot and never edit an old one.
//! - New posts are prepended (most-recent-first).

use crate::id::{IdSource, UuidIdSource};
use crate::model::post::{Post, PostId, PostPatch};
use crate::repo::post_repo::{InMemoryPostRepository, PostRepository};
use log::{debug, info, warn};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

const MAX_ID_ATTEMPTS: usize = 16;

/// Post collection facade over a repository implementation.
pub struct PostStore<R: PostRepository = InMemoryPostRepository> {
    repo: R,
    ids: Box<dyn IdSource>,
}

impl<R: PostRepository> PostStore<R> {
    /// Creates a store with random post ids.
    pub fn new(repo: R) -> Self {
        Self::with_id_source(repo, Box::new(UuidIdSource))
    }

    /// Creates a store with a caller-provided id source.
    pub fn with_id_source(repo: R, ids: Box<dyn IdSource>) -> Self {
        Self { repo, ids }
    }

    /// Creates one post and prepends it to the collection.
    ///
    /// # Contract
    /// - Empty `title` is a no-op returning `None`; whitespace is a title.
    /// - `author_id` is stored as given, even when no such user exists.
    /// - Reactions start at zero.
    pub fn create_post(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Option<Arc<Post>> {
        let title = title.into();
        if title.is_empty() {
            debug!("event=post_create module=post_store status=skipped reason=empty_title");
            return None;
        }

        let Some(id) = self.fresh_id() else {
            warn!(
                "event=post_create module=post_store status=skipped reason=id_exhausted attempts={}",
                MAX_ID_ATTEMPTS
            );
            return None;
        };
        let post = self
            .repo
            .insert_front(Post::new(id, title, content, author_id));
        info!(
            "event=post_create module=post_store status=ok post_id={} author_id={}",
            post.id, post.author_id
        );
        Some(post)
    }

    /// Merges the supplied fields into an existing post.
    ///
    /// Unknown `id` or an empty patch is a no-op returning `None`.
    pub fn update_post(&mut self, id: &str, patch: &PostPatch) -> Option<Arc<Post>> {
        if patch.is_empty() {
            return None;
        }
        let Some(current) = self.repo.get(id) else {
            debug!("event=post_update module=post_store status=skipped reason=not_found post_id={id}");
            return None;
        };
        let updated = self.repo.replace(current.patched(patch))?;
        info!(
            "event=post_update module=post_store status=ok post_id={} title={} content={}",
            id,
            patch.title.is_some(),
            patch.content.is_some()
        );
        Some(updated)
    }

    /// Adds one reaction to an open slot.
    ///
    /// Unknown `id`, the locked slot and out-of-range slots are no-ops
    /// returning `None`.
    pub fn increment_reaction(&mut self, id: &str, slot: usize) -> Option<Arc<Post>> {
        let current = self.repo.get(id)?;
        let Some(next) = current.with_reaction(slot) else {
            debug!(
                "event=post_react module=post_store status=skipped reason=slot_closed post_id={id} slot={slot}"
            );
            return None;
        };
        let updated = self.repo.replace(next)?;
        debug!("event=post_react module=post_store status=ok post_id={id} slot={slot}");
        Some(updated)
    }

    /// Gets one post by id.
    pub fn get_post(&self, id: &str) -> Option<Arc<Post>> {
        self.repo.get(id)
    }

    /// Returns a full snapshot of the collection, most-recent-first.
    pub fn list_posts(&self) -> Vec<Arc<Post>> {
        self.repo.list()
    }

    /// Returns posts written by `author_id`, in collection order.
    pub fn posts_by_author(&self, author_id: &str) -> Vec<Arc<Post>> {
        self.repo
            .list()
            .into_iter()
            .filter(|post| post.author_id == author_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    fn fresh_id(&mut self) -> Option<PostId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_post_id();
            if !candidate.trim().is_empty() && !self.repo.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl<R: PostRepository + Debug> Debug for PostStore<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::PostStore;
    use crate::id::IdSource;
    use crate::model::post::{Post, PostPatch, Reactions};
    use crate::repo::post_repo::InMemoryPostRepository;

    struct FixedIdSource(&'static str);

    impl IdSource for FixedIdSource {
        fn next_post_id(&mut self) -> String {
            self.0.to_string()
        }
    }

    fn store_with(posts: Vec<Post>, ids: &'static str) -> PostStore {
        PostStore::with_id_source(
            InMemoryPostRepository::with_posts(posts),
            Box::new(FixedIdSource(ids)),
        )
    }

    #[test]
    fn create_post_skips_empty_title() {
        let mut store = store_with(Vec::new(), "p9");
        assert!(store.create_post("", "body", "u1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn create_post_accepts_whitespace_title() {
        let mut store = store_with(Vec::new(), "p9");
        let post = store.create_post(" ", "body", "u1").expect("created");
        assert_eq!(post.title, " ");
        assert_eq!(post.id, "p9");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_post_gives_up_when_source_only_repeats_taken_ids() {
        let mut store = store_with(vec![Post::new("p1", "taken", "", "u1")], "p1");
        assert!(store.create_post("New", "", "u1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_post_with_empty_patch_is_noop() {
        let mut store = store_with(vec![Post::new("p1", "Hello", "", "u1")], "p9");
        let before = store.get_post("p1").expect("seeded");
        assert!(store.update_post("p1", &PostPatch::default()).is_none());
        let after = store.get_post("p1").expect("seeded");
        assert!(std::sync::Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn increment_reaction_out_of_range_is_noop() {
        let mut store = store_with(vec![Post::new("p1", "Hello", "", "u1")], "p9");
        assert!(store.increment_reaction("p1", 5).is_none());
        assert_eq!(
            store.get_post("p1").expect("seeded").reactions.as_slice(),
            &[0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn increment_reaction_at_counter_max_is_noop() {
        let mut post = Post::new("p1", "Hello", "", "u1");
        post.reactions = Reactions::try_from(vec![0, u32::MAX, 0, 0, 0]).expect("valid shape");
        let mut store = store_with(vec![post], "p9");
        let before = store.get_post("p1").expect("seeded");

        assert!(store.increment_reaction("p1", 1).is_none());
        let after = store.get_post("p1").expect("seeded");
        assert!(std::sync::Arc::ptr_eq(&before, &after));
    }
}
