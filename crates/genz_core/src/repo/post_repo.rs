//! Post repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered post collection (most-recent-first).
//! - Swap whole post snapshots on write instead of mutating them.
//!
//! # Invariants
//! - Inserted posts land at the front of the collection.
//! - `replace` keeps the position of the replaced post.
//! - An `Arc<Post>` handed out by a read is never mutated afterwards.

use crate::model::post::Post;
use std::sync::Arc;

/// Repository interface for post storage.
pub trait PostRepository {
    /// Prepends one post and returns its shared snapshot.
    fn insert_front(&mut self, post: Post) -> Arc<Post>;
    /// Replaces the post with the same id. Returns `None` when absent.
    fn replace(&mut self, post: Post) -> Option<Arc<Post>>;
    /// Gets one post by id.
    fn get(&self, id: &str) -> Option<Arc<Post>>;
    /// Lists all posts, most-recent-first.
    fn list(&self) -> Vec<Arc<Post>>;
    fn len(&self) -> usize;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed post repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Vec<Arc<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from posts already in display order.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: posts.into_iter().map(Arc::new).collect(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}

impl PostRepository for InMemoryPostRepository {
    fn insert_front(&mut self, post: Post) -> Arc<Post> {
        let post = Arc::new(post);
        self.posts.insert(0, Arc::clone(&post));
        post
    }

    fn replace(&mut self, post: Post) -> Option<Arc<Post>> {
        let index = self.position(&post.id)?;
        let post = Arc::new(post);
        self.posts[index] = Arc::clone(&post);
        Some(post)
    }

    fn get(&self, id: &str) -> Option<Arc<Post>> {
        self.position(id).map(|index| Arc::clone(&self.posts[index]))
    }

    fn list(&self) -> Vec<Arc<Post>> {
        self.posts.clone()
    }

    fn len(&self) -> usize {
        self.posts.len()
    }
}
