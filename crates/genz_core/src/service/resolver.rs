//! Entity resolution for path parameters.
//!
//! # Responsibility
//! - Map a post/user id to the live entity or a not-found outcome.
//! - Apply the `Unknown` fallback for dangling author references.
//!
//! # Invariants
//! - Resolutions read current store state on every call; nothing is cached.
//! - A miss is a value (`Resolution::NotFound`), never an error.

use crate::model::post::Post;
use crate::model::user::User;
use crate::repo::post_repo::PostRepository;
use crate::repo::user_repo::UserDirectory;
use crate::service::post_service::PostStore;
use std::sync::Arc;

/// Outcome of resolving an entity by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    NotFound,
}

impl<T> Resolution<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Found(value) => Resolution::Found(f(value)),
            Self::NotFound => Resolution::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(found) => Self::Found(found),
            None => Self::NotFound,
        }
    }
}

/// Borrowing resolver over the post store and user directory.
///
/// Cheap to build; construct one per lookup so it always sees fresh state.
pub struct EntityResolver<'a, R: PostRepository> {
    posts: &'a PostStore<R>,
    users: &'a UserDirectory,
}

impl<'a, R: PostRepository> EntityResolver<'a, R> {
    pub fn new(posts: &'a PostStore<R>, users: &'a UserDirectory) -> Self {
        Self { posts, users }
    }

    /// Linear lookup of a post by id.
    pub fn resolve_post(&self, post_id: &str) -> Resolution<Arc<Post>> {
        self.posts.get_post(post_id).into()
    }

    pub fn resolve_user(&self, user_id: &str) -> Resolution<&'a User> {
        self.users.find_by_id(user_id).into()
    }

    /// Author display name for `post`, or `Unknown` when dangling.
    pub fn author_name(&self, post: &Post) -> &'a str {
        self.users.display_name(&post.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityResolver, Resolution};
    use crate::model::post::{Post, PostPatch};
    use crate::model::user::User;
    use crate::repo::post_repo::InMemoryPostRepository;
    use crate::repo::user_repo::UserDirectory;
    use crate::service::post_service::PostStore;

    #[test]
    fn resolve_post_sees_updates_made_between_calls() {
        let users = UserDirectory::new([User::new("u1", "Alice")]);
        let mut store = PostStore::new(InMemoryPostRepository::with_posts([Post::new(
            "p1", "Hello", "", "u1",
        )]));

        let first = EntityResolver::new(&store, &users)
            .resolve_post("p1")
            .into_option()
            .expect("p1 exists");
        store.update_post("p1", &PostPatch::title("Edited"));
        let second = EntityResolver::new(&store, &users)
            .resolve_post("p1")
            .into_option()
            .expect("p1 exists");

        assert_eq!(first.title, "Hello");
        assert_eq!(second.title, "Edited");
    }

    #[test]
    fn dangling_author_resolves_to_unknown() {
        let users = UserDirectory::new([User::new("u1", "Alice")]);
        let store = PostStore::new(InMemoryPostRepository::with_posts([Post::new(
            "p1", "Hello", "", "u404",
        )]));
        let resolver = EntityResolver::new(&store, &users);

        let post = resolver.resolve_post("p1").into_option().expect("p1 exists");
        assert_eq!(resolver.author_name(&post), "Unknown");
        assert_eq!(resolver.resolve_user("u404"), Resolution::NotFound);
    }
}
