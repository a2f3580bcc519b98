//! Fixed session seed: three users and two posts.
//!
//! # Invariants
//! - Seed posts have all reaction counters at zero.
//! - Seed post order is display order (most-recent-first).

use crate::model::post::Post;
use crate::model::user::User;

pub fn seed_users() -> Vec<User> {
    vec![
        User::new("u1", "Alice"),
        User::new("u2", "Bob"),
        User::new("u3", "Charlie"),
    ]
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new("p1", "Hello world", "This is my first post", "u1"),
        Post::new("p2", "Another day", "React is fun", "u2"),
    ]
}
