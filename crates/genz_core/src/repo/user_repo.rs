//! Read-only user directory.
//!
//! # Invariants
//! - The roster is fixed at construction; no mutation API exists.
//! - A missing user resolves to `UNKNOWN_AUTHOR` at display time.

use crate::model::user::User;

/// Display fallback for a dangling `author_id`.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Immutable set of authors.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Returns the user's name, or `UNKNOWN_AUTHOR` when absent.
    pub fn display_name(&self, id: &str) -> &str {
        self.find_by_id(id)
            .map(|user| user.name.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{UserDirectory, UNKNOWN_AUTHOR};
    use crate::model::user::User;

    #[test]
    fn display_name_falls_back_for_unknown_ids() {
        let directory = UserDirectory::new([User::new("u1", "Alice")]);
        assert_eq!(directory.display_name("u1"), "Alice");
        assert_eq!(directory.display_name("ghost"), UNKNOWN_AUTHOR);
        assert!(directory.find_by_id("ghost").is_none());
    }
}
