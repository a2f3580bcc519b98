//! User domain model.

use serde::{Deserialize, Serialize};

/// Stable identifier for a user (`u1`, `u2`, ...).
pub type UserId = String;

/// Author record. Users are never created or mutated after session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
