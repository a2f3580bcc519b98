//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep collection layout details out of service orchestration.
//!
//! # Invariants
//! - Repositories never hard-delete posts.
//! - Lookups that miss return `None`; absence is not an error.

pub mod post_repo;
pub mod user_repo;
