//! Domain model for posts, users and notifications.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Enforce reaction-slot invariants at construction and decode time.
//!
//! # Invariants
//! - Every post carries exactly five reaction counters.
//! - The locked reaction slot always reads zero.
//! - Users and notifications are immutable values once built.

pub mod notification;
pub mod post;
pub mod user;
