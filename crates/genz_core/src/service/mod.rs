//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the view layer decoupled from collection details.

pub mod editor;
pub mod notification_service;
pub mod post_service;
pub mod resolver;
