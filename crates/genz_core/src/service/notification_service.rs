//! Notification feed service.
//!
//! # Invariants
//! - The feed is either empty or exactly the canonical set.
//! - `refresh` replaces the whole list; entries are never merged.

use crate::model::notification::Notification;
use log::info;

const CANONICAL_NOTIFICATIONS: [(&str, &str); 2] = [
    ("n1", "Alice liked your post"),
    ("n2", "Bob commented"),
];

/// Returns the fixed notification set produced by every refresh.
pub fn canonical_notifications() -> Vec<Notification> {
    CANONICAL_NOTIFICATIONS
        .iter()
        .map(|(id, text)| Notification::new(*id, *text))
        .collect()
}

/// Holds the current notification feed.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    /// Starts with an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the feed with the canonical set.
    pub fn refresh(&mut self) {
        self.items = canonical_notifications();
        info!(
            "event=notifications_refresh module=notification_center status=ok count={}",
            self.items.len()
        );
    }

    /// Drops every entry, returning to the empty feed.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn list(&self) -> &[Notification] {
        &self.items
    }
}
