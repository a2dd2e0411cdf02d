//! Transient notifications (the toast strip).
//!
//! Notifications are pushed by handlers and expire on `Tick` once their
//! time-to-live has passed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most notifications kept at once; older ones are dropped first
pub const MAX_NOTIFICATIONS: usize = 3;

pub const COPIED_TITLE: &str = "Command copied!";
pub const LOADED_TITLE: &str = "Command loaded!";
pub const WRONG_FORMAT_TITLE: &str = "Wrong format";
pub const PARSE_ERROR_TITLE: &str = "Parse error";
pub const CLIPBOARD_ERROR_TITLE: &str = "Clipboard unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: Option<String>,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: None,
            created_at: Instant::now(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title)
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Bounded queue of visible notifications
#[derive(Debug, Clone)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            ttl,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            "Notification ({:?}): {}",
            notification.level,
            notification.title
        );
        if self.items.len() == MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Drop notifications older than the time-to-live
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
    }

    /// Dismiss the oldest notification
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.items.pop_front()
    }

    /// Most recent notification
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
