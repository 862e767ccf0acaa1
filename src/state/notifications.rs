//! Toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen unless configured otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Number of toasts rendered at once
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, duration: Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

/// Queue of toasts, oldest first
#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    duration: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            duration,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        self.queue.push_back(Notification {
            kind,
            message,
            created_at: Instant::now(),
        });
    }

    /// Drop toasts that have been shown long enough
    pub fn expire(&mut self) {
        let duration = self.duration;
        self.queue.retain(|n| !n.is_expired(duration));
    }

    /// Dismiss the newest toast
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.queue.pop_back()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    /// Toasts to render, newest last
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        let skip = self.queue.len().saturating_sub(MAX_VISIBLE_TOASTS);
        self.queue.iter().skip(skip)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
