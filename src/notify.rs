//! Toast notifications raised by the request controller.
//!
//! Only two shapes exist: a fixed success message and a failure carrying the
//! reason. The queue keeps the most recent `limit` toasts and drops each one
//! after its time to live.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const SUCCESS_TITLE: &str = "Analysis Complete!";
pub const SUCCESS_DESCRIPTION: &str = "Your sentiment analysis has been successfully completed.";
pub const FAILURE_TITLE: &str = "Analysis Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Informational,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub style: NotificationStyle,
}

impl Notification {
    pub fn analysis_complete() -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
            style: NotificationStyle::Informational,
        }
    }

    pub fn analysis_failed(reason: impl Into<String>) -> Self {
        Self {
            title: FAILURE_TITLE.to_string(),
            description: reason.into(),
            style: NotificationStyle::Destructive,
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    limit: usize,
    ttl: Duration,
    emitted: usize,
}

impl ToastQueue {
    pub fn new(limit: usize, ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            ttl,
            emitted: 0,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        tracing::info!(
            title = %notification.title,
            style = ?notification.style,
            "Notification raised"
        );
        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
        self.emitted += 1;
        while self.toasts.len() > self.limit {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than the time to live.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|toast| &toast.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Total notifications raised since creation, including expired ones.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(1, Duration::from_secs(5))
    }
}
