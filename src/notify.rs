//! Toast Notifications
//!
//! Transient success/error messages shown at the top center of the screen.

use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Where toasts are anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub position: ToastPosition,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            position: ToastPosition::TopCenter,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            position: ToastPosition::TopCenter,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Icon shown next to the message
    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
        }
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Notification>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every pending toast
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }
}

/// The one visible toast of a kind.
///
/// Each `show` bumps the generation; an expiry timer only clears the slot if
/// no newer toast replaced the one it was started for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    message: Option<String>,
    generation: u64,
}

impl ToastSlot {
    /// Replace the visible message and return the ticket for its expiry
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.generation
    }

    /// Clear the slot if it still shows the toast behind `generation`
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
