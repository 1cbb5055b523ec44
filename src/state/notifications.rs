//! User-facing notification queue

use std::collections::VecDeque;

/// Newest notifications win; older ones beyond this are dropped.
const MAX_NOTIFICATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Bounded queue of notifications shown in the status bar.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.queue.push_back(Notification {
            message: message.into(),
            severity,
        });
        while self.queue.len() > MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }
    }

    /// The notification currently shown.
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
