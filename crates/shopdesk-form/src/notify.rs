//! Output ports for user-visible effects.
//!
//! The workflow never talks to a UI directly: it reports through a
//! [`Notifier`] and moves on through a [`Navigator`]. The `*Log` types are
//! in-memory implementations that record what was emitted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A one-shot message shown to the user. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message);
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every notification. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        lock(&self.entries).clone()
    }

    /// Messages of the given kind, oldest first.
    #[must_use]
    pub fn messages(&self, kind: NotificationKind) -> Vec<String> {
        lock(&self.entries)
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationKind::Error)
    }

    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationKind::Success)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, kind: NotificationKind, message: &str) {
        lock(&self.entries).push(Notification {
            kind,
            message: message.to_owned(),
            at: Utc::now(),
        });
    }
}

/// Records every navigation target. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NavigationLog {
    paths: Arc<Mutex<Vec<String>>>,
}

impl NavigationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        lock(&self.paths).last().cloned()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, path: &str) {
        lock(&self.paths).push(path.to_owned());
    }
}
