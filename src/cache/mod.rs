// SPDX-License-Identifier: MPL-2.0

//! In-memory entity caches.
//!
//! Each cache keeps the last known server state for one entity type behind a
//! lock. Every state transition (loading flag plus record mutation) happens
//! under a single write guard and no guard is held across an `.await`, so
//! readers never observe a half-applied operation.

mod comments;
mod posts;
mod users;

pub use comments::{CommentCache, CommentState};
pub use posts::{PostCache, PostState};
pub use users::{UserCache, UserState};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Records of one entity type plus request metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub records: Vec<T>,
    /// Total count reported by the server
    pub total: u64,
    pub loading: bool,
    /// Message of the last failed operation
    pub error: Option<String>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }
}

impl<T> Envelope<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    /// Records are left untouched: stale but available
    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().expect("cache lock poisoned")
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().expect("cache lock poisoned")
}
