// SPDX-License-Identifier: MPL-2.0

use crate::api::User;
use crate::cache::{Envelope, read, write};
use std::sync::RwLock;

/// Snapshot of the user cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub envelope: Envelope<User>,
    /// Full record of the user being viewed
    pub selected: Option<User>,
    /// Projected users from the last join, used to resolve authors
    pub directory: Vec<User>,
}

/// Read-mostly user reference data
#[derive(Default)]
pub struct UserCache {
    state: RwLock<UserState>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> UserState {
        read(&self.state).clone()
    }

    pub fn users(&self) -> Vec<User> {
        read(&self.state).envelope.records.clone()
    }

    pub fn selected(&self) -> Option<User> {
        read(&self.state).selected.clone()
    }

    pub fn directory(&self) -> Vec<User> {
        read(&self.state).directory.clone()
    }

    pub fn find_in_directory(&self, id: i64) -> Option<User> {
        read(&self.state)
            .directory
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        read(&self.state).envelope.loading
    }

    pub fn error(&self) -> Option<String> {
        read(&self.state).envelope.error.clone()
    }

    pub fn begin(&self) {
        write(&self.state).envelope.begin();
    }

    pub fn fail(&self, message: String) {
        write(&self.state).envelope.fail(message);
    }

    pub fn store_page(&self, users: Vec<User>, total: u64) {
        let mut state = write(&self.state);
        state.envelope.records = users;
        state.envelope.total = total;
        state.envelope.succeed();
    }

    pub fn store_selected(&self, user: User) {
        let mut state = write(&self.state);
        state.selected = Some(user);
        state.envelope.succeed();
    }

    pub fn clear_selected(&self) {
        write(&self.state).selected = None;
    }

    pub fn set_directory(&self, users: Vec<User>) {
        write(&self.state).directory = users;
    }

    pub fn reset(&self) {
        *write(&self.state) = UserState::default();
    }
}
