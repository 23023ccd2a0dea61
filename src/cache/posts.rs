// SPDX-License-Identifier: MPL-2.0

use crate::api::Post;
use crate::cache::{Envelope, read, write};
use crate::query::{PostSource, QuerySelector};
use std::sync::RwLock;

/// Snapshot of the post cache
#[derive(Debug, Clone, PartialEq)]
pub struct PostState {
    pub envelope: Envelope<Post>,
    pub selector: QuerySelector,
    /// Known tags for the filter selector
    pub tags: Vec<String>,
}

/// Flat post list, the selector that produced it, and the tag list
pub struct PostCache {
    state: RwLock<PostState>,
    /// Restored on `reset`
    initial_selector: QuerySelector,
}

impl PostCache {
    pub fn new(selector: QuerySelector) -> Self {
        Self {
            state: RwLock::new(PostState {
                envelope: Envelope::default(),
                selector: selector.clone(),
                tags: Vec::new(),
            }),
            initial_selector: selector,
        }
    }

    pub fn snapshot(&self) -> PostState {
        read(&self.state).clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        read(&self.state).envelope.records.clone()
    }

    pub fn total(&self) -> u64 {
        read(&self.state).envelope.total
    }

    pub fn is_loading(&self) -> bool {
        read(&self.state).envelope.loading
    }

    pub fn error(&self) -> Option<String> {
        read(&self.state).envelope.error.clone()
    }

    pub fn selector(&self) -> QuerySelector {
        read(&self.state).selector.clone()
    }

    pub fn tags(&self) -> Vec<String> {
        read(&self.state).tags.clone()
    }

    pub fn update_selector(&self, f: impl FnOnce(&mut QuerySelector)) {
        f(&mut write(&self.state).selector);
    }

    /// Move the window forward unless it already covers the last record.
    /// Search results are never windowed, so they have no next page.
    pub fn advance_page(&self) -> bool {
        let mut state = write(&self.state);
        if matches!(state.selector.source(), PostSource::Search(_)) {
            return false;
        }
        match state.selector.next_skip(state.envelope.total) {
            Some(skip) => {
                state.selector.skip = skip;
                true
            }
            None => false,
        }
    }

    pub fn set_tags(&self, tags: Vec<String>) {
        write(&self.state).tags = tags;
    }

    pub fn begin(&self) {
        write(&self.state).envelope.begin();
    }

    pub fn fail(&self, message: String) {
        write(&self.state).envelope.fail(message);
    }

    /// Record an error without touching the loading flag
    pub fn record_error(&self, message: String) {
        write(&self.state).envelope.error = Some(message);
    }

    /// Replace the list with a freshly fetched one
    pub fn store_page(&self, posts: Vec<Post>, total: u64) {
        let mut state = write(&self.state);
        state.envelope.records = posts;
        state.envelope.total = total;
        state.envelope.succeed();
    }

    /// Put a newly created post at the front of the list
    pub fn insert_front(&self, post: Post) {
        let mut state = write(&self.state);
        state.envelope.records.insert(0, post);
        state.envelope.total += 1;
        state.envelope.succeed();
    }

    /// Replace the post with the same id, keeping its resolved author.
    ///
    /// Update responses never carry `author`, so the previously joined one
    /// is carried over. Returns the merged post when it was cached.
    pub fn apply_update(&self, mut updated: Post) -> Option<Post> {
        let mut state = write(&self.state);
        state.envelope.succeed();

        let existing = state
            .envelope
            .records
            .iter_mut()
            .find(|p| p.id == updated.id)?;
        if updated.author.is_none() {
            updated.author = existing.author.take();
        }
        *existing = updated;
        Some(existing.clone())
    }

    /// Drop a post the server confirmed deleted. The server-side total shrinks
    /// even when the post is outside the cached window.
    pub fn remove(&self, id: i64) -> bool {
        let mut state = write(&self.state);
        state.envelope.succeed();

        let before = state.envelope.records.len();
        state.envelope.records.retain(|p| p.id != id);
        state.envelope.total = state.envelope.total.saturating_sub(1);
        state.envelope.records.len() < before
    }

    pub fn reset(&self) {
        *write(&self.state) = PostState {
            envelope: Envelope::default(),
            selector: self.initial_selector.clone(),
            tags: Vec::new(),
        };
    }
}
