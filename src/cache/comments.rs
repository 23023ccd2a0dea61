// SPDX-License-Identifier: MPL-2.0

use crate::api::Comment;
use crate::cache::{read, write};
use std::collections::HashMap;
use std::sync::RwLock;

/// Snapshot of the comment cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentState {
    /// Comments per post id
    pub partitions: HashMap<i64, Vec<Comment>>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Comments partitioned by the post they belong to
#[derive(Default)]
pub struct CommentCache {
    state: RwLock<CommentState>,
}

impl CommentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CommentState {
        read(&self.state).clone()
    }

    /// Whether comments for `post_id` were already loaded
    pub fn contains(&self, post_id: i64) -> bool {
        read(&self.state).partitions.contains_key(&post_id)
    }

    pub fn comments_for(&self, post_id: i64) -> Vec<Comment> {
        read(&self.state)
            .partitions
            .get(&post_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn find(&self, post_id: i64, id: i64) -> Option<Comment> {
        read(&self.state)
            .partitions
            .get(&post_id)?
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        read(&self.state).loading
    }

    pub fn error(&self) -> Option<String> {
        read(&self.state).error.clone()
    }

    pub fn begin(&self) {
        let mut state = write(&self.state);
        state.loading = true;
        state.error = None;
    }

    pub fn fail(&self, message: String) {
        let mut state = write(&self.state);
        state.loading = false;
        state.error = Some(message);
    }

    fn succeed(state: &mut CommentState) {
        state.loading = false;
        state.error = None;
    }

    pub fn store_partition(&self, post_id: i64, comments: Vec<Comment>) {
        let mut state = write(&self.state);
        state.partitions.insert(post_id, comments);
        Self::succeed(&mut state);
    }

    /// Append to the tail of the comment's partition, creating it if needed
    pub fn append(&self, comment: Comment) {
        let mut state = write(&self.state);
        state
            .partitions
            .entry(comment.post_id)
            .or_default()
            .push(comment);
        Self::succeed(&mut state);
    }

    /// Replace by id within the comment's partition, keeping a known user
    pub fn apply_update(&self, mut updated: Comment) -> Option<Comment> {
        let mut state = write(&self.state);
        Self::succeed(&mut state);

        let existing = state
            .partitions
            .get_mut(&updated.post_id)?
            .iter_mut()
            .find(|c| c.id == updated.id)?;
        if updated.user.is_none() {
            updated.user = existing.user.take();
        }
        *existing = updated;
        Some(existing.clone())
    }

    pub fn remove(&self, post_id: i64, id: i64) -> bool {
        let mut state = write(&self.state);
        Self::succeed(&mut state);

        let Some(partition) = state.partitions.get_mut(&post_id) else {
            return false;
        };
        let before = partition.len();
        partition.retain(|c| c.id != id);
        partition.len() < before
    }

    pub fn reset(&self) {
        *write(&self.state) = CommentState::default();
    }
}
