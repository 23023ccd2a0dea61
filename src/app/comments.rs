// SPDX-License-Identifier: MPL-2.0

use crate::api::{Api, ClientError, Comment, CommentPatch, NewComment, UserListParams};
use crate::app::App;
use crate::config::COMMENT_USER_FIELDS;
use crate::query::attach_comment_users;
use tracing::{debug, warn};

impl<A: Api> App<A> {
    /// Load comments for a post unless they are already cached
    pub async fn fetch_comments(&self, post_id: i64) {
        if self.comments.contains(post_id) {
            debug!(post_id, "comments already cached");
            return;
        }
        self.load_comments(post_id).await;
    }

    /// Reload comments for a post even when they are cached
    pub async fn refresh_comments(&self, post_id: i64) {
        self.load_comments(post_id).await;
    }

    async fn load_comments(&self, post_id: i64) {
        self.comments.begin();
        match self.api.list_comments(post_id).await {
            Ok(page) => {
                let mut comments = page.items;
                self.join_comment_users(&mut comments).await;
                self.comments.store_partition(post_id, comments);
            }
            Err(e) => {
                warn!("Failed to load comments for post {post_id}: {e}");
                self.comments.fail(e.to_string());
            }
        }
    }

    /// Fill missing embedded users from the user directory, loading it first
    /// if nothing has populated it yet. A failed directory load only leaves
    /// the users unset.
    async fn join_comment_users(&self, comments: &mut [Comment]) {
        if comments.iter().all(|c| c.user.is_some()) {
            return;
        }

        let mut directory = self.users.directory();
        if directory.is_empty() {
            match self
                .api
                .list_users(&UserListParams::all(COMMENT_USER_FIELDS))
                .await
            {
                Ok(page) => {
                    directory = page.items;
                    self.users.set_directory(directory.clone());
                }
                Err(e) => warn!("Failed to load users for comments: {e}"),
            }
        }

        attach_comment_users(comments, &directory);
    }

    pub async fn create_comment(&self, draft: &NewComment) -> Result<Comment, ClientError> {
        self.comments.begin();
        match self.api.create_comment(draft).await {
            Ok(comment) => {
                let mut created = [comment];
                attach_comment_users(&mut created, &self.users.directory());
                let [comment] = created;
                self.comments.append(comment.clone());
                Ok(comment)
            }
            Err(e) => {
                warn!("Failed to create comment: {e}");
                self.comments.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn update_comment(
        &self,
        id: i64,
        patch: &CommentPatch,
    ) -> Result<Comment, ClientError> {
        self.comments.begin();
        match self.api.update_comment(id, patch).await {
            Ok(comment) => Ok(self.store_updated_comment(comment)),
            Err(e) => {
                warn!("Failed to update comment {id}: {e}");
                self.comments.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_comment(&self, id: i64, post_id: i64) -> Result<(), ClientError> {
        self.comments.begin();
        match self.api.delete_comment(id).await {
            Ok(()) => {
                self.comments.remove(post_id, id);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete comment {id}: {e}");
                self.comments.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Add one like to a cached comment. Returns `None` when the comment is
    /// not cached under `post_id`.
    pub async fn like_comment(
        &self,
        id: i64,
        post_id: i64,
    ) -> Result<Option<Comment>, ClientError> {
        let Some(current) = self.comments.find(post_id, id) else {
            debug!(id, post_id, "like on uncached comment ignored");
            return Ok(None);
        };

        self.comments.begin();
        match self
            .api
            .like_comment(id, current.likes.saturating_add(1))
            .await
        {
            Ok(comment) => Ok(Some(self.store_updated_comment(comment))),
            Err(e) => {
                warn!("Failed to like comment {id}: {e}");
                self.comments.fail(e.to_string());
                Err(e)
            }
        }
    }

    fn store_updated_comment(&self, comment: Comment) -> Comment {
        match self.comments.apply_update(comment.clone()) {
            Some(merged) => merged,
            None => {
                warn!(
                    id = comment.id,
                    post_id = comment.post_id,
                    "updated comment is not cached"
                );
                comment
            }
        }
    }

    pub fn open_add_comment(&self, post_id: i64) {
        self.update_ui(|ui| ui.open_add_comment(post_id));
    }

    /// Validate and create the drafted comment. Invalid drafts fail before
    /// any request is made.
    pub async fn submit_new_comment(&self) -> Result<Comment, ClientError> {
        let draft = self.ui().new_comment.validate()?;
        let comment = self.create_comment(&draft).await?;
        self.update_ui(|ui| ui.close_add_comment());
        Ok(comment)
    }

    pub fn open_edit_comment(&self, comment: Comment) {
        self.update_ui(|ui| ui.open_edit_comment(comment));
    }

    pub async fn submit_comment_edit(&self) -> Result<Comment, ClientError> {
        let staged = self
            .ui()
            .selected_comment
            .ok_or_else(|| ClientError::Validation("no comment staged for editing".to_string()))?;
        if staged.body.trim().is_empty() {
            return Err(ClientError::Validation("comment body is empty".to_string()));
        }

        let patch = CommentPatch { body: staged.body };
        let comment = self.update_comment(staged.id, &patch).await?;
        self.update_ui(|ui| ui.close_edit_comment());
        Ok(comment)
    }
}
