// SPDX-License-Identifier: MPL-2.0

//! Presentation state: which dialogs are open, what is selected, and the
//! drafts being typed into the add forms.

use crate::api::{ClientError, Comment, NewComment, NewPost, Post};
use crate::config::DEFAULT_DRAFT_USER_ID;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialogs {
    pub add_post: bool,
    pub edit_post: bool,
    pub add_comment: bool,
    pub edit_comment: bool,
    pub post_detail: bool,
    pub user_modal: bool,
}

/// Comment being composed; the post is chosen when the dialog opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub body: String,
    pub post_id: Option<i64>,
    pub user_id: i64,
}

impl Default for CommentDraft {
    fn default() -> Self {
        Self {
            body: String::new(),
            post_id: None,
            user_id: DEFAULT_DRAFT_USER_ID,
        }
    }
}

impl CommentDraft {
    /// Presence check done before any request is made
    pub fn validate(&self) -> Result<NewComment, ClientError> {
        if self.body.trim().is_empty() {
            return Err(ClientError::Validation("comment body is empty".to_string()));
        }
        let post_id = self
            .post_id
            .ok_or_else(|| ClientError::Validation("no post selected for comment".to_string()))?;

        Ok(NewComment {
            body: self.body.clone(),
            post_id,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub dialogs: Dialogs,
    /// Post shown in the detail dialog, or the staged copy being edited
    pub selected_post: Option<Post>,
    /// Staged copy of the comment being edited
    pub selected_comment: Option<Comment>,
    pub selected_user_id: Option<i64>,
    pub new_post: NewPost,
    pub new_comment: CommentDraft,
}

impl UiState {
    pub fn open_add_post(&mut self) {
        self.dialogs.add_post = true;
    }

    pub fn close_add_post(&mut self) {
        self.dialogs.add_post = false;
        self.new_post = NewPost::default();
    }

    /// Editing a post replaces the detail dialog
    pub fn open_edit_post(&mut self, post: Post) {
        self.dialogs.post_detail = false;
        self.selected_post = Some(post);
        self.dialogs.edit_post = true;
    }

    pub fn close_edit_post(&mut self) {
        self.dialogs.edit_post = false;
        self.selected_post = None;
    }

    pub fn open_post_detail(&mut self, post: Post) {
        self.selected_post = Some(post);
        self.dialogs.post_detail = true;
    }

    pub fn close_post_detail(&mut self) {
        self.dialogs.post_detail = false;
        self.selected_post = None;
    }

    pub fn open_add_comment(&mut self, post_id: i64) {
        self.new_comment.post_id = Some(post_id);
        self.dialogs.add_comment = true;
    }

    pub fn close_add_comment(&mut self) {
        self.dialogs.add_comment = false;
        self.new_comment = CommentDraft::default();
    }

    pub fn open_edit_comment(&mut self, comment: Comment) {
        self.selected_comment = Some(comment);
        self.dialogs.edit_comment = true;
    }

    pub fn close_edit_comment(&mut self) {
        self.dialogs.edit_comment = false;
        self.selected_comment = None;
    }

    pub fn open_user_modal(&mut self, user_id: i64) {
        self.selected_user_id = Some(user_id);
        self.dialogs.user_modal = true;
    }

    pub fn close_user_modal(&mut self) {
        self.dialogs.user_modal = false;
        self.selected_user_id = None;
    }
}
