// SPDX-License-Identifier: MPL-2.0

mod client;
mod types;

pub use client::{ApiClient, ClientError};
pub use types::{
    Address, Comment, CommentPatch, CommentUser, Company, Coordinates, NewComment, NewPost, Page,
    Post, PostListParams, PostPatch, Reactions, SortOrder, User, UserListParams,
};

use async_trait::async_trait;

/// Remote operations the caches depend on.
///
/// `ApiClient` is the HTTP implementation; tests drive the application root
/// through an in-memory implementation instead.
#[async_trait]
pub trait Api: Send + Sync {
    async fn list_posts(&self, params: &PostListParams) -> Result<Page<Post>, ClientError>;
    async fn get_post(&self, id: i64) -> Result<Post, ClientError>;
    async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError>;
    async fn update_post(&self, id: i64, patch: &PostPatch) -> Result<Post, ClientError>;
    async fn delete_post(&self, id: i64) -> Result<(), ClientError>;
    /// Posts carrying `tag`; a `limit` of 0 asks for all of them, though the
    /// server may still cap the page
    async fn posts_by_tag(&self, tag: &str, skip: u64, limit: u64)
    -> Result<Page<Post>, ClientError>;
    async fn search_posts(&self, query: &str) -> Result<Page<Post>, ClientError>;
    async fn list_tags(&self) -> Result<Vec<String>, ClientError>;

    async fn list_comments(&self, post_id: i64) -> Result<Page<Comment>, ClientError>;
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ClientError>;
    async fn update_comment(&self, id: i64, patch: &CommentPatch)
    -> Result<Comment, ClientError>;
    async fn delete_comment(&self, id: i64) -> Result<(), ClientError>;
    /// Overwrites the like counter with `likes`
    async fn like_comment(&self, id: i64, likes: u32) -> Result<Comment, ClientError>;

    async fn list_users(&self, params: &UserListParams) -> Result<Page<User>, ClientError>;
    async fn get_user(&self, id: i64) -> Result<User, ClientError>;
}
