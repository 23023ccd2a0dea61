// SPDX-License-Identifier: MPL-2.0

//! Wire and domain types for the REST API.
//!
//! Responses are decoded straight into these structs; anything that does not
//! fit the schema is rejected at the client boundary.

use crate::api::ClientError;
use crate::config::DEFAULT_DRAFT_USER_ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Owner of the post (joins against `User::id`)
    pub user_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub views: i64,
    /// Resolved client-side from the user directory, never sent by the server
    #[serde(skip)]
    pub author: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub title: String,
    pub department: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Avatar URL; absent when the request projected it away
    pub image: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

impl User {
    /// Minimal user as returned by projected list requests
    pub fn summary(id: i64, username: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id,
            username: username.into(),
            image,
            email: None,
            first_name: None,
            last_name: None,
            age: None,
            gender: None,
            phone: None,
            address: None,
            company: None,
        }
    }

    /// "First Last" when both name parts are known
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

/// User summary embedded in comment responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUser {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
}

impl From<&User> for CommentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CommentWire")]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
    pub likes: u32,
    pub dislikes: u32,
    pub user: Option<CommentUser>,
}

/// Comments arrive either with `userId`, with an embedded `user`, or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentWire {
    id: i64,
    body: String,
    post_id: i64,
    user_id: Option<i64>,
    #[serde(default)]
    likes: u32,
    #[serde(default)]
    dislikes: u32,
    user: Option<CommentUser>,
}

impl TryFrom<CommentWire> for Comment {
    type Error = String;

    fn try_from(wire: CommentWire) -> Result<Self, Self::Error> {
        let user_id = match (wire.user_id, &wire.user) {
            (Some(id), Some(user)) if id != user.id => {
                return Err(format!(
                    "comment {} has userId {id} but embedded user {}",
                    wire.id, user.id
                ));
            }
            (Some(id), _) => id,
            (None, Some(user)) => user.id,
            (None, None) => return Err(format!("comment {} has no user", wire.id)),
        };

        Ok(Self {
            id: wire.id,
            body: wire.body,
            post_id: wire.post_id,
            user_id,
            likes: wire.likes,
            dislikes: wire.dislikes,
            user: wire.user,
        })
    }
}

/// One window of a remote collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(Deserialize)]
pub(crate) struct PostsEnvelope {
    posts: Vec<Post>,
    total: u64,
    #[serde(default)]
    skip: u64,
    #[serde(default)]
    limit: u64,
}

impl From<PostsEnvelope> for Page<Post> {
    fn from(env: PostsEnvelope) -> Self {
        Self {
            items: env.posts,
            total: env.total,
            skip: env.skip,
            limit: env.limit,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct CommentsEnvelope {
    comments: Vec<Comment>,
    total: u64,
    #[serde(default)]
    skip: u64,
    #[serde(default)]
    limit: u64,
}

impl From<CommentsEnvelope> for Page<Comment> {
    fn from(env: CommentsEnvelope) -> Self {
        Self {
            items: env.comments,
            total: env.total,
            skip: env.skip,
            limit: env.limit,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct UsersEnvelope {
    users: Vec<User>,
    total: u64,
    #[serde(default)]
    skip: u64,
    #[serde(default)]
    limit: u64,
}

impl From<UsersEnvelope> for Page<User> {
    fn from(env: UsersEnvelope) -> Self {
        Self {
            items: env.users,
            total: env.total,
            skip: env.skip,
            limit: env.limit,
        }
    }
}

/// `/posts/tags` has shipped as plain strings, as tag objects, and wrapped in `{tags}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TagsWire {
    Wrapped { tags: Vec<TagEntry> },
    List(Vec<TagEntry>),
}

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TagEntry {
    Name(String),
    Object {
        name: Option<String>,
        slug: Option<String>,
    },
}

impl TagsWire {
    pub(crate) fn normalize(self) -> Result<Vec<String>, ClientError> {
        let entries = match self {
            Self::Wrapped { tags } => tags,
            Self::List(tags) => tags,
        };

        entries
            .into_iter()
            .map(|entry| match entry {
                TagEntry::Name(name) => Ok(name),
                TagEntry::Object { name: Some(name), .. } => Ok(name),
                TagEntry::Object {
                    name: None,
                    slug: Some(slug),
                } => Ok(slug),
                TagEntry::Object {
                    name: None,
                    slug: None,
                } => Err(ClientError::Validation(
                    "tag entry has neither name nor slug".to_string(),
                )),
            })
            .collect()
    }
}

/// Remote sort direction, sent as `order=asc|desc`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListParams {
    pub limit: u64,
    pub skip: u64,
    /// Server-side sort field name, already validated
    pub sort_by: Option<&'static str>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListParams {
    /// 0 asks the server for every user
    pub limit: u64,
    pub skip: u64,
    /// Comma-joined field projection
    pub select: Option<String>,
}

impl UserListParams {
    /// Every user, projected to `fields`
    pub fn all(fields: &str) -> Self {
        Self {
            limit: 0,
            skip: 0,
            select: Some(fields.to_string()),
        }
    }
}

impl Default for UserListParams {
    fn default() -> Self {
        Self {
            limit: 10,
            skip: 0,
            select: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl Default for NewPost {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            user_id: DEFAULT_DRAFT_USER_ID,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostPatch {
    /// Patch carrying the editable fields of a staged copy
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: Some(post.title.clone()),
            body: Some(post.body.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPatch {
    pub body: String,
}

#[derive(Serialize)]
pub(crate) struct LikesPatch {
    pub likes: u32,
}
