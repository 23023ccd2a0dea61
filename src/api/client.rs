// SPDX-License-Identifier: MPL-2.0

use crate::api::Api;
use crate::api::types::{
    Comment, CommentPatch, CommentsEnvelope, LikesPatch, NewComment, NewPost, Page, Post,
    PostListParams, PostPatch, PostsEnvelope, TagsWire, User, UserListParams, UsersEnvelope,
};
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never reached the server
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status; `message` is the status text
    #[error("{message} ({status})")]
    Transport { status: u16, message: String },
    /// The response (or a client-side draft) does not have the expected shape
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// HTTP client for the posts/comments/users REST API.
///
/// No retries and no request timeout: every failure is reported to the caller
/// as-is.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("postdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can carry path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn call(&self, method: Method, url: Url, body: Option<Value>) -> Result<String, ClientError> {
        debug!(%method, %url, "request");

        let result = self.send(method.clone(), url.clone(), body).await;
        if let Err(e) = &result {
            warn!(%method, %url, error = %e, "request failed");
        }
        result
    }

    async fn send(&self, method: Method, url: Url, body: Option<Value>) -> Result<String, ClientError> {
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Transport {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let body = self.call(Method::GET, url, None).await?;
        decode(&body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        payload: &impl Serialize,
    ) -> Result<T, ClientError> {
        let payload =
            serde_json::to_value(payload).map_err(|e| ClientError::Validation(e.to_string()))?;
        let body = self.call(method, url, Some(payload)).await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Validation(e.to_string()))
}

#[async_trait]
impl Api for ApiClient {
    async fn list_posts(&self, params: &PostListParams) -> Result<Page<Post>, ClientError> {
        let mut url = self.endpoint(&["posts"]);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("limit", &params.limit.to_string())
                .append_pair("skip", &params.skip.to_string());
            if let Some(sort_by) = params.sort_by {
                query.append_pair("sortBy", sort_by);
                if let Some(order) = params.order {
                    query.append_pair("order", order.as_str());
                }
            }
        }

        let envelope: PostsEnvelope = self.get(url).await?;
        Ok(envelope.into())
    }

    async fn get_post(&self, id: i64) -> Result<Post, ClientError> {
        self.get(self.endpoint(&["posts", &id.to_string()])).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError> {
        self.send_json(Method::POST, self.endpoint(&["posts", "add"]), post)
            .await
    }

    async fn update_post(&self, id: i64, patch: &PostPatch) -> Result<Post, ClientError> {
        self.send_json(Method::PUT, self.endpoint(&["posts", &id.to_string()]), patch)
            .await
    }

    async fn delete_post(&self, id: i64) -> Result<(), ClientError> {
        // The body echoes the deleted record; only the status matters
        self.call(Method::DELETE, self.endpoint(&["posts", &id.to_string()]), None)
            .await
            .map(|_| ())
    }

    async fn posts_by_tag(
        &self,
        tag: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Page<Post>, ClientError> {
        let mut url = self.endpoint(&["posts", "tag", tag]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &skip.to_string());

        let envelope: PostsEnvelope = self.get(url).await?;
        Ok(envelope.into())
    }

    async fn search_posts(&self, query: &str) -> Result<Page<Post>, ClientError> {
        let mut url = self.endpoint(&["posts", "search"]);
        url.query_pairs_mut().append_pair("q", query);

        let envelope: PostsEnvelope = self.get(url).await?;
        Ok(envelope.into())
    }

    async fn list_tags(&self) -> Result<Vec<String>, ClientError> {
        let wire: TagsWire = self.get(self.endpoint(&["posts", "tags"])).await?;
        wire.normalize()
    }

    async fn list_comments(&self, post_id: i64) -> Result<Page<Comment>, ClientError> {
        let url = self.endpoint(&["comments", "post", &post_id.to_string()]);
        let envelope: CommentsEnvelope = self.get(url).await?;
        Ok(envelope.into())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ClientError> {
        self.send_json(Method::POST, self.endpoint(&["comments", "add"]), comment)
            .await
    }

    async fn update_comment(
        &self,
        id: i64,
        patch: &CommentPatch,
    ) -> Result<Comment, ClientError> {
        let url = self.endpoint(&["comments", &id.to_string()]);
        self.send_json(Method::PUT, url, patch).await
    }

    async fn delete_comment(&self, id: i64) -> Result<(), ClientError> {
        self.call(Method::DELETE, self.endpoint(&["comments", &id.to_string()]), None)
            .await
            .map(|_| ())
    }

    async fn like_comment(&self, id: i64, likes: u32) -> Result<Comment, ClientError> {
        let url = self.endpoint(&["comments", &id.to_string()]);
        self.send_json(Method::PATCH, url, &LikesPatch { likes }).await
    }

    async fn list_users(&self, params: &UserListParams) -> Result<Page<User>, ClientError> {
        let mut url = self.endpoint(&["users"]);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("limit", &params.limit.to_string())
                .append_pair("skip", &params.skip.to_string());
            if let Some(select) = &params.select {
                query.append_pair("select", select);
            }
        }

        let envelope: UsersEnvelope = self.get(url).await?;
        Ok(envelope.into())
    }

    async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        self.get(self.endpoint(&["users", &id.to_string()])).await
    }
}
