// SPDX-License-Identifier: MPL-2.0

//! Application root.
//!
//! `App` owns the remote client, the three entity caches and the UI state, and
//! exposes every user intent as a method. Presentation code only reads
//! snapshots and calls intents; it never mutates a cache directly.

mod comments;
mod posts;
mod users;


use crate::api::{Api, ApiClient, ClientError};
use crate::cache::{CommentCache, PostCache, UserCache};
use crate::query::{QuerySelector, SelectorError};
use crate::state::{AppSettings, UiState};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid API configuration: {0}")]
    Client(#[from] ClientError),
    #[error("invalid default sort: {0}")]
    Selector(#[from] SelectorError),
}

pub struct App<A: Api> {
    api: A,
    posts: PostCache,
    comments: CommentCache,
    users: UserCache,
    ui: RwLock<UiState>,
}

impl App<ApiClient> {
    /// Build the HTTP-backed application from persisted settings
    pub fn from_settings(settings: &AppSettings) -> Result<Self, StartupError> {
        let api = ApiClient::new(&settings.api_base_url)?;
        Ok(Self::new(api, settings.selector()?))
    }
}

impl<A: Api> App<A> {
    pub fn new(api: A, selector: QuerySelector) -> Self {
        Self {
            api,
            posts: PostCache::new(selector),
            comments: CommentCache::new(),
            users: UserCache::new(),
            ui: RwLock::new(UiState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn posts(&self) -> &PostCache {
        &self.posts
    }

    pub fn comments(&self) -> &CommentCache {
        &self.comments
    }

    pub fn users(&self) -> &UserCache {
        &self.users
    }

    /// Snapshot of the UI state
    pub fn ui(&self) -> UiState {
        self.ui.read().expect("ui lock poisoned").clone()
    }

    pub fn update_ui<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut self.ui.write().expect("ui lock poisoned"))
    }

    /// Drop every cached record and return to the initial selector
    pub fn reset(&self) {
        self.posts.reset();
        self.comments.reset();
        self.users.reset();
        self.update_ui(|ui| *ui = UiState::default());
    }
}
