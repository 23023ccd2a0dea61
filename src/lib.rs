// SPDX-License-Identifier: MPL-2.0

//! Client-side caches and a query pipeline for managing posts, comments and
//! users behind a dummyjson-style REST API.

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod logging;
pub mod query;
pub mod runtime;
pub mod state;

pub use api::{Api, ApiClient, ClientError};
pub use app::{App, StartupError};
pub use query::{QuerySelector, SelectorError, SortKey};
pub use state::{AppSettings, UiState};
