// SPDX-License-Identifier: MPL-2.0

mod highlight;
mod join;
mod pipeline;
mod selector;
mod sort;

pub use highlight::{Segment, highlight};
pub use join::{attach_authors, attach_comment_users};
pub use pipeline::{Listing, resolve};
pub use selector::{PostSource, QuerySelector};
pub use sort::{SortKey, compare_posts, sort_posts};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}
