// SPDX-License-Identifier: MPL-2.0

pub const APP_ID: &str = "io.github.postdesk.Postdesk";
pub const APP_NAME: &str = "Postdesk";

pub const DEFAULT_API_BASE: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Tag selector value meaning "no tag filter"
pub const ALL_TAGS: &str = "all";

/// Field projection used when joining authors onto posts
pub const POST_AUTHOR_FIELDS: &str = "username,image";
/// Field projection used when joining users onto comments
pub const COMMENT_USER_FIELDS: &str = "id,username,image";

/// User id assigned to drafts until the presentation layer picks one
pub const DEFAULT_DRAFT_USER_ID: i64 = 1;
