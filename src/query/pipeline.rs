// SPDX-License-Identifier: MPL-2.0

//! Resolve a selector into a displayed post list.

use crate::api::{Api, ClientError, Page, Post, User, UserListParams};
use crate::config::POST_AUTHOR_FIELDS;
use crate::query::join::attach_authors;
use crate::query::sort::sort_posts;
use crate::query::{PostSource, QuerySelector};
use tracing::{debug, warn};

/// Posts ready for the cache, plus the user directory they were joined against
#[derive(Debug, Clone)]
pub struct Listing {
    pub posts: Vec<Post>,
    pub total: u64,
    pub users: Vec<User>,
}

/// Fetch the posts a selector describes together with every user, then join,
/// sort and window according to the source.
pub async fn resolve<A: Api + ?Sized>(
    api: &A,
    selector: &QuerySelector,
) -> Result<Listing, ClientError> {
    let source = selector.source();
    debug!(?source, skip = selector.skip, limit = selector.limit, "resolving posts");

    let user_params = UserListParams::all(POST_AUTHOR_FIELDS);
    let (page, users) = match source {
        PostSource::Search(query) => {
            tokio::try_join!(api.search_posts(query), api.list_users(&user_params))?
        }
        PostSource::Tag(tag) => {
            tokio::try_join!(full_tag_listing(api, tag), api.list_users(&user_params))?
        }
        PostSource::Page => {
            let params = selector.list_params();
            tokio::try_join!(api.list_posts(&params), api.list_users(&user_params))?
        }
    };
    let Page {
        items: mut posts,
        total,
        ..
    } = page;
    let users = users.items;

    // Join first so `author.username` sorts see the authors
    attach_authors(&mut posts, &users);

    let (posts, total) = match source {
        PostSource::Search(_) => (posts, total),
        PostSource::Tag(_) => {
            if let Some(key) = selector.sort_by {
                sort_posts(&mut posts, key, selector.sort_order);
            }
            let total = posts.len() as u64;
            (selector.window(posts), total)
        }
        PostSource::Page => {
            if let Some(key) = selector.sort_by {
                sort_posts(&mut posts, key, selector.sort_order);
            }
            (posts, total)
        }
    };

    Ok(Listing {
        posts,
        total,
        users,
    })
}

/// Every post carrying `tag`. Asks for the whole listing and keeps following
/// up while the server caps the page below its reported total.
async fn full_tag_listing<A: Api + ?Sized>(api: &A, tag: &str) -> Result<Page<Post>, ClientError> {
    let mut page = api.posts_by_tag(tag, 0, 0).await?;
    while (page.items.len() as u64) < page.total {
        let skip = page.items.len() as u64;
        let rest = api.posts_by_tag(tag, skip, 0).await?;
        if rest.items.is_empty() {
            warn!(tag, skip, total = page.total, "tag listing ended early");
            break;
        }
        page.items.extend(rest.items);
    }
    Ok(page)
}
