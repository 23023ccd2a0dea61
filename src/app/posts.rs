// SPDX-License-Identifier: MPL-2.0

use crate::api::{Api, ClientError, NewPost, Post, PostPatch, SortOrder};
use crate::app::App;
use crate::config::ALL_TAGS;
use crate::query::{self, SelectorError, SortKey};
use tracing::{debug, warn};

impl<A: Api> App<A> {
    /// Resolve the current selector and replace the post list.
    ///
    /// Failures are recorded on the cache and leave the previous list in place.
    pub async fn fetch_posts(&self) {
        let selector = self.posts.selector();
        self.posts.begin();

        match query::resolve(&self.api, &selector).await {
            Ok(listing) => {
                debug!(count = listing.posts.len(), total = listing.total, "posts loaded");
                self.users.set_directory(listing.users);
                self.posts.store_page(listing.posts, listing.total);
            }
            Err(e) => {
                warn!("Failed to load posts: {e}");
                self.posts.fail(e.to_string());
            }
        }
    }

    /// Advance one page; returns false without fetching when already on the last one
    pub async fn next_page(&self) -> bool {
        if !self.posts.advance_page() {
            return false;
        }
        self.fetch_posts().await;
        true
    }

    pub async fn prev_page(&self) {
        self.posts.update_selector(|s| s.skip = s.prev_skip());
        self.fetch_posts().await;
    }

    pub async fn set_limit(&self, limit: u64) {
        self.posts.update_selector(|s| {
            s.limit = limit;
            s.skip = 0;
        });
        self.fetch_posts().await;
    }

    /// Run a search; a blank query is ignored
    pub async fn search_posts(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.posts.update_selector(|s| s.search_query = query.to_string());
        self.fetch_posts().await;
    }

    pub async fn clear_search(&self) {
        self.posts.update_selector(|s| s.search_query.clear());
        self.fetch_posts().await;
    }

    /// Select a tag, or `""`/`"all"` to drop the filter. The current window
    /// is kept either way.
    pub async fn filter_by_tag(&self, tag: &str) {
        let tag = match tag {
            "" => ALL_TAGS,
            tag => tag,
        };
        self.posts.update_selector(|s| {
            s.search_query.clear();
            s.selected_tag = tag.to_string();
        });
        self.fetch_posts().await;
    }

    pub async fn load_tags(&self) {
        match self.api.list_tags().await {
            Ok(tags) => self.posts.set_tags(tags),
            Err(e) => {
                warn!("Failed to load tags: {e}");
                self.posts.record_error(e.to_string());
            }
        }
    }

    /// Change the sort key by its wire name; `""` means server order.
    /// Takes effect on the next fetch.
    pub fn set_sort_by(&self, name: &str) -> Result<(), SelectorError> {
        let key = match name {
            "" => None,
            name => Some(name.parse::<SortKey>()?),
        };
        self.posts.update_selector(|s| s.sort_by = key);
        Ok(())
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.posts.update_selector(|s| s.sort_order = order);
    }

    pub async fn create_post(&self, draft: &NewPost) -> Result<Post, ClientError> {
        self.posts.begin();
        match self.api.create_post(draft).await {
            Ok(mut post) => {
                post.author = self.users.find_in_directory(post.user_id);
                self.posts.insert_front(post.clone());
                Ok(post)
            }
            Err(e) => {
                warn!("Failed to create post: {e}");
                self.posts.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn update_post(&self, id: i64, patch: &PostPatch) -> Result<Post, ClientError> {
        self.posts.begin();
        match self.api.update_post(id, patch).await {
            Ok(post) => Ok(self.posts.apply_update(post.clone()).unwrap_or(post)),
            Err(e) => {
                warn!("Failed to update post {id}: {e}");
                self.posts.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ClientError> {
        self.posts.begin();
        match self.api.delete_post(id).await {
            Ok(()) => {
                self.posts.remove(id);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete post {id}: {e}");
                self.posts.fail(e.to_string());
                Err(e)
            }
        }
    }

    pub fn open_add_post(&self) {
        self.update_ui(|ui| ui.open_add_post());
    }

    /// Create the drafted post; the dialog stays open if the request fails
    pub async fn submit_new_post(&self) -> Result<Post, ClientError> {
        let draft = self.ui().new_post;
        let post = self.create_post(&draft).await?;
        self.update_ui(|ui| ui.close_add_post());
        Ok(post)
    }

    /// Stage a copy of `post` for editing
    pub fn open_edit_post(&self, post: Post) {
        self.update_ui(|ui| ui.open_edit_post(post));
    }

    /// Commit the staged title and body
    pub async fn submit_post_edit(&self) -> Result<Post, ClientError> {
        let staged = self
            .ui()
            .selected_post
            .ok_or_else(|| ClientError::Validation("no post staged for editing".to_string()))?;
        let post = self
            .update_post(staged.id, &PostPatch::from_post(&staged))
            .await?;
        self.update_ui(|ui| ui.close_edit_post());
        Ok(post)
    }

    /// Select `post`, load its comments and show the detail dialog
    pub async fn open_post_detail(&self, post: Post) {
        let post_id = post.id;
        self.update_ui(|ui| ui.selected_post = Some(post));
        self.fetch_comments(post_id).await;
        self.update_ui(|ui| ui.dialogs.post_detail = true);
    }

    pub fn close_post_detail(&self) {
        self.update_ui(|ui| ui.close_post_detail());
    }
}
