// SPDX-License-Identifier: MPL-2.0

use crate::api::{Api, User, UserListParams};
use crate::app::App;
use tracing::warn;

impl<A: Api> App<A> {
    pub async fn fetch_users(&self, params: &UserListParams) {
        self.users.begin();
        match self.api.list_users(params).await {
            Ok(page) => self.users.store_page(page.items, page.total),
            Err(e) => {
                warn!("Failed to load users: {e}");
                self.users.fail(e.to_string());
            }
        }
    }

    /// Load the full record of one user into the selected slot
    pub async fn fetch_user(&self, id: i64) -> Option<User> {
        self.users.begin();
        match self.api.get_user(id).await {
            Ok(user) => {
                self.users.store_selected(user.clone());
                Some(user)
            }
            Err(e) => {
                warn!("Failed to load user {id}: {e}");
                self.users.fail(e.to_string());
                None
            }
        }
    }

    /// Open the user modal once the user has loaded
    pub async fn view_user(&self, id: i64) -> Option<User> {
        let user = self.fetch_user(id).await?;
        self.update_ui(|ui| ui.open_user_modal(id));
        Some(user)
    }

    pub fn close_user_modal(&self) {
        self.users.clear_selected();
        self.update_ui(|ui| ui.close_user_modal());
    }
}
