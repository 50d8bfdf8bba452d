//! Filling the sidebar and the feed once the API answers

use super::{layout, HomePage};
use crate::api::ApiClient;
use crate::constants::{BLOGGER_LIST_ID, POSTS_ID};
use tracing::{error, info};

impl<A: ApiClient> HomePage<A> {
    /// Request posts and prepend one card per post, so the last fetched post
    /// ends up first.
    pub async fn populate_feed(&self) {
        let posts = match self.api.get_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                error!(error = %e, "Error retrieving data");
                return;
            }
        };

        {
            let mut doc = self.doc();
            let Some(container) = doc.get_element_by_id(POSTS_ID) else {
                error!("The posts container is not available in the DOM.");
                return;
            };
            for post in &posts {
                let card = doc.insert(layout::post_card(post));
                doc.prepend(container, card);
            }
        }

        info!(count = posts.len(), "Posts successfully retrieved from server");
        self.notify_change();
    }

    /// Request users and append one profile card per user, in order.
    pub async fn populate_sidebar(&self) {
        let users = match self.api.get_users().await {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, "Error retrieving users");
                return;
            }
        };

        {
            let mut doc = self.doc();
            let Some(list) = doc.get_element_by_id(BLOGGER_LIST_ID) else {
                error!("Blogger list container not found.");
                return;
            };
            for user in &users {
                let card = doc.insert(layout::blogger_profile_card(user));
                doc.append_child(list, card);
            }
        }

        info!(count = users.len(), "Users successfully retrieved from server");
        self.notify_change();
    }

    /// Run both populations and wait for the two of them. Neither waits on
    /// the other.
    pub async fn populate(&self) {
        futures::join!(self.populate_feed(), self.populate_sidebar());
    }
}
