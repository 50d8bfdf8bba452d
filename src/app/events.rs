//! Click routing
//!
//! Listeners sit on a few container elements; a click bubbles from its target
//! up to the body and runs every listener on the way. The feed gets a single
//! listener for all cards, present and future.

use super::HomePage;
use crate::api::ApiClient;
use crate::dom::{NodeId, NodeKind};
use crate::navigation::Page;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    AuthButton,
    CreatePost,
    /// Delegated handler on the posts container
    Feed,
}

/// What a click inside the feed asked for
enum FeedAction {
    Delete { card: NodeId, post_id: String },
    Edit { post_id: String },
    None,
}

impl<A: ApiClient> HomePage<A> {
    /// Deliver a click to `target` and everything above it.
    pub async fn dispatch_click(&self, target: NodeId) {
        let (target, path) = {
            let doc = self.doc();
            // Text nodes are never event targets; their element is
            let target = match doc.kind(target) {
                Some(NodeKind::Text(_)) => match doc.parent(target) {
                    Some(parent) => parent,
                    None => return,
                },
                Some(NodeKind::Element(_)) => target,
                None => {
                    warn!(node = ?target, "Click on unknown node ignored");
                    return;
                }
            };
            if !doc.is_connected(target) {
                debug!(node = ?target, "Click on detached node ignored");
                return;
            }

            let mut path = Vec::new();
            let mut current = Some(target);
            while let Some(node) = current {
                path.extend(
                    self.listeners
                        .iter()
                        .filter(|(id, _)| *id == node)
                        .map(|(_, listener)| *listener),
                );
                current = doc.parent(node);
            }
            (target, path)
        };

        let mut navigated = false;
        for listener in path {
            navigated |= match listener {
                Listener::AuthButton => self.on_auth_click(),
                Listener::CreatePost => {
                    self.navigator.navigate(Page::NewPost);
                    true
                }
                Listener::Feed => self.on_feed_click(target).await,
            };
        }

        // Default anchor action, unless a listener already left the page
        if !navigated {
            let href = {
                let doc = self.doc();
                doc.closest(target, "a")
                    .and_then(|a| doc.element(a)?.get_attribute("href").map(str::to_string))
            };
            if let Some(href) = href {
                self.navigator.navigate(Page::from_href(&href));
            }
        }
    }

    fn on_auth_click(&self) -> bool {
        if self.session.is_user_login() {
            if let Err(e) = self.storage.clear() {
                error!(error = %e, "Failed to clear session storage");
            }
        }
        self.navigator.navigate(Page::Landing);
        true
    }

    /// Returns whether the click navigated away
    async fn on_feed_click(&self, target: NodeId) -> bool {
        // Checked per click, the session may have changed since load
        if !self.session.is_user_login() {
            self.navigator.navigate(Page::Landing);
            return true;
        }

        let action = {
            let doc = self.doc();
            let is_delete = doc.class_list_contains(target, "delete-btn");
            let is_edit = doc.class_list_contains(target, "edit-btn");
            let card = doc.closest(target, ".post");
            let post_id = card.and_then(|c| doc.dataset(c, "id")).map(str::to_string);

            match (card, post_id) {
                (Some(card), Some(post_id)) if is_delete => FeedAction::Delete { card, post_id },
                (Some(_), Some(post_id)) if is_edit => FeedAction::Edit { post_id },
                (_, None) if is_delete || is_edit => {
                    warn!("Post control without an enclosing post card");
                    FeedAction::None
                }
                _ => FeedAction::None,
            }
        };

        match action {
            FeedAction::Delete { card, post_id } => {
                match self.api.delete_post(&post_id).await {
                    Ok(()) => {
                        info!(post_id = %post_id, "Post deleted successfully");
                        self.doc().remove(card);
                        self.notify_change();
                    }
                    Err(e) => error!(error = %e, post_id = %post_id, "Error deleting post"),
                }
                false
            }
            FeedAction::Edit { post_id } => {
                self.navigator.navigate(Page::EditPost(post_id));
                true
            }
            FeedAction::None => false,
        }
    }
}
