//! App module - the home page: layout, data population and click handling

mod events;
pub mod layout;
mod populate;
#[cfg(test)]
mod tests;

pub use events::Listener;

use crate::api::ApiClient;
use crate::constants::*;
use crate::dom::render::render;
use crate::dom::{Document, NodeId};
use crate::navigation::Navigator;
use crate::session::{SessionProbe, Storage};
use crate::utils::current_year;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error};

pub type Repaint = Arc<dyn Fn() + Send + Sync>;

// ============================================================================
// PAGE STATE
// ============================================================================

pub struct HomePage<A: ApiClient> {
    pub(crate) api: A,
    pub(crate) session: Arc<dyn SessionProbe>,
    pub(crate) storage: Arc<dyn Storage>,
    pub(crate) navigator: Arc<dyn Navigator>,
    pub(crate) document: Arc<Mutex<Document>>,
    pub(crate) listeners: Vec<(NodeId, Listener)>,
    repaint: Option<Repaint>,
}

impl<A: ApiClient> HomePage<A> {
    pub fn new(
        api: A,
        session: Arc<dyn SessionProbe>,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            storage,
            navigator,
            document: Arc::new(Mutex::new(Document::new())),
            listeners: Vec::new(),
            repaint: None,
        }
    }

    /// Called after every document change made off the UI thread
    pub fn with_repaint(mut self, repaint: Repaint) -> Self {
        self.repaint = Some(repaint);
        self
    }

    pub fn document(&self) -> Arc<Mutex<Document>> {
        self.document.clone()
    }

    pub(crate) fn doc(&self) -> MutexGuard<'_, Document> {
        lock_document(&self.document)
    }

    pub(crate) fn notify_change(&self) {
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }

    #[cfg(test)]
    pub fn listeners(&self) -> &[(NodeId, Listener)] {
        &self.listeners
    }

    /// Build the static layout, mount it on the body and attach listeners.
    /// Runs before any data is requested.
    pub fn assemble(&mut self) -> NodeId {
        let logged_in = self.session.is_user_login();
        let root = layout::create_layout(logged_in, current_year());

        let mut doc = lock_document(&self.document);
        let body = doc.body();
        let root = render(&mut doc, root, body);

        let wiring = [
            (AUTH_BTN_ID, Listener::AuthButton),
            (CREATE_POST_BTN_ID, Listener::CreatePost),
            (POSTS_ID, Listener::Feed),
        ];
        for (id, listener) in wiring {
            match doc.get_element_by_id(id) {
                Some(node) => self.listeners.push((node, listener)),
                None => error!(id, "Element not available in the DOM, listener not attached"),
            }
        }

        debug!(logged_in, listeners = self.listeners.len(), "Layout mounted");
        root
    }
}

pub fn lock_document(document: &Mutex<Document>) -> MutexGuard<'_, Document> {
    document.lock().unwrap_or_else(|e| e.into_inner())
}
