//! Full-page transitions out of the home view

use std::fmt;
#[cfg(test)]
use std::sync::Mutex;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Invalid site base URL {url}: {reason}")]
    InvalidBase { url: String, reason: String },
}

/// The only pages the home view links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Landing,
    Registration,
    NewPost,
    EditPost(String),
    /// An anchor href that is none of the above
    Other(String),
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Landing => "index.html".into(),
            Page::Registration => "registration.html".into(),
            Page::NewPost => "new-post.html".into(),
            Page::EditPost(id) => format!("new-post.html?postId={id}"),
            Page::Other(href) => href.clone(),
        }
    }

    /// Map an anchor's href back to a known page
    pub fn from_href(href: &str) -> Self {
        let trimmed = href.trim_start_matches("./");
        match trimmed {
            "index.html" => Page::Landing,
            "registration.html" => Page::Registration,
            "new-post.html" => Page::NewPost,
            _ => match trimmed.strip_prefix("new-post.html?postId=") {
                Some(id) => Page::EditPost(id.to_string()),
                None => Page::Other(href.to_string()),
            },
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

/// Opens pages of the web front-end in the system browser
pub struct BrowserNavigator {
    site_base: reqwest::Url,
    enabled: bool,
}

impl BrowserNavigator {
    /// `enabled = false` only logs, which is what `export` runs want
    pub fn new(site_base_url: &str, enabled: bool) -> Result<Self, NavigationError> {
        let site_base =
            reqwest::Url::parse(site_base_url).map_err(|e| NavigationError::InvalidBase {
                url: site_base_url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { site_base, enabled })
    }

    pub fn resolve(&self, page: &Page) -> Option<reqwest::Url> {
        self.site_base.join(&page.href()).ok()
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, page: Page) {
        let Some(url) = self.resolve(&page) else {
            warn!(page = %page, "Could not resolve page against site base");
            return;
        };
        info!(url = %url, "Navigating");
        if self.enabled {
            if let Err(e) = open::that(url.as_str()) {
                warn!(error = %e, url = %url, "Failed to open browser");
            }
        }
    }
}

/// Keeps every navigation instead of leaving the page
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Page>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Page> {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        info!(page = %page, "Navigation recorded");
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(page);
    }
}
