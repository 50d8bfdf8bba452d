//! REST client for posts and users

use crate::types::{Post, User};
use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Network calls the home page makes. Failures come back as `Err`, never as
/// panics.
pub trait ApiClient: Send + Sync + 'static {
    fn get_posts(&self) -> impl Future<Output = Result<Vec<Post>, ApiError>> + Send;
    fn get_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;
    fn delete_post(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn post_url(&self, id: &str) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(url = %url, "GET");
        let response = self.client.get(&url).send().await?;
        let response = check_status(response, url)?;
        Ok(response.json::<T>().await?)
    }
}

fn check_status(response: reqwest::Response, url: String) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status, url })
    }
}

impl ApiClient for HttpApi {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(self.posts_url()).await
    }

    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json(self.users_url()).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let url = self.post_url(id);
        debug!(url = %url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        check_status(response, url)?;
        Ok(())
    }
}
