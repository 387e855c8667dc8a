//! HTTP client for the albums microservice.
//!
//! Fetches the album list for a user over REST, forwarding the caller's
//! authorization header.
//!
//! # Example
//!
//! ```no_run
//! use photoapp_users::HttpAlbumsClient;
//!
//! let client = HttpAlbumsClient::new("http://albums.internal:8011");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::config::AlbumsSettings;
use crate::domain::{AlbumSummary, AlbumsClient, AlbumsClientError};

/// Albums microservice client backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpAlbumsClient {
    client: Client,
    base_url: String,
}

impl HttpAlbumsClient {
    /// Create a new client for the albums service at `base_url`
    /// (e.g. `http://albums.internal:8011`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Build from [`AlbumsSettings`], applying the configured request timeout.
    pub fn from_settings(settings: &AlbumsSettings) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;
        Ok(Self::with_client(client, settings.base_url.clone()))
    }

    /// Create with a custom reqwest [`Client`] (for timeouts, proxies, etc.).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    fn albums_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/albums", self.base_url, user_id)
    }
}

#[async_trait]
impl AlbumsClient for HttpAlbumsClient {
    async fn albums_for_user(
        &self,
        user_id: &str,
        authorization: &str,
    ) -> Result<Vec<AlbumSummary>, AlbumsClientError> {
        let resp = self
            .client
            .get(self.albums_url(user_id))
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            return Err(AlbumsClientError::Status {
                status: resp.status().as_u16(),
            });
        }

        resp.json()
            .await
            .map_err(|e| AlbumsClientError::Decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> AlbumsClientError {
    AlbumsClientError::Transport(e.to_string())
}
