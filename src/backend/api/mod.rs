//! HTTP access to the GoldVault API.
//!
//! Every request carries the browser's credentials: on wasm through the
//! `fetch` credentials mode, on native through reqwest's cookie store.

pub mod auth;
pub mod session;

pub use auth::{AuthClient, Credentials};
pub use session::HttpSessionSource;

use crate::backend::utils::config::ApiConfig;
use reqwest::{Client, RequestBuilder};

/// Shared reqwest client plus the API origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: build_client(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.post(self.url(path)))
    }
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to a client without cookie store: {e}");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
