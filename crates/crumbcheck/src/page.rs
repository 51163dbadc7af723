//! Page access - the narrow interface the checks consume.
//!
//! Checks only need "give me the rendered HTML for this route". Keeping that
//! behind a trait isolates the runner from the transport and lets tests
//! substitute an in-memory source.

use async_trait::async_trait;
use url::Url;

use crate::error::PageError;

/// Source of rendered pages, keyed by site-relative route.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the rendered HTML for `route` (e.g. `episode/42/`).
    async fn fetch(&self, route: &str) -> Result<String, PageError>;
}

/// HTTP page source over a live site.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPageSource {
    /// Create a source fetching routes relative to `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured site origin.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, route: &str) -> Result<String, PageError> {
        let url = self
            .base_url
            .join(route)
            .map_err(|source| PageError::Route {
                route: route.to_string(),
                source,
            })?;

        tracing::debug!(%url, "fetching page");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
