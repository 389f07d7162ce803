//! Catalog data source: remote product API plus a process-lifetime cache.
//!
//! DESIGN
//! ======
//! `CatalogSource` owns the cache explicitly instead of a module-level global.
//! The full list is fetched lazily on first use and memoized; single-item
//! fetches upsert into whatever is cached. Nothing is ever evicted.
//!
//! TRADE-OFFS
//! ==========
//! The cache lock is never held across a network await. Two overlapping
//! `fetch_all` calls on a cold cache each hit the network and the later
//! response overwrites the earlier one.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx list response is a [`CatalogError::Status`]. A non-2xx item
//! response, or a slug that is not a numeric id, is `Ok(None)` so the detail
//! page can render "not found" instead of failing.

use std::sync::Arc;
use std::time::Duration;

use catalog::{CatalogItem, ProductList, RawItem};
use tokio::sync::RwLock;

use crate::config::CatalogConfig;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by catalog fetches.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("catalog request failed: {0}")]
    Request(String),

    /// The list endpoint returned a non-success status.
    #[error("error fetching catalog data: {status_text}")]
    Status { status: u16, status_text: String },

    /// The response body was not the expected JSON shape.
    #[error("catalog response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// A completed HTTP exchange, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-attempt GET against the catalog API.
#[async_trait::async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Issue one GET request and return the reply regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Request`] if the request cannot be completed.
    async fn get(&self, url: &str) -> Result<HttpReply, CatalogError>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`CatalogError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CatalogError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl CatalogTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Ok(HttpReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// Catalog API client with an in-memory, process-lifetime cache.
pub struct CatalogSource {
    transport: Arc<dyn CatalogTransport>,
    endpoint: String,
    page_limit: u32,
    cache: RwLock<Option<Vec<CatalogItem>>>,
}

impl CatalogSource {
    #[must_use]
    pub fn new(transport: Arc<dyn CatalogTransport>, endpoint: impl Into<String>, page_limit: u32) -> Self {
        Self { transport, endpoint: endpoint.into(), page_limit, cache: RwLock::new(None) }
    }

    /// Build a source with the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), config.endpoint.clone(), config.page_limit))
    }

    fn list_url(&self) -> String {
        format!("{}?limit={}", self.endpoint, self.page_limit)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.endpoint)
    }

    /// Return the full catalog, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Status`] on a non-success response, or a
    /// request/parse error if the exchange itself fails. Nothing is cached
    /// on failure.
    pub async fn fetch_all(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        if let Some(items) = self.cache.read().await.as_ref() {
            return Ok(items.clone());
        }

        let url = self.list_url();
        let reply = self.transport.get(&url).await?;
        if !reply.is_success() {
            tracing::warn!(status = reply.status, %url, "catalog list request failed");
            return Err(CatalogError::Status { status: reply.status, status_text: reply.status_text });
        }

        let list: ProductList = serde_json::from_str(&reply.body).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let items: Vec<CatalogItem> = list.products.into_iter().map(CatalogItem::from).collect();
        tracing::info!(count = items.len(), "catalog cached");

        *self.cache.write().await = Some(items.clone());
        Ok(items)
    }

    /// Fetch one item by slug and merge it into the cache.
    ///
    /// Returns `Ok(None)` without any request when `slug` is not a numeric id,
    /// and `Ok(None)` when the API answers with a non-success status.
    ///
    /// # Errors
    ///
    /// Returns a request/parse error if the exchange itself fails.
    pub async fn fetch_by_slug(&self, slug: &str) -> Result<Option<CatalogItem>, CatalogError> {
        let Some(id) = parse_slug(slug) else {
            tracing::debug!(%slug, "non-numeric slug");
            return Ok(None);
        };

        let reply = self.transport.get(&self.item_url(id)).await?;
        if !reply.is_success() {
            tracing::debug!(id, status = reply.status, "catalog item not found");
            return Ok(None);
        }

        let raw: RawItem = serde_json::from_str(&reply.body).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let item = CatalogItem::from(raw);
        upsert(&mut *self.cache.write().await, item.clone());
        Ok(Some(item))
    }

    /// Snapshot of the cache, `None` until something has been fetched.
    pub async fn cached(&self) -> Option<Vec<CatalogItem>> {
        self.cache.read().await.clone()
    }
}

/// Parse a slug as a numeric item id.
fn parse_slug(slug: &str) -> Option<u64> {
    slug.trim().parse::<u64>().ok()
}

/// Replace the cached entry with the same id in place, or append it.
fn upsert(cache: &mut Option<Vec<CatalogItem>>, item: CatalogItem) {
    match cache {
        Some(items) => match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => items.push(item),
        },
        None => *cache = Some(vec![item]),
    }
}
