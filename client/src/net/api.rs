//! REST helpers for the storefront catalog API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error; pages load their data
//! after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed list
//! fetch carries a message for the error state; a failed item fetch is simply
//! "not found".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::CatalogItem;

pub const ITEMS_ENDPOINT: &str = "/api/items";

/// Origin used only to borrow `url`'s path-segment encoding.
#[cfg(any(test, feature = "hydrate"))]
const ENDPOINT_BASE: &str = "http://storefront.local/api/items";

/// `/api/items/<slug>` with `slug` encoded as a single path segment.
#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(slug: &str) -> String {
    let Ok(mut url) = url::Url::parse(ENDPOINT_BASE) else {
        return ITEMS_ENDPOINT.to_owned();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(slug);
    }
    url.path().to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn items_request_failed_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("error fetching catalog data: {status}")
    } else {
        format!("error fetching catalog data: {status_text}")
    }
}

/// Fetch the full catalog from `/api/items`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_items() -> Result<Vec<CatalogItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ITEMS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let message = items_request_failed_message(resp.status(), &resp.status_text());
            log::warn!("{message}");
            return Err(message);
        }
        resp.json::<Vec<CatalogItem>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single item from `/api/items/{slug}`.
/// Returns `None` when the item does not exist, on failure, or on the server.
pub async fn fetch_item(slug: &str) -> Option<CatalogItem> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&item_endpoint(slug))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::debug!("item {slug} not found: {}", resp.status());
            return None;
        }
        resp.json::<CatalogItem>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}
