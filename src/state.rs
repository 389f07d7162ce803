//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the catalog source, which owns the process-lifetime item cache.

use std::sync::Arc;

use crate::services::catalog::CatalogSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the catalog source is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogSource>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogSource) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
