//! Catalog item routes consumed by the storefront client.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::CatalogItem;
use serde::Serialize;

use crate::services::catalog::CatalogError;
use crate::state::AppState;

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Request(_) | CatalogError::Status { .. } | CatalogError::Parse(_) => StatusCode::BAD_GATEWAY,
        CatalogError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: message.into() }))
}

fn catalog_failure(err: &CatalogError) -> ApiError {
    tracing::error!(error = %err, "catalog fetch failed");
    api_error(catalog_error_to_status(err), err.to_string())
}

/// `GET /api/items`: the full mapped catalog.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    state
        .catalog
        .fetch_all()
        .await
        .map(Json)
        .map_err(|e| catalog_failure(&e))
}

/// `GET /api/items/{slug}`: one item, 404 when the slug does not resolve.
pub async fn get_item(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    state
        .catalog
        .fetch_by_slug(&slug)
        .await
        .map_err(|e| catalog_failure(&e))?
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "not found"))
}
