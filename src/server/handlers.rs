//! HTTP handlers for the read endpoints
//!
//! Each handler is a stateless pass through the pipeline: normalize
//! filters, compose the query, hit the store, shape the response. A
//! store failure anywhere aborts the request; there are no retries.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde_json::{Value, json};

use crate::core::error::RegistryError;
use crate::core::filters::{RawSearchParams, SearchFilters};
use crate::core::model::{CategoryTree, Location};
use crate::core::query::{DonationQuery, PaginationMeta};
use crate::server::response::{DonationListResponse, DonationView, ListResponse};
use crate::storage::DonationStore;

/// Application state shared across handlers. The store is injected at
/// startup; handlers never construct one.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DonationStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DonationStore>) -> Self {
        Self { store }
    }
}

/// GET /donations — paginated donation search.
///
/// The count query runs first and scopes the same predicates as the
/// page query; if it fails, the request fails before any rows are
/// fetched, so a partial response can never leak out.
pub async fn list_donations(
    State(state): State<AppState>,
    Query(raw): Query<RawSearchParams>,
) -> Result<Json<DonationListResponse>, RegistryError> {
    let filters = SearchFilters::normalize(raw);
    let query = DonationQuery::from_filters(filters);

    let total = state.store.count_donations(&query).await?;
    let rows = state.store.search_donations(&query).await?;

    tracing::debug!(
        total,
        page = query.filters.page,
        returned = rows.len(),
        "donation search"
    );

    let pagination = PaginationMeta::new(query.filters.page, query.filters.per_page, total);
    let data: Vec<DonationView> = rows.into_iter().map(DonationView::from).collect();

    Ok(Json(DonationListResponse {
        success: true,
        data,
        pagination,
    }))
}

/// GET /categories — categories with nested sub-categories, ordered by
/// display_order ascending.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<CategoryTree>>, RegistryError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(ListResponse::new(categories)))
}

/// GET /locations — storage locations ordered by name ascending.
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Location>>, RegistryError> {
    let locations = state.store.list_locations().await?;
    Ok(Json(ListResponse::new(locations)))
}

/// GET /health — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
