//! Storage backends for the donation registry
//!
//! The server never constructs a store itself; an `Arc<dyn DonationStore>`
//! is injected into the application state so tests and future backends
//! can swap implementations freely.

pub mod fixtures;
pub mod in_memory;

pub use fixtures::StoreFixtures;
pub use in_memory::InMemoryStore;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::model::{CategoryTree, DonationRow, Location};
use crate::core::query::DonationQuery;

/// Data-store seam for the search pipeline and catalog endpoints.
///
/// The count and page queries are issued separately and nothing spans
/// them transactionally; a write landing between the two can skew the
/// totals. Accepted for this low-traffic internal tool.
#[async_trait]
pub trait DonationStore: Send + Sync {
    /// Count donations matching the query's predicates, ignoring the
    /// page window. Soft-deleted rows are never counted.
    async fn count_donations(&self, query: &DonationQuery) -> Result<usize>;

    /// Fetch one page of matching donations, sorted per the query and
    /// joined with category / sub-category / location display fields.
    async fn search_donations(&self, query: &DonationQuery) -> Result<Vec<DonationRow>>;

    /// All categories with their sub-categories, both levels ordered by
    /// `display_order` ascending.
    async fn list_categories(&self) -> Result<Vec<CategoryTree>>;

    /// All locations ordered by name ascending.
    async fn list_locations(&self) -> Result<Vec<Location>>;
}
