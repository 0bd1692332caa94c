//! # Donation Registry
//!
//! Internal donation/asset management service. The engineering core is
//! the donation search pipeline:
//!
//! 1. **Filter normalization** ([`core::filters`]) - raw query strings
//!    become a canonical filter set; malformed input coerces to defaults.
//! 2. **Query composition** ([`core::query`]) - predicates, ordering and
//!    the page window, independent of any storage backend.
//! 3. **Storage** ([`storage`]) - an injected [`storage::DonationStore`]
//!    runs the count and page queries and joins display fields.
//! 4. **Response shaping** ([`server::response`]) - joined rows become
//!    the `{success, data, pagination}` envelope the UI consumes.
//!
//! Soft-deleted donations are invisible to every read path. Zero matches
//! is a success with an empty page; only store failures produce errors,
//! surfaced as HTTP 500 with a plain message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use donation_registry::prelude::*;
//!
//! let store = InMemoryStore::from_fixtures(
//!     StoreFixtures::from_yaml_file("fixtures/dev.yaml")?,
//! );
//! let app = build_router(AppState::new(Arc::new(store)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8787").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::ServiceConfig;
    pub use crate::core::{
        Category, CategoryTree, Donation, DonationQuery, DonationRow, DonationStatus, EntityRef,
        Location, PaginationMeta, RawSearchParams, RegistryError, SearchFilters, SortKey,
        SubCategory,
    };
    pub use crate::server::{AppState, build_router};
    pub use crate::storage::{DonationStore, InMemoryStore, StoreFixtures};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
