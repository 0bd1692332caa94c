//! Core types for the donation search pipeline
//!
//! The pipeline is linear: raw query parameters are normalized into
//! [`filters::SearchFilters`], composed into a [`query::DonationQuery`],
//! executed against a store, and the joined rows are shaped into the
//! public response by the server layer.

pub mod error;
pub mod filters;
pub mod model;
pub mod query;

pub use error::RegistryError;
pub use filters::{RawSearchParams, SearchFilters, SortKey};
pub use model::{
    Category, CategoryTree, Donation, DonationRow, DonationStatus, EntityRef, Location,
    SubCategory,
};
pub use query::{DonationQuery, PaginationMeta};
