//! In-memory implementation of DonationStore for testing and development
//!
//! Uses a single RwLock over all tables so each query sees a consistent
//! snapshot for the duration of one lock acquisition. The count query
//! and the page query still take the lock separately, mirroring the two
//! independent round-trips a remote store would make.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::model::{
    Category, CategoryTree, Donation, DonationRow, EntityRef, Location, SubCategory,
};
use crate::core::query::DonationQuery;
use crate::storage::{DonationStore, StoreFixtures};

#[derive(Default)]
struct Tables {
    donations: HashMap<Uuid, Donation>,
    categories: HashMap<Uuid, Category>,
    sub_categories: HashMap<Uuid, SubCategory>,
    locations: HashMap<Uuid, Location>,
}

/// In-memory donation store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from fixture data.
    pub fn from_fixtures(fixtures: StoreFixtures) -> Self {
        let store = Self::new();
        store.load_fixtures(fixtures);
        store
    }

    /// Insert fixture rows into the live tables.
    pub fn load_fixtures(&self, fixtures: StoreFixtures) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        for category in fixtures.categories {
            tables.categories.insert(category.id, category);
        }
        for sub_category in fixtures.sub_categories {
            tables.sub_categories.insert(sub_category.id, sub_category);
        }
        for location in fixtures.locations {
            tables.locations.insert(location.id, location);
        }
        for donation in fixtures.donations {
            tables.donations.insert(donation.id, donation);
        }
    }

    pub fn insert_category(&self, category: Category) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.categories.insert(category.id, category);
    }

    pub fn insert_sub_category(&self, sub_category: SubCategory) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.sub_categories.insert(sub_category.id, sub_category);
    }

    pub fn insert_location(&self, location: Location) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.locations.insert(location.id, location);
    }

    pub fn insert_donation(&self, donation: Donation) {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables.donations.insert(donation.id, donation);
    }

    /// Set the deletion marker on a donation. Rows are never removed.
    pub fn soft_delete_donation(&self, id: &Uuid) -> Result<()> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        let donation = tables
            .donations
            .get_mut(id)
            .ok_or_else(|| anyhow!("Donation not found: {}", id))?;
        donation.soft_delete();
        Ok(())
    }
}

impl Tables {
    /// Join a donation with the display fields of its referenced rows.
    ///
    /// Category and location references are mandatory (inner join); a
    /// dangling reference is a store-integrity error. The sub-category
    /// join is nullable and a dangling optional reference degrades to
    /// "no sub-category" rather than failing the whole page.
    fn join_row(&self, donation: &Donation) -> Result<DonationRow> {
        let category = self
            .categories
            .get(&donation.category_id)
            .map(|c| EntityRef::new(c.id, c.name.clone()))
            .ok_or_else(|| {
                anyhow!(
                    "Category {} missing for donation {}",
                    donation.category_id,
                    donation.id
                )
            })?;

        let location = self
            .locations
            .get(&donation.location_id)
            .map(|l| EntityRef::new(l.id, l.name.clone()))
            .ok_or_else(|| {
                anyhow!(
                    "Location {} missing for donation {}",
                    donation.location_id,
                    donation.id
                )
            })?;

        let sub_category = donation
            .sub_category_id
            .and_then(|id| self.sub_categories.get(&id))
            .map(|s| EntityRef::new(s.id, s.name.clone()));

        Ok(DonationRow {
            donation: donation.clone(),
            category,
            sub_category,
            location,
        })
    }
}

#[async_trait]
impl DonationStore for InMemoryStore {
    async fn count_donations(&self, query: &DonationQuery) -> Result<usize> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables
            .donations
            .values()
            .filter(|d| query.matches(d))
            .count())
    }

    async fn search_donations(&self, query: &DonationQuery) -> Result<Vec<DonationRow>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<&Donation> = tables
            .donations
            .values()
            .filter(|d| query.matches(d))
            .collect();
        matching.sort_by(|a, b| query.compare(a, b));

        matching
            .into_iter()
            .skip(query.offset())
            .take(query.limit())
            .map(|donation| tables.join_row(donation))
            .collect()
    }

    async fn list_categories(&self) -> Result<Vec<CategoryTree>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut categories: Vec<Category> = tables.categories.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(categories
            .into_iter()
            .map(|category| {
                let mut sub_categories: Vec<SubCategory> = tables
                    .sub_categories
                    .values()
                    .filter(|s| s.category_id == category.id)
                    .cloned()
                    .collect();
                sub_categories.sort_by(|a, b| {
                    a.display_order
                        .cmp(&b.display_order)
                        .then_with(|| a.name.cmp(&b.name))
                });

                CategoryTree {
                    category,
                    sub_categories,
                }
            })
            .collect())
    }

    async fn list_locations(&self) -> Result<Vec<Location>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut locations: Vec<Location> = tables.locations.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(locations)
    }
}
