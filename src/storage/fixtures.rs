//! YAML fixtures for seeding the in-memory store
//!
//! The production deployment sits in front of a managed database; for
//! local development and tests the same tables are loaded from a YAML
//! document instead. Ids and timestamps may be omitted in the file and
//! are generated on load.

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::core::model::{Category, Donation, Location, SubCategory};

/// Fixture document: one section per table, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoreFixtures {
    pub categories: Vec<Category>,
    pub sub_categories: Vec<SubCategory>,
    pub locations: Vec<Location>,
    pub donations: Vec<Donation>,
}

impl StoreFixtures {
    /// Load fixtures from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load fixtures from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let fixtures: Self = serde_yaml::from_str(yaml)?;
        Ok(fixtures)
    }
}
