//! Domain records for the donation registry
//!
//! These mirror the persisted tables: donations plus the catalog tables
//! (categories, sub-categories, locations) they reference. Donations are
//! never hard-deleted; `deleted_at` marks removal and every read path
//! excludes marked rows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a donated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Available,
    Lending,
    Maintenance,
    Lost,
}

impl DonationStatus {
    /// Parse a status from its wire form. Unknown values yield `None`
    /// so callers can fall back to "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "available" => Some(Self::Available),
            "lending" => Some(Self::Lending),
            "maintenance" => Some(Self::Maintenance),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Lending => "lending",
            Self::Maintenance => "maintenance",
            Self::Lost => "lost",
        }
    }
}

/// A donated item.
///
/// `description` and `author` participate in keyword search alongside
/// `title`, which is why they live here rather than in an extended
/// detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    pub status: DonationStatus,
    pub category_id: Uuid,
    #[serde(default)]
    pub sub_category_id: Option<Uuid>,
    pub location_id: Uuid,
    #[serde(default)]
    pub donor_name: Option<String>,
    pub donated_date: NaiveDate,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Donation {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Mark the donation as removed without dropping the row.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Undo a soft delete.
    pub fn restore(&mut self) {
        self.deleted_at = None;
        self.updated_at = Utc::now();
    }
}

/// A top-level catalog category. `display_order` defines the stable
/// presentation order, ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub display_order: i32,
}

/// A second-level category. Belongs to exactly one [`Category`];
/// consistency with the parent is enforced at write time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub display_order: i32,
}

/// A physical storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub floor: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub shelf: Option<String>,
}

/// Minimal `{id, name}` reference embedded in denormalized responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Uuid,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A donation joined with the display fields of the catalog rows it
/// references. Produced by the store so the response layer never issues
/// follow-up lookups.
#[derive(Debug, Clone)]
pub struct DonationRow {
    pub donation: Donation,
    pub category: EntityRef,
    pub sub_category: Option<EntityRef>,
    pub location: EntityRef,
}

/// A category with its sub-categories attached, both levels ordered by
/// `display_order` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    pub sub_categories: Vec<SubCategory>,
}
