//! Public response shapes for the read endpoints
//!
//! The response shaper maps store rows into the wire format the UI
//! consumes. It never re-sorts: output order is whatever the store's
//! query produced.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::core::model::{DonationRow, DonationStatus, EntityRef};
use crate::core::query::PaginationMeta;

/// One donation as rendered in search results.
///
/// `avg_rating`, `review_count` and `image_urls` are contractual
/// placeholders: no rating or image subsystem exists yet, and the UI
/// already renders these fields, so they are always emitted as
/// zero/empty rather than omitted.
#[derive(Debug, Clone, Serialize)]
pub struct DonationView {
    pub id: Uuid,
    pub title: String,
    pub category: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<EntityRef>,
    pub status: DonationStatus,
    pub location: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
    pub donated_date: NaiveDate,
    pub avg_rating: f64,
    pub review_count: u64,
    pub image_urls: Vec<String>,
}

impl From<DonationRow> for DonationView {
    fn from(row: DonationRow) -> Self {
        Self {
            id: row.donation.id,
            title: row.donation.title,
            category: row.category,
            sub_category: row.sub_category,
            status: row.donation.status,
            location: row.location,
            donor_name: row.donation.donor_name,
            donated_date: row.donation.donated_date,
            avg_rating: 0.0,
            review_count: 0,
            image_urls: Vec::new(),
        }
    }
}

/// Success envelope for the paginated donation search.
#[derive(Debug, Serialize)]
pub struct DonationListResponse {
    pub success: bool,
    pub data: Vec<DonationView>,
    pub pagination: PaginationMeta,
}

/// Success envelope for the flat catalog listings.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Donation;
    use chrono::Utc;

    #[test]
    fn test_view_carries_placeholder_aggregates() {
        let donation = Donation {
            id: Uuid::new_v4(),
            title: "Clean Code".to_string(),
            description: Some("A handbook of agile software craftsmanship".to_string()),
            author: Some("Robert C. Martin".to_string()),
            isbn: None,
            publisher: None,
            status: DonationStatus::Available,
            category_id: Uuid::new_v4(),
            sub_category_id: None,
            location_id: Uuid::new_v4(),
            donor_name: Some("Alice".to_string()),
            donated_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let row = DonationRow {
            category: EntityRef::new(donation.category_id, "Books"),
            sub_category: None,
            location: EntityRef::new(donation.location_id, "Office Library"),
            donation,
        };

        let view = DonationView::from(row);
        assert_eq!(view.avg_rating, 0.0);
        assert_eq!(view.review_count, 0);
        assert!(view.image_urls.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        // placeholders are emitted, absent optionals are omitted
        assert_eq!(json["review_count"], 0);
        assert!(json.get("sub_category").is_none());
        assert_eq!(json["donor_name"], "Alice");
    }
}
