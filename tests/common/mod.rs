//! Shared fixtures for integration tests
//!
//! Builds a small but realistic dataset: two populated categories, one
//! empty one, two locations, and donations with controlled creation
//! times so sort order is deterministic.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use donation_registry::prelude::*;

/// Ids of the seeded rows, for filtering in assertions.
pub struct Seed {
    pub books: Uuid,
    pub equipment: Uuid,
    pub games: Uuid,
    pub software_eng: Uuid,
    pub office_library: Uuid,
    pub annex: Uuid,
}

pub fn donation(title: &str, category_id: Uuid, location_id: Uuid) -> Donation {
    Donation {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        author: None,
        isbn: None,
        publisher: None,
        status: DonationStatus::Available,
        category_id,
        sub_category_id: None,
        location_id,
        donor_name: None,
        donated_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        deleted_at: None,
    }
}

/// Seed the store with the standard dataset.
///
/// Books (display_order 1) holds five donations created one day apart,
/// "Item 1" oldest through "Item 5" newest. Equipment (2) holds one
/// donation, Games (3) holds none.
pub fn seed_store(store: &InMemoryStore) -> Seed {
    let seed = Seed {
        books: Uuid::new_v4(),
        equipment: Uuid::new_v4(),
        games: Uuid::new_v4(),
        software_eng: Uuid::new_v4(),
        office_library: Uuid::new_v4(),
        annex: Uuid::new_v4(),
    };

    store.insert_category(Category {
        id: seed.books,
        name: "Books".to_string(),
        description: None,
        display_order: 1,
    });
    store.insert_category(Category {
        id: seed.equipment,
        name: "Equipment".to_string(),
        description: None,
        display_order: 2,
    });
    store.insert_category(Category {
        id: seed.games,
        name: "Games".to_string(),
        description: Some("Board games".to_string()),
        display_order: 3,
    });
    store.insert_sub_category(SubCategory {
        id: seed.software_eng,
        category_id: seed.books,
        name: "Software Engineering".to_string(),
        description: None,
        display_order: 1,
    });
    store.insert_location(Location {
        id: seed.office_library,
        name: "Office Library".to_string(),
        building: Some("HQ".to_string()),
        floor: Some("3".to_string()),
        room: None,
        shelf: None,
    });
    store.insert_location(Location {
        id: seed.annex,
        name: "Annex".to_string(),
        building: None,
        floor: None,
        room: None,
        shelf: None,
    });

    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    for i in 1..=5u32 {
        let mut d = donation(&format!("Item {}", i), seed.books, seed.office_library);
        d.created_at = base + Duration::days(i64::from(i));
        d.updated_at = d.created_at;
        if i == 1 {
            d.sub_category_id = Some(seed.software_eng);
        }
        store.insert_donation(d);
    }

    let mut projector = donation("Projector", seed.equipment, seed.annex);
    projector.status = DonationStatus::Lending;
    projector.created_at = base + Duration::days(10);
    store.insert_donation(projector);

    seed
}
