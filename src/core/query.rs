//! Query composition and pagination utilities
//!
//! [`DonationQuery`] is the store-agnostic form of a search: the
//! predicates, the ordering, and the page window. Store backends apply
//! `matches`/`compare` instead of re-deriving filter semantics, so the
//! count query and the page query always agree on what a match is.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::filters::{SearchFilters, SortKey};
use crate::core::model::Donation;

/// A composed donation search query.
#[derive(Debug, Clone)]
pub struct DonationQuery {
    pub filters: SearchFilters,
}

impl DonationQuery {
    pub fn from_filters(filters: SearchFilters) -> Self {
        Self { filters }
    }

    /// Zero-based row offset of the requested page.
    ///
    /// Saturating: the normalizer accepts any positive page number, so an
    /// absurdly large page must land past the end of the result set, not
    /// overflow.
    pub fn offset(&self) -> usize {
        self.filters
            .page
            .saturating_sub(1)
            .saturating_mul(self.filters.per_page)
    }

    /// Row limit of the requested page.
    pub fn limit(&self) -> usize {
        self.filters.per_page
    }

    /// Whether a donation satisfies every non-pagination predicate.
    ///
    /// Soft-deleted rows never match. Id/status predicates are
    /// conjunctive; the keyword predicate is an OR over title,
    /// description and author, case-insensitive, conjoined with the rest.
    pub fn matches(&self, donation: &Donation) -> bool {
        if donation.is_deleted() {
            return false;
        }

        let f = &self.filters;
        if f.category_id.is_some_and(|id| donation.category_id != id) {
            return false;
        }
        if f.sub_category_id
            .is_some_and(|id| donation.sub_category_id != Some(id))
        {
            return false;
        }
        if f.status.is_some_and(|status| donation.status != status) {
            return false;
        }
        if f.location_id.is_some_and(|id| donation.location_id != id) {
            return false;
        }

        if let Some(keyword) = &f.keyword {
            // keyword is already lowercased by the normalizer
            let hit = contains_ci(&donation.title, keyword)
                || donation
                    .description
                    .as_deref()
                    .is_some_and(|text| contains_ci(text, keyword))
                || donation
                    .author
                    .as_deref()
                    .is_some_and(|text| contains_ci(text, keyword));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Total ordering of two donations under the query's sort key.
    ///
    /// Ties break on id so pagination windows stay stable across requests.
    pub fn compare(&self, a: &Donation, b: &Donation) -> Ordering {
        let primary = match self.filters.sort {
            SortKey::CreatedAtAsc => a.created_at.cmp(&b.created_at),
            // TODO: rank Popular by lending counts once the lendings table is wired in
            SortKey::CreatedAtDesc | SortKey::Popular => b.created_at.cmp(&a.created_at),
            SortKey::TitleAsc => a.title.cmp(&b.title),
            SortKey::TitleDesc => b.title.cmp(&a.title),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1).
    pub page: usize,

    /// Number of items per page.
    pub per_page: usize,

    /// Total number of matching rows (after filters, before pagination).
    pub total: usize,

    /// Total number of pages; 0 when nothing matches.
    pub total_pages: usize,
}

impl PaginationMeta {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }
}
