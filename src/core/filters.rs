//! Filter normalization for donation search
//!
//! Raw query parameters arrive loosely typed and possibly absent. This
//! module turns them into a fully populated [`SearchFilters`] record.
//! The policy is permissive: malformed values coerce to their defaults
//! and never produce an error, matching the behavior the UI depends on.

use serde::Deserialize;
use uuid::Uuid;

use crate::core::model::DonationStatus;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 20;

/// Upper bound on page size. Without it a single request could pull the
/// whole table.
pub const MAX_PER_PAGE: usize = 100;

/// Query-string parameters as sent by the browser. Every field is an
/// optional string so that deserialization itself can never reject a
/// request; interpretation happens in [`SearchFilters::normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub category_id: Option<String>,
    pub sub_category_id: Option<String>,
    pub status: Option<String>,
    pub location_id: Option<String>,
    pub keyword: Option<String>,
    pub sort: Option<String>,
}

/// Sort order for donation search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// `created_at` — oldest first.
    CreatedAtAsc,
    /// `-created_at` — newest first. The default.
    #[default]
    CreatedAtDesc,
    /// `title` — lexicographic ascending.
    TitleAsc,
    /// `-title` — lexicographic descending.
    TitleDesc,
    /// `popular` — currently an alias for newest-first; no popularity
    /// metric exists yet.
    Popular,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created_at" => Some(Self::CreatedAtAsc),
            "-created_at" => Some(Self::CreatedAtDesc),
            "title" => Some(Self::TitleAsc),
            "-title" => Some(Self::TitleDesc),
            "popular" => Some(Self::Popular),
            _ => None,
        }
    }
}

/// Canonical, validated filter set with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Lowercased trimmed keyword; `None` when absent or blank.
    pub keyword: Option<String>,
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
    pub status: Option<DonationStatus>,
    pub location_id: Option<Uuid>,
    pub sort: SortKey,
    pub page: usize,
    pub per_page: usize,
}

impl SearchFilters {
    /// Apply defaults and coerce malformed values.
    ///
    /// - `page` falls back to 1 when absent, unparseable, or non-positive.
    /// - `per_page` falls back to 20 and is clamped to [`MAX_PER_PAGE`].
    /// - unrecognized `sort` and `status` values fall back to the default
    ///   sort and "no filter" respectively.
    /// - id filters that do not parse as UUIDs are treated as absent.
    /// - a blank keyword is equivalent to no keyword.
    pub fn normalize(raw: RawSearchParams) -> Self {
        let page = parse_positive(raw.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = parse_positive(raw.per_page.as_deref())
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE);

        let sort = raw
            .sort
            .as_deref()
            .and_then(SortKey::parse)
            .unwrap_or_default();

        let status = raw.status.as_deref().and_then(DonationStatus::parse);

        let keyword = raw
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase);

        Self {
            keyword,
            category_id: parse_id(raw.category_id.as_deref()),
            sub_category_id: parse_id(raw.sub_category_id.as_deref()),
            status,
            location_id: parse_id(raw.location_id.as_deref()),
            sort,
            page,
            per_page,
        }
    }
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::normalize(RawSearchParams::default())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n as usize)
}

fn parse_id(raw: Option<&str>) -> Option<Uuid> {
    raw.and_then(|s| Uuid::parse_str(s.trim()).ok())
}
