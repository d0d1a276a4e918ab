//! List view-state pipeline
//!
//! Pure transformation applied to a fetched collection before rendering:
//! category filter, then text search, then sort. The pipeline never runs
//! when the upstream fetch failed; callers surface that error instead.

use chrono::{DateTime, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Pseudo-category that passes everything through
pub const ALL_CATEGORY: &str = "all";

/// An entity the pipeline can filter, search, and sort
pub trait ListEntry {
    fn name(&self) -> &str;

    /// Category used by the exact-match filter; `None` means the entity
    /// type has no category axis and only `All` matches it.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Date used by `newest`/`oldest`; `None` means missing or unparsable.
    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Fields the case-insensitive text search looks at
    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name()];
        if let Some(category) = self.category() {
            fields.push(category);
        }
        fields
    }
}

/// Parse the date formats the external API is known to emit
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by name, case-folded
    Az,
    /// Descending by name, case-folded
    Za,
    /// Most recent date first
    #[default]
    Newest,
    /// Oldest date first
    Oldest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Az => write!(f, "az"),
            SortOrder::Za => write!(f, "za"),
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` and the empty string mean no filtering
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }
}

/// Transient per-view state; recreated per page, never persisted
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
}

/// Run the pipeline: category filter, text search, sort. Stable throughout;
/// ties keep their pre-sort relative order.
pub fn apply<'a, T: ListEntry>(items: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    let term = query.search.trim().to_lowercase();

    let mut out: Vec<&T> = items
        .iter()
        .filter(|entry| match &query.category {
            CategoryFilter::All => true,
            // Exact, case-sensitive match
            CategoryFilter::Only(wanted) => entry.category() == Some(wanted.as_str()),
        })
        .filter(|entry| {
            if term.is_empty() {
                return true;
            }
            entry
                .search_haystacks()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .collect();

    sort_entries(&mut out, query.sort);
    out
}

fn sort_entries<T: ListEntry>(entries: &mut [&T], order: SortOrder) {
    match order {
        SortOrder::Az => entries.sort_by(|a, b| compare_names(*a, *b)),
        SortOrder::Za => entries.sort_by(|a, b| compare_names(*b, *a)),
        // Entries without a usable date sink to the end under both
        // date orders.
        SortOrder::Newest => entries.sort_by_key(|e| (e.date().is_none(), Reverse(e.date()))),
        SortOrder::Oldest => entries.sort_by_key(|e| (e.date().is_none(), e.date())),
    }
}

fn compare_names<T: ListEntry>(a: &T, b: &T) -> std::cmp::Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

/// Distinct category values in first-seen order, with the `all`
/// pseudo-category first. Derived from the unfiltered collection at fetch
/// time and deliberately never recomputed as filters are applied, so a
/// category emptied by a search stays selectable.
pub fn category_options<T: ListEntry>(items: &[T]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORY.to_string()];
    for entry in items {
        if let Some(category) = entry.category() {
            if !options.iter().any(|existing| existing == category) {
                options.push(category.to_string());
            }
        }
    }
    options
}
