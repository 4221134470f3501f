//! The filter/sort engine behind the admin table.
//!
//! [`derive_view`] is a pure function from the full collection plus a
//! [`FilterConfig`] to the ordered subset the table renders. Same inputs,
//! same output -- the table never patches rows incrementally, it re-derives.

use std::cmp::Ordering;

use crate::error::CoreError;
use crate::pet::Pet;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Age-bucket selector values.
///
/// The admin panel's selector offers exact ages plus a "4 ans et +" bucket;
/// the wire value `"4"` is that bucket's sentinel, not an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeFilter {
    /// No age filtering.
    Any,
    /// The "4 or older" bucket (`age >= 4`).
    FourPlus,
    /// Exact age match.
    Exact(i64),
}

impl AgeFilter {
    /// Parse a selector value. Empty means no filter, `"4"` is the
    /// four-or-older sentinel, anything else must be an integer age.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim() {
            "" => Ok(Self::Any),
            "4" => Ok(Self::FourPlus),
            other => other
                .parse::<i64>()
                .map(Self::Exact)
                .map_err(|_| CoreError::Validation(format!("Invalid age filter '{other}'"))),
        }
    }

    fn matches(&self, age: i64) -> bool {
        match self {
            Self::Any => true,
            Self::FourPlus => age >= 4,
            Self::Exact(n) => age == *n,
        }
    }
}

/// Sort orders offered by the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    AgeAsc,
    AgeDesc,
}

impl SortOrder {
    /// Parse a selector value (`name-asc`, `name-desc`, `age-asc`, `age-desc`).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "age-asc" => Ok(Self::AgeAsc),
            "age-desc" => Ok(Self::AgeDesc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}'. Must be one of: name-asc, name-desc, age-asc, age-desc"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::AgeAsc => "age-asc",
            Self::AgeDesc => "age-desc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::NameAsc
    }
}

/// One admin session's filter state, supplied with each table request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against name or description.
    pub search: String,
    pub age: AgeFilter,
    pub sort: SortOrder,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            age: AgeFilter::Any,
            sort: SortOrder::NameAsc,
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Case-insensitive name comparison.
///
/// Stands in for locale collation: Unicode-lowercased lexicographic order.
/// Equal keys return `Equal` so the stable sort keeps store order on ties.
fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Derive the filtered, ordered view of the collection.
///
/// 1. Keep records whose name or description contains `search`
///    (case-insensitive; empty search keeps everything).
/// 2. Apply the age bucket.
/// 3. Sort by the selected comparator. The sort is stable.
pub fn derive_view(all: &[Pet], config: &FilterConfig) -> Vec<Pet> {
    let term = config.search.to_lowercase();

    let mut view: Vec<Pet> = all
        .iter()
        .filter(|pet| {
            term.is_empty()
                || pet.name.to_lowercase().contains(&term)
                || pet.desc.to_lowercase().contains(&term)
        })
        .filter(|pet| config.age.matches(pet.age))
        .cloned()
        .collect();

    view.sort_by(|a, b| match config.sort {
        SortOrder::NameAsc => name_cmp(&a.name, &b.name),
        SortOrder::NameDesc => name_cmp(&b.name, &a.name),
        SortOrder::AgeAsc => a.age.cmp(&b.age),
        SortOrder::AgeDesc => b.age.cmp(&a.age),
    });

    view
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
