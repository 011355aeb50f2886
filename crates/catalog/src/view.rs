//! View state: the search/filter/sort parameters a projection derives from.

use core::cmp::Ordering;
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockroom_core::{Category, Product};

/// Key a projection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Category,
    Price,
    Stock,
}

impl SortKey {
    /// Compare two products under this key.
    ///
    /// Numeric keys compare numerically; string keys compare
    /// case-insensitively. A missing category sorts before any present one.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => caseless_cmp(&a.name, &b.name),
            Self::Category => caseless_cmp(
                a.category.map_or("", |c| c.as_str()),
                b.category.map_or("", |c| c.as_str()),
            ),
            Self::Price => a.price.cmp(&b.price),
            Self::Stock => a.stock.cmp(&b.stock),
        }
    }
}

/// Error parsing a [`SortKey`] or [`SortDirection`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseViewError {
    kind: &'static str,
    value: String,
}

impl FromStr for SortKey {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "price" => Ok(Self::Price),
            "stock" => Ok(Self::Stock),
            other => Err(ParseViewError {
                kind: "sort key",
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stock => "stock",
        })
    }
}

/// Direction a sorted projection runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply this direction to a comparator result.
    ///
    /// `Equal` stays `Equal` either way, so reversing never breaks sort
    /// stability for ties.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseViewError {
                kind: "sort direction",
                value: other.to_owned(),
            }),
        }
    }
}

/// Parameters a projection is derived from.
///
/// Never persisted; the projection is recomputed from the collection plus
/// this state on every read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Case-insensitive substring match against name or description.
    /// Leading/trailing whitespace is trimmed; no other normalization.
    pub search: String,
    /// Equality filter on category; `None` means no category filter.
    pub category: Option<Category>,
    /// Sort key; `None` keeps the stored (insertion) order.
    pub sort_key: Option<SortKey>,
    /// Sort direction; only meaningful when a sort key is set.
    pub sort_direction: SortDirection,
}

impl ViewState {
    /// A view with no filtering and no sort: the stored order, unfiltered.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Whether a product passes the text search AND the category filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let term = self.search.trim().to_lowercase();
        let text_matches = term.is_empty()
            || product.name.to_lowercase().contains(&term)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term));

        let category_matches = self
            .category
            .is_none_or(|wanted| product.category == Some(wanted));

        text_matches && category_matches
    }
}

/// Case-insensitive string ordering.
///
/// Unicode lowercase folding stands in for locale-tailored collation; ties
/// between strings that fold equal are left to the caller's stable sort.
#[must_use]
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
