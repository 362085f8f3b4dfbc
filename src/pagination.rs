//! Generic pagination and search contract shared by listing use cases.
//!
//! [`SearchCriteria`] describes what a caller wants from a paged query;
//! [`PageResult`] is what any repository answering such a query must return.
//! The contract is entity-agnostic: repositories produce
//! `PageResult<Entity>` and use cases project it to `PageResult<Dto>` via
//! [`PageResult::map`] without touching the pagination metadata.

use serde::{Deserialize, Serialize};

/// Items returned per page when the caller does not specify a size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 15;

/// Ordering direction for a sorted listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Query parameters for a paged, filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub per_page: usize,
    /// Case-insensitive substring filter.
    pub search: Option<String>,
    /// Field to order by; repositories fall back to their default order for
    /// an unknown field.
    pub sort: Option<String>,
    /// Ordering direction, ascending unless requested otherwise.
    pub dir: SortDirection,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
            search: None,
            sort: None,
            dir: SortDirection::Asc,
        }
    }
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sort(mut self, field: impl Into<String>, dir: SortDirection) -> Self {
        self.sort = Some(field.into());
        self.dir = dir;
        self
    }

    /// Zero-based offset of the first item on the requested page.
    ///
    /// Pages below 1 are treated as page 1.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

/// One page of a query result plus its pagination metadata.
///
/// `total` counts every record matching the filter, ignoring pagination;
/// `items` holds at most `per_page` entries. A page past the end of the
/// result set is an empty `items`, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Slices one page out of a full, already filtered and sorted result set.
    pub fn paginate(all: Vec<T>, criteria: &SearchCriteria) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(criteria.offset())
            .take(criteria.per_page)
            .collect();

        Self {
            current_page: criteria.page.max(1),
            per_page: criteria.per_page,
            total,
            items,
        }
    }

    /// Projects the item type, preserving the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
