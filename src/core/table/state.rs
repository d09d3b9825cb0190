//! Table query state

use crate::core::types::SortDirection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size used when the URL carries none
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Active sort on a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Column identifier
    pub column: String,
    /// Descending order
    pub desc: bool,
}

impl Sort {
    /// Create a sort on a column
    pub fn new(column: impl Into<String>, desc: bool) -> Self {
        Self {
            column: column.into(),
            desc,
        }
    }

    /// Direction of the sort
    pub fn direction(&self) -> SortDirection {
        if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Value of a per-column filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Free-form scalar filter
    Text(String),
    /// Multi-select filter
    List(Vec<String>),
    /// Single-date filter
    Date(NaiveDate),
    /// Date-range filter; either bound may be open
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Whether the value carries no filtering information
    ///
    /// Empty values are dropped from the state rather than stored, so the
    /// canonical serialization never emits keys for them.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(text) => text.is_empty(),
            FilterValue::List(items) => items.is_empty(),
            FilterValue::Date(_) => false,
            FilterValue::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }
}

/// Structured state of a data table
///
/// Owned by the current page view; its canonical serialization is the URL
/// query string, so the state survives reloads and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Current page, 0-based (the URL form is 1-based)
    pub page_index: u32,
    /// Rows per page
    pub page_size: u32,
    /// Active sort, if any
    pub sort: Option<Sort>,
    /// Free-text search
    pub search: Option<String>,
    /// Per-column filters, keyed by column identifier
    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            search: None,
            filters: BTreeMap::new(),
        }
    }
}

impl TableQuery {
    /// Create the default state
    pub fn new() -> Self {
        Self::default()
    }

    /// External 1-based page number
    pub fn page(&self) -> u32 {
        self.page_index + 1
    }

    /// Offset of the first row on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    /// Page-count bound for a total row count
    pub fn page_count(&self, total: u64) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        total
            .div_ceil(u64::from(self.page_size))
            .min(u64::from(u32::MAX)) as u32
    }

    /// Set the 1-based page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page_index = page.saturating_sub(1);
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the sort
    pub fn with_sort(mut self, column: impl Into<String>, desc: bool) -> Self {
        self.sort = Some(Sort::new(column, desc));
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set a column filter; empty values are dropped
    pub fn with_filter(mut self, column: impl Into<String>, value: FilterValue) -> Self {
        if !value.is_empty() {
            self.filters.insert(column.into(), value);
        }
        self
    }
}
