//! Incremental table-state updates
//!
//! Interactive controls request state transitions either as a literal new
//! value or as a function of the previous value, without knowing the current
//! state in advance. Every update is a pure `(state, update) -> state`
//! transform.

use super::state::{DEFAULT_PAGE_SIZE, FilterValue, Sort, TableQuery};

/// A requested change to one piece of table state
pub enum Update<T> {
    /// Replace with a literal value
    Set(T),
    /// Derive the new value from the previous one
    With(Box<dyn FnOnce(T) -> T>),
}

impl<T> Update<T> {
    /// Request a literal replacement
    pub fn set(value: T) -> Self {
        Update::Set(value)
    }

    /// Request a functional update
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(T) -> T + 'static,
    {
        Update::With(Box::new(f))
    }

    /// Resolve the update against the previous value
    pub fn apply(self, previous: T) -> T {
        match self {
            Update::Set(value) => value,
            Update::With(f) => f(previous),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Set(value)
    }
}

/// Pagination slice of the table state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Current page, 0-based
    pub page_index: u32,
    /// Rows per page
    pub page_size: u32,
}

/// Apply a pagination update
///
/// A page-size change moves the view back to the first page. A zero page
/// size degrades to the default rather than producing an unusable state.
pub fn apply_pagination_update(mut query: TableQuery, update: Update<PageState>) -> TableQuery {
    let previous = PageState {
        page_index: query.page_index,
        page_size: query.page_size,
    };
    let next = update.apply(previous);
    let page_size = if next.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        next.page_size
    };
    query.page_index = if page_size != previous.page_size {
        0
    } else {
        next.page_index
    };
    query.page_size = page_size;
    query
}

/// Apply a sorting update
///
/// The table sorts on a single column: the first entry wins. An empty list
/// clears the sort entirely, so the `sort` key disappears from the URL
/// rather than serializing as an empty value.
pub fn apply_sorting_update(mut query: TableQuery, update: Update<Vec<Sort>>) -> TableQuery {
    let previous: Vec<Sort> = query.sort.take().into_iter().collect();
    query.sort = update
        .apply(previous)
        .into_iter()
        .next()
        .filter(|sort| !sort.column.is_empty());
    query
}

/// Apply a filter update for one column
///
/// `None` or an empty value removes the column's filter. Any change moves
/// the view back to the first page.
pub fn apply_filter_update(
    mut query: TableQuery,
    column: &str,
    update: Update<Option<FilterValue>>,
) -> TableQuery {
    let previous = query.filters.get(column).cloned();
    let next = update
        .apply(previous.clone())
        .filter(|value| !value.is_empty());
    if next != previous {
        query.page_index = 0;
    }
    match next {
        Some(value) => {
            query.filters.insert(column.to_string(), value);
        }
        None => {
            query.filters.remove(column);
        }
    }
    query
}

/// Apply a search-text update
///
/// Empty or whitespace-only text clears the search. Any change moves the
/// view back to the first page. Debouncing keystrokes is the UI binding
/// layer's concern; this transform is time-free.
pub fn apply_search_update(mut query: TableQuery, update: Update<Option<String>>) -> TableQuery {
    let previous = query.search.clone();
    let next = update
        .apply(previous.clone())
        .filter(|text| !text.trim().is_empty());
    if next != previous {
        query.page_index = 0;
    }
    query.search = next;
    query
}
