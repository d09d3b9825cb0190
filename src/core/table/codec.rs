//! URL query-parameter codec for table state
//!
//! `encode` produces the canonical, default-stripped parameter set;
//! `decode` is defensive and never fails: malformed values degrade to the
//! documented defaults instead of erroring.

use super::state::{DEFAULT_PAGE_SIZE, FilterValue, Sort, TableQuery};
use crate::core::types::SortDirection;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use url::form_urlencoded;

const PAGE_KEY: &str = "page";
const PAGE_SIZE_KEY: &str = "pageSize";
const SORT_KEY: &str = "sort";
const SEARCH_KEY: &str = "q";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column typing for a table's filterable columns
///
/// Filter values arrive as flat strings; each table declares which of its
/// columns decode as dates, date ranges or multi-select lists. Undeclared
/// columns decode as plain text.
#[derive(Debug, Clone, Default)]
pub struct TableSpec {
    date_columns: BTreeSet<String>,
    date_range_columns: BTreeSet<String>,
    list_columns: BTreeSet<String>,
}

impl TableSpec {
    /// Create a spec with no typed columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a single-date column
    pub fn date_column(mut self, column: impl Into<String>) -> Self {
        self.date_columns.insert(column.into());
        self
    }

    /// Declare a date-range column
    pub fn date_range_column(mut self, column: impl Into<String>) -> Self {
        self.date_range_columns.insert(column.into());
        self
    }

    /// Declare a multi-select column
    pub fn list_column(mut self, column: impl Into<String>) -> Self {
        self.list_columns.insert(column.into());
        self
    }

    fn is_date(&self, column: &str) -> bool {
        self.date_columns.contains(column)
    }

    fn is_date_range(&self, column: &str) -> bool {
        self.date_range_columns.contains(column)
    }

    fn is_list(&self, column: &str) -> bool {
        self.list_columns.contains(column)
    }
}

/// Decode flat query parameters into table state
///
/// Later occurrences of a key win. Malformed integers keep the defaults,
/// malformed sort or date values decode as absent, and an unparseable filter
/// value degrades to no filter.
pub fn decode(params: &[(String, String)], spec: &TableSpec) -> TableQuery {
    let mut query = TableQuery::default();
    for (key, value) in params {
        match key.as_str() {
            PAGE_KEY => {
                if let Some(page) = parse_positive(value) {
                    query.page_index = page - 1;
                }
            }
            PAGE_SIZE_KEY => {
                if let Some(size) = parse_positive(value) {
                    query.page_size = size;
                }
            }
            SORT_KEY => query.sort = parse_sort(value),
            SEARCH_KEY => {
                query.search = if value.is_empty() {
                    None
                } else {
                    Some(value.clone())
                };
            }
            column => match decode_filter(column, value, spec) {
                Some(filter) => {
                    query.filters.insert(column.to_string(), filter);
                }
                None => {
                    query.filters.remove(column);
                }
            },
        }
    }
    query
}

/// Encode table state as canonical query parameters
///
/// Default-valued fields emit no key: page 1, the default page size, a
/// cleared sort, empty search and empty filters all disappear from the URL.
pub fn encode(query: &TableQuery) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    if query.page_index > 0 {
        params.push((PAGE_KEY.to_string(), query.page().to_string()));
    }
    if query.page_size != DEFAULT_PAGE_SIZE {
        params.push((PAGE_SIZE_KEY.to_string(), query.page_size.to_string()));
    }
    if let Some(sort) = &query.sort {
        if !sort.column.is_empty() {
            params.push((
                SORT_KEY.to_string(),
                format!("{}.{}", sort.column, sort.direction()),
            ));
        }
    }
    if let Some(search) = &query.search {
        if !search.is_empty() {
            params.push((SEARCH_KEY.to_string(), search.clone()));
        }
    }
    for (column, filter) in &query.filters {
        if let Some(value) = encode_filter(filter) {
            params.push((column.clone(), value));
        }
    }
    params
}

/// Decode a raw query string (with or without a leading `?`)
pub fn decode_query_str(query: &str, spec: &TableSpec) -> TableQuery {
    let query = query.strip_prefix('?').unwrap_or(query);
    let params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    decode(&params, spec)
}

/// Encode table state as a percent-encoded query string
pub fn encode_query_str(query: &TableQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in encode(query) {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn parse_sort(value: &str) -> Option<Sort> {
    // Split on the last dot so column identifiers may contain dots.
    let (column, direction) = value.rsplit_once('.')?;
    if column.is_empty() {
        return None;
    }
    let direction = direction.parse::<SortDirection>().ok()?;
    Some(Sort::new(column, direction == SortDirection::Desc))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn decode_filter(column: &str, value: &str, spec: &TableSpec) -> Option<FilterValue> {
    if spec.is_date_range(column) {
        // "from,to" with either side optionally empty; a bare date counts
        // as an open-ended from.
        let (from_raw, to_raw) = value.split_once(',').unwrap_or((value, ""));
        let from = parse_date(from_raw);
        let to = parse_date(to_raw);
        if from.is_none() && to.is_none() {
            return None;
        }
        return Some(FilterValue::DateRange { from, to });
    }
    if spec.is_date(column) {
        return parse_date(value).map(FilterValue::Date);
    }
    if spec.is_list(column) {
        let items: Vec<String> = value
            .split(',')
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
        if items.is_empty() {
            return None;
        }
        return Some(FilterValue::List(items));
    }
    if value.is_empty() {
        None
    } else {
        Some(FilterValue::Text(value.to_string()))
    }
}

fn encode_filter(filter: &FilterValue) -> Option<String> {
    if filter.is_empty() {
        return None;
    }
    let value = match filter {
        FilterValue::Text(text) => text.clone(),
        FilterValue::List(items) => items.join(","),
        FilterValue::Date(date) => date.format(DATE_FORMAT).to_string(),
        FilterValue::DateRange { from, to } => {
            let fmt = |date: &Option<NaiveDate>| {
                date.map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            };
            format!("{},{}", fmt(from), fmt(to))
        }
    };
    Some(value)
}
