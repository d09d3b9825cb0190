//! Table query-state synchronization
//!
//! A bidirectional mapping between a data table's pagination/sort/filter/
//! search state and flat URL query parameters, so table state survives
//! reloads and drives server-side fetching. Pure computation: no operation
//! here blocks, suspends or errors.

mod codec;
mod state;
#[cfg(test)]
mod tests;
mod update;

pub use codec::{TableSpec, decode, decode_query_str, encode, encode_query_str};
pub use state::{DEFAULT_PAGE_SIZE, FilterValue, Sort, TableQuery};
pub use update::{
    PageState, Update, apply_filter_update, apply_pagination_update, apply_search_update,
    apply_sorting_update,
};
