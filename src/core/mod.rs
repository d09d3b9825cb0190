//! Core console functionality
//!
//! Table query-state synchronization and the shared types exchanged with the
//! external booking API.

pub mod table;
pub mod types;
