//! Error handling for the console core
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{ConsoleError, Result};
