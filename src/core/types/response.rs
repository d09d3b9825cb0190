//! Response envelope returned by the external booking API

use super::pagination::Pagination;
use serde::{Deserialize, Serialize};

/// Envelope wrapping every external API response
///
/// The console only interprets `pagination`; `data` is passed through to the
/// rendering layer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// HTTP-style status code reported by the API
    pub status: u16,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response payload
    #[serde(default)]
    pub data: Option<T>,
    /// Pagination block, present on list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the API reported success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Page-count bound for the table, when the response is paginated
    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.as_ref().map(|p| p.total_pages)
    }
}
