//! Response DTOs.

use serde::{Deserialize, Serialize};

use actlog_core::types::UserLogId;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Id assigned to a newly recorded entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// Entry id.
    pub id: UserLogId,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Whether the log store answered.
    pub store: bool,
}
