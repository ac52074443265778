//! Request context carrying the caller identity forwarded by the upstream provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use actlog_entity::user::UserRole;

/// Context for the current identified request.
///
/// Built by the HTTP layer and passed into every service method so that
/// each operation knows *who* is acting. Nothing in the service layer reads
/// identity from anywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's username.
    pub username: String,
    /// The caller's role.
    pub role: UserRole,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        username: impl Into<String>,
        role: UserRole,
        ip_address: impl Into<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            role,
            ip_address: ip_address.into(),
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
