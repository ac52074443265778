//! Caller identity configuration.
//!
//! Authentication itself happens upstream; actlog only reads the identity
//! the upstream provider forwards in trusted request headers.

use serde::{Deserialize, Serialize};

/// Names of the headers carrying the caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Header holding the authenticated username.
    #[serde(default = "default_user_header")]
    pub user_header: String,
    /// Header holding the caller's role (`admin` or `user`).
    #[serde(default = "default_role_header")]
    pub role_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_header: default_user_header(),
            role_header: default_role_header(),
        }
    }
}

fn default_user_header() -> String {
    "x-auth-user".to_string()
}

fn default_role_header() -> String {
    "x-auth-role".to_string()
}
