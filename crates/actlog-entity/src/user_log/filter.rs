//! Query filter for listing log entries.

use serde::{Deserialize, Serialize};

use super::model::UserLog;

/// Optional equality filters applied when listing entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Only entries recorded for this username.
    pub username: Option<String>,
    /// Only entries with this action label.
    pub action: Option<String>,
}

impl LogFilter {
    /// A filter that matches every entry.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Restrict to one action label.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Whether the entry satisfies every supplied condition.
    pub fn matches(&self, entry: &UserLog) -> bool {
        self.username
            .as_deref()
            .is_none_or(|u| entry.username() == u)
            && self.action.as_deref().is_none_or(|a| entry.action() == a)
    }
}
