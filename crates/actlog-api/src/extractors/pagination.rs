//! Query parameters for the user log list and export endpoints.

use serde::{Deserialize, Serialize};

use actlog_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use actlog_entity::user_log::LogFilter;

/// Pagination and filter parameters.
///
/// Blank filter values are treated as absent so that an empty search form
/// lists everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Only entries by this username.
    pub username: Option<String>,
    /// Only entries with this action.
    pub action: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ListParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }

    /// Converts to a `LogFilter`.
    pub fn filter(&self) -> LogFilter {
        LogFilter {
            username: non_blank(self.username.clone()),
            action: non_blank(self.action.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_ignored() {
        let params = ListParams {
            page: 0,
            per_page: 1000,
            username: Some("  ".to_string()),
            action: Some(" page_view ".to_string()),
        };
        let filter = params.filter();
        assert_eq!(filter.username, None);
        assert_eq!(filter.action.as_deref(), Some("page_view"));

        let page = params.page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
