//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_entity::user_log::NewUserLog;

/// Record an activity entry for the calling user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordLogRequest {
    /// Address the activity happened at.
    #[validate(length(min = 1, message = "current_url must not be empty"))]
    pub current_url: String,
    /// Short action label such as `page_view` or `login_attempt`.
    #[validate(length(min = 1, max = 255, message = "action must be 1-255 characters"))]
    pub action: String,
    /// Where the caller came from.
    pub referrer: Option<String>,
    /// Arbitrary JSON payload, stored as text.
    pub data: Option<serde_json::Value>,
}

impl RecordLogRequest {
    /// Validate and convert into a draft owned by `username`.
    pub fn into_draft(self, username: &str) -> AppResult<NewUserLog> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid log entry: {e}")))?;

        let mut draft = NewUserLog::new(username, self.current_url, self.action);
        if let Some(referrer) = self.referrer.filter(|r| !r.is_empty()) {
            draft = draft.with_referrer(referrer);
        }
        if let Some(data) = self.data {
            draft = draft.with_data(serde_json::to_string(&data)?);
        }
        Ok(draft)
    }
}
