//! User activity log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use actlog_core::error::AppError;
use actlog_core::result::AppResult;
use actlog_core::types::UserLogId;

/// Maximum length of [`UserLog::action`], in UTF-16 code units.
pub const MAX_ACTION_LEN: usize = 255;

/// An immutable record of one user action.
///
/// Values are only produced by a log store, either when a [`NewUserLog`]
/// is recorded or when a stored row is read back. There are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserLog {
    id: UserLogId,
    username: String,
    current_url: String,
    referrer: Option<String>,
    action: String,
    data: Option<String>,
    created: DateTime<Utc>,
}

impl UserLog {
    /// Materialize a stored entry from a draft.
    ///
    /// Intended for store backends that assign `id` and `created` themselves.
    /// The draft is validated here, so no entry can exist with a blank
    /// required field.
    pub fn from_draft(
        id: UserLogId,
        draft: NewUserLog,
        created: DateTime<Utc>,
    ) -> AppResult<Self> {
        draft.validate()?;
        Ok(Self {
            id,
            username: draft.username,
            current_url: draft.current_url,
            referrer: draft.referrer,
            action: draft.action,
            data: draft.data,
            created,
        })
    }

    /// Store-assigned surrogate key.
    pub fn id(&self) -> UserLogId {
        self.id
    }

    /// The actor who performed the action.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The URL the actor was on.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// The URL the actor arrived from, if recorded.
    pub fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }

    /// Categorical action label, e.g. `"page_view"`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Free-form payload, usually JSON text.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// When the entry was recorded.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

/// Data required to record a new log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserLog {
    /// The actor who performed the action.
    pub username: String,
    /// The URL the actor was on.
    pub current_url: String,
    /// The URL the actor arrived from.
    pub referrer: Option<String>,
    /// Categorical action label.
    pub action: String,
    /// Free-form payload.
    pub data: Option<String>,
}

impl NewUserLog {
    /// Create a draft with the required fields and no optional payload.
    pub fn new(
        username: impl Into<String>,
        current_url: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            current_url: current_url.into(),
            referrer: None,
            action: action.into(),
            data: None,
        }
    }

    /// Attach the referrer URL.
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Attach the payload text.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Check the required fields before anything is persisted.
    pub fn validate(&self) -> AppResult<()> {
        if self.username.is_empty() {
            return Err(AppError::validation("username is required"));
        }
        if self.current_url.is_empty() {
            return Err(AppError::validation("current_url is required"));
        }
        if self.action.is_empty() {
            return Err(AppError::validation("action is required"));
        }
        if self.action.encode_utf16().count() > MAX_ACTION_LEN {
            return Err(AppError::validation(format!(
                "action must be at most {MAX_ACTION_LEN} characters"
            )));
        }
        Ok(())
    }
}
