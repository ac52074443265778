//! Convenience result type alias for actlog.

use crate::error::AppError;

/// A specialized `Result` type for actlog operations.
pub type AppResult<T> = Result<T, AppError>;
