//! Result of a gated read: either the data or the denial.

use actlog_auth::DenyReason;

/// The outcome of a service call guarded by the access gate.
///
/// A denial is an ordinary value, not an error: callers must match on it
/// and render it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<T> {
    /// The gate allowed the operation; here is its result.
    Allowed(T),
    /// The gate denied the operation; the store was not touched.
    Denied(DenyReason),
}

impl<T> Gated<T> {
    /// Returns `true` if the operation was denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Transform the allowed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Gated<U> {
        match self {
            Self::Allowed(value) => Gated::Allowed(f(value)),
            Self::Denied(reason) => Gated::Denied(reason),
        }
    }

    /// Convert into a `Result`, carrying the reason on denial.
    pub fn into_result(self) -> Result<T, DenyReason> {
        match self {
            Self::Allowed(value) => Ok(value),
            Self::Denied(reason) => Err(reason),
        }
    }
}
