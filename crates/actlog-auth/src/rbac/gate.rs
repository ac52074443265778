//! The access gate: a stateless predicate over caller role and operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use actlog_core::types::UserLogId;
use actlog_entity::user::UserRole;

use super::policies::{LogOperation, RbacPolicies};

/// Why a request was denied. Each variant has a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DenyReason {
    /// The caller is not an administrator.
    #[serde(rename = "NOT_ADMIN")]
    NotAdmin,
}

impl DenyReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAdmin => "NOT_ADMIN",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of [`AccessGate::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The operation may proceed.
    Allow,
    /// The operation must not reach the log store.
    Deny(DenyReason),
}

impl AccessDecision {
    /// Returns `true` for [`AccessDecision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert into a `Result`, carrying the reason on denial.
    pub fn require(self) -> Result<(), DenyReason> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(reason),
        }
    }
}

/// Decides whether a caller may list, show, or edit log entries.
///
/// The gate has no side effects and no mutable state; its answer depends
/// only on its arguments.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    policies: RbacPolicies,
}

impl AccessGate {
    /// Creates a gate with the fixed policy set.
    ///
    /// Policies are not injectable: the only role without access is
    /// [`UserRole::User`], so every denial is [`DenyReason::NotAdmin`].
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Decide whether `role` may perform `operation`.
    ///
    /// `target` names the entry for `show` and `edit`. It does not affect
    /// the outcome: ownership of an entry grants nothing.
    pub fn authorize(
        &self,
        role: UserRole,
        operation: LogOperation,
        _target: Option<UserLogId>,
    ) -> AccessDecision {
        if self.policies.permits(&role, &operation) {
            AccessDecision::Allow
        } else {
            AccessDecision::Deny(DenyReason::NotAdmin)
        }
    }
}
