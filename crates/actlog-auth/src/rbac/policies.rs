//! Role-to-operation mapping definitions.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use actlog_entity::user::UserRole;

/// An operation against the activity log guarded by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOperation {
    /// Browse the list of entries.
    List,
    /// View a single entry.
    Show,
    /// Open a single entry in the edit view.
    Edit,
}

impl LogOperation {
    /// Every guarded operation.
    pub const ALL: [LogOperation; 3] = [Self::List, Self::Show, Self::Edit];

    /// Return the operation as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show => "show",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for LogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines which log operations each role may perform.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<UserRole, HashSet<LogOperation>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    ///
    /// Administrators may perform every operation. Ordinary users have no
    /// access to the log at all, including entries they authored.
    pub fn new() -> Self {
        let mut policies = HashMap::new();
        policies.insert(UserRole::Admin, LogOperation::ALL.into_iter().collect());
        policies.insert(UserRole::User, HashSet::new());
        Self { policies }
    }

    /// Checks whether the given role may perform the operation.
    pub fn permits(&self, role: &UserRole, operation: &LogOperation) -> bool {
        self.policies
            .get(role)
            .map(|ops| ops.contains(operation))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
