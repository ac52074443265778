//! # actlog-auth
//!
//! Authorization for the activity log. Authentication is performed
//! upstream; this crate only decides, per caller role and requested
//! operation, whether a log view is permitted.
//!
//! ## Modules
//!
//! - `rbac`: role-to-operation policies and the [`AccessGate`] predicate

pub mod rbac;

pub use rbac::{AccessDecision, AccessGate, DenyReason, LogOperation};
