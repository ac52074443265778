//! # actlog-entity
//!
//! Domain entity models for actlog. [`UserLog`](user_log::UserLog) maps the
//! `user_log` table row; the remaining types are value objects used to
//! create and query it.

pub mod user;
pub mod user_log;
