//! HTTP-level tests against the in-memory log store.

mod helpers;
mod user_log_access_test;
mod user_log_api_test;
