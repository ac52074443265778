//! Request and response data transfer objects.

pub mod request;
pub mod response;

pub use request::RecordLogRequest;
pub use response::{ApiResponse, HealthResponse, RecordedResponse};
