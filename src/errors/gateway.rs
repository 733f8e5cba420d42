use thiserror::Error;

use crate::types::wire::FieldError;

/// Transport and HTTP failures surfaced by the remote data gateway
///
/// Connection and timeout failures are kept distinct because remediation
/// differs: one means the backend is unreachable, the other that it is
/// running but too slow.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Cannot connect to the server: {message}. Check that the backend is running.")]
    Connection { message: String },

    #[error("Request timed out after {seconds}s. The server may be slow or unresponsive.")]
    Timeout { seconds: u64 },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field_errors: Vec<FieldError>,
    },

    #[error("{resource} not found. The record may have been deleted elsewhere.")]
    NotFound { resource: String },

    #[error("Server error ({status}): {message}. Please try again later.")]
    Server { status: u16, message: String },

    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },

    #[error("Failed to decode server response: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// True when the failure means the record no longer exists server-side
    ///
    /// Callers should refresh their list rather than retry the operation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
