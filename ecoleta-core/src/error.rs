use std::time::Duration;

use thiserror::Error;

/// Failure of a call across a network boundary.
///
/// None of these is fatal: each one ends up in a retryable error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Unable to reach the service: {0}")]
    Fetch(String),
    #[error("The service did not respond within {0:?}")]
    Timeout(Duration),
    #[error("The service rejected the request ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}
