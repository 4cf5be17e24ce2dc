//! Error types for the jobs API.

use thiserror::Error;

/// Why a request to the job board failed.
///
/// This is also the error payload of a [`FetchLifecycle`](crate::framework::FetchLifecycle)
/// in the `Error` state, so it is `Clone` and carries plain strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS or body read failure.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The client-side request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-2xx status.
    #[error("Unexpected status {status}")]
    Status { status: u16 },

    /// A 2xx body that did not decode.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// `/login` refused the credentials; carries the server's `error_msg`.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Whether the user can reasonably press "retry".
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}
