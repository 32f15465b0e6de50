//! Error Types

use thiserror::Error;

/// Failure talking to the task API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server's `detail` when it sent one
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid request body: {0}")]
    Encode(String),
}

/// Input rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("task title is empty")]
    EmptyTitle,
}
