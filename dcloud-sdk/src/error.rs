//! # Errors
//!
//! Failures are passed through to the caller untouched:
//!
//! - **[`ConnectError`]**: The connector could not hand out a connection (invalid URL,
//!   dial failure, or a custom provider refusing, e.g. because credentials are missing).
//! - **[`tonic::Status`]**: The call reached the server, or the transport underneath it,
//!   and came back with an error code (e.g., `NOT_FOUND`, `UNAUTHENTICATED`).
//!
//! Both are folded into [`CallError`], which is cheap to clone so that a
//! [`PageIterator`](crate::PageIterator) can keep returning the very same failure.
use crate::BoxError;
use std::sync::Arc;

/// Errors that can occur while resolving a connection.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': {1}")]
    ConnectionFailed(String, #[source] tonic::transport::Error),
    #[error("Connection rejected: '{0}'")]
    Rejected(#[source] tonic::Status),
    #[error("{0}")]
    Other(#[source] BoxError),
}

/// Errors returned by every client call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CallError {
    #[error("Failed to resolve a connection: '{0}'")]
    Connect(#[source] Arc<ConnectError>),
    #[error(transparent)]
    Status(#[from] tonic::Status),
}

impl From<ConnectError> for CallError {
    fn from(err: ConnectError) -> Self {
        Self::Connect(Arc::new(err))
    }
}

impl CallError {
    /// Returns the server status if the call got that far.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            CallError::Status(status) => Some(status),
            CallError::Connect(_) => None,
        }
    }
}

pub(crate) fn trace_status(method: &'static str, status: &tonic::Status) {
    tracing::debug!(
        method,
        code = ?status.code(),
        details = status.message(),
        "remote call failed"
    );
}
