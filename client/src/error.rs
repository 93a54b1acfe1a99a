//! Error types for the auth client.

use models::ErrorDetails;

/// Failures reading or writing the persisted session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store data is invalid: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors that can occur when talking to the auth service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String>, details: Option<ErrorDetails> },

    /// A 2xx body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClientError {
    /// Message the service sent with its error envelope, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Structured error details the service sent, if any.
    #[must_use]
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            Self::Server { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Text to show the user: the server message verbatim, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}
