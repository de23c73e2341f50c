//! Error types for transport operations.

use thiserror::Error;

/// Error returned when a request could not complete at the transport level.
///
/// A transport error means no response exists to classify; it never
/// carries an HTTP status.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, refused connections,
    /// TLS failures and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request URL could not be used by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The caller cancelled the request before a response arrived.
    #[error("Request cancelled")]
    Cancelled,
}

impl HttpError {
    /// Wraps any error as a connection failure.
    pub fn connection<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection(Box::new(source))
    }

    /// Wraps the error that ended a request at its deadline.
    pub fn timeout<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Timeout(Box::new(source))
    }
}
