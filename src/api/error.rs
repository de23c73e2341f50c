//! Error taxonomy for API calls.

use serde::Deserialize;
use thiserror::Error;

use crate::transport::HttpError;

/// Error returned by every [`Client`](super::Client) operation.
///
/// Match on the variant (and on [`ApiError::code`]) to react to specific
/// failures; the `Display` text is meant for logs and humans only.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter was rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be assembled (bad URL, bad header value).
    #[error("yellowcard: create request - {0}")]
    Request(String),

    /// The request body could not be serialised.
    #[error("yellowcard: serialize request - {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response.
    #[error("yellowcard: do request - {0}")]
    Transport(#[from] HttpError),

    /// The service answered with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body did not have the expected shape.
    #[error("yellowcard: deserialize {context} - {source}")]
    Decode {
        /// Which body was being decoded
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns the API error if the service rejected the request.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the error was raised before anything was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the transport failed or was cancelled.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }
}

/// Parameters rejected locally, without contacting the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The country code is not in the supported table.
    #[error("yellowcard: country is not supported")]
    CountryNotSupported,

    /// The currency code is not in the supported table.
    #[error("yellowcard: currency is not supported")]
    CurrencyNotSupported,

    /// The payment id is empty or cannot be placed in a URL path segment.
    #[error("yellowcard: invalid payment id '{0}'")]
    InvalidPaymentId(String),
}

/// A well-formed error response from the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("yellowcard: request failed with status [{}] {code}: {message}", .status.as_u16())]
pub struct ApiError {
    /// Machine-readable error code, e.g. `PaymentNotFound`
    pub code: String,
    /// Human-readable description
    pub message: String,
    /// HTTP status of the response
    pub status: http::StatusCode,
}

/// Wire shape of an error body. Both fields are required.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub(crate) fn into_api_error(self, status: http::StatusCode) -> ApiError {
        ApiError {
            code: self.code,
            message: self.message,
            status,
        }
    }
}
