//! Request/response value types and the transport trait.

use std::sync::Arc;

use super::HttpError;

/// A fully prepared outgoing request.
///
/// The dispatcher builds one of these per API call, with the signed
/// authentication headers already attached, and hands it to an
/// [`HttpClient`]. Transports send it as-is.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Absolute target URL, including any query string
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Request body; `None` for bodyless requests
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Replaces the request headers.
    #[must_use]
    pub fn with_headers(mut self, headers: http::HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Appends query parameters in the given order.
    ///
    /// An empty slice leaves the URL untouched (no trailing `?`).
    #[must_use]
    pub fn with_query(mut self, params: &[(&str, &str)]) -> Self {
        if !params.is_empty() {
            self.url.query_pairs_mut().extend_pairs(params);
        }
        self
    }

    /// Returns the value of a header as a string, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A response received from the server, with the body fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status signals a failed request (4xx or 5xx).
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }
}

/// Sends prepared requests.
///
/// This is the seam between the API client and the network stack: the
/// production implementation is [`ReqwestClient`](super::ReqwestClient),
/// tests use [`MockHttpClient`](super::MockHttpClient). Implementations
/// perform exactly one send per call, with no retries or caching of their own.
///
/// Implementations must be usable from many tasks at once; the same
/// transport is typically shared by several clients.
///
/// # Example
///
/// ```ignore
/// use yellowcard::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Offline;
///
/// impl HttpClient for Offline {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Err(HttpError::connection(std::io::Error::other("offline")))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - The connection fails ([`HttpError::Connection`])
    /// - The request times out ([`HttpError::Timeout`])
    /// - The URL cannot be used ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).request(req)
    }
}

impl<T: HttpClient> HttpClient for &T {
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).request(req)
    }
}
