//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Body returned for URLs with no registered response.
pub const NOT_FOUND_BODY: &str = r#"{"code": "The error code","message": "The error message"}"#;

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, (http::StatusCode, Vec<u8>)>,
    requests: Vec<HttpRequest>,
}

/// Transport double that answers from a table of canned responses.
///
/// Responses are looked up by the exact request URL string (including the
/// query string). Unknown URLs get a `404` with [`NOT_FOUND_BODY`]. Headers
/// play no part in matching. Every request is recorded, so tests can
/// assert on what was (or was not) sent.
///
/// Clones share the same table and request log: keep one handle in the
/// test and give another to the client under test.
///
/// # Example
///
/// ```
/// use yellowcard::transport::MockHttpClient;
///
/// let mock = MockHttpClient::new();
/// mock.mock_response(
///     "https://api.yellowcard.io/business/rates",
///     http::StatusCode::OK,
///     r#"{"rates": []}"#,
/// );
/// assert_eq!(mock.request_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    /// Creates an empty mock with no registered responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the response for `url`, replacing any earlier entry.
    pub fn mock_response(
        &self,
        url: impl Into<String>,
        status: http::StatusCode,
        body: impl Into<Vec<u8>>,
    ) {
        self.lock()
            .responses
            .insert(url.into(), (status, body.into()));
    }

    /// Returns a copy of every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    /// Returns the most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().requests.last().cloned()
    }

    /// Returns the number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    // A panicking test thread must not hide the log from the others.
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HttpClient for MockHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut state = self.lock();

        let (status, body) = state
            .responses
            .get(req.url.as_str())
            .cloned()
            .unwrap_or_else(|| (http::StatusCode::NOT_FOUND, NOT_FOUND_BODY.as_bytes().to_vec()));

        state.requests.push(req);

        Ok(HttpResponse::new(status, http::HeaderMap::new(), body))
    }
}
