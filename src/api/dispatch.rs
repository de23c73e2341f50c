//! Request dispatch: every API call goes through [`Client::call`].

use http::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::time::Clock;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

use super::error::ErrorBody;
use super::{Client, Error};

impl<H: HttpClient, C: Clock> Client<H, C> {
    /// Sends one signed request and returns the raw success body.
    ///
    /// `path` is appended to the base URL verbatim and is also what gets
    /// signed, so it must already be in its on-the-wire form: a leading
    /// `/`, no query or fragment, no dot segments and nothing that needs
    /// percent-encoding. Anything else fails with [`Error::Request`]. Query
    /// parameters are appended in the given order and are not signed.
    /// A `None` or empty body is sent as no body at all.
    ///
    /// The clock is read once; that instant is both signed and sent.
    ///
    /// # Errors
    ///
    /// - [`Error::Request`] if the URL or headers cannot be built
    /// - [`Error::Transport`] if no response was received, including cancellation
    /// - [`Error::Api`] if the status is 400 or above and the body is an error object
    /// - [`Error::Decode`] if the status is 400 or above and the body is not
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, Error> {
        let body = body.filter(|b| !b.is_empty());
        let url = self.build_url(path)?;

        let timestamp = self.config.clock().now();
        let headers = self.signer.headers(&method, path, body, timestamp)?;

        let mut request = HttpRequest::new(method, url)
            .with_headers(headers)
            .with_query(query);
        if let Some(body) = body {
            request = request.with_body(body.to_vec());
        }

        tracing::debug!(
            method = %request.method,
            path,
            query_params = query.len(),
            "Sending API request"
        );

        let response = self.send(request).await?;

        tracing::debug!(
            status = response.status.as_u16(),
            bytes = response.body.len(),
            path,
            "Received API response"
        );

        classify(response)
    }

    /// Sends a request and decodes the success body as JSON.
    pub(super) async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
        query: &[(&str, &str)],
        context: &'static str,
    ) -> Result<T, Error> {
        let bytes = self.call(method, path, body, query).await?;
        decode_object(&bytes, context)
    }

    /// Joins `path` onto the base URL. The parsed URL path must equal the
    /// signed `path` byte for byte.
    fn build_url(&self, path: &str) -> Result<Url, Error> {
        if !path.starts_with('/') || path.contains(['?', '#']) {
            return Err(Error::Request(format!(
                "path '{path}' must start with '/' and carry no query or fragment"
            )));
        }

        let raw = format!("{}{path}", self.config.base_url());
        let url =
            Url::parse(&raw).map_err(|e| Error::Request(format!("invalid URL '{raw}': {e}")))?;

        if url.path() != path {
            return Err(Error::Request(format!(
                "path '{path}' is not in wire form (would be sent as '{}')",
                url.path()
            )));
        }

        Ok(url)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let send = self.config.http_client().request(request);

        let result = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(HttpError::Cancelled),
                    result = send => result,
                }
            }
            None => send.await,
        };

        result.map_err(|e| {
            tracing::debug!("Transport failure: {e}");
            Error::Transport(e)
        })
    }
}

/// Splits a response into the success body or a typed failure.
///
/// Anything below 400 counts as success.
fn classify(response: HttpResponse) -> Result<Vec<u8>, Error> {
    if !response.is_failure() {
        return Ok(response.body);
    }

    let body: ErrorBody = decode_object(&response.body, "error response")?;
    let error = body.into_api_error(response.status);

    tracing::debug!(
        status = error.status.as_u16(),
        code = %error.code,
        "API returned an error"
    );

    Err(Error::Api(error))
}

/// Decodes a body that must be a JSON object.
///
/// Derived struct impls also accept JSON arrays, so the top-level shape is
/// checked before the fields are.
fn decode_object<T: DeserializeOwned>(bytes: &[u8], context: &'static str) -> Result<T, Error> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| Error::decode(context, e))?;

    if !value.is_object() {
        return Err(Error::decode(
            context,
            serde::de::Error::custom("expected a JSON object"),
        ));
    }

    serde_json::from_value(value).map_err(|e| Error::decode(context, e))
}
