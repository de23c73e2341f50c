//! HMAC-SHA256 request authentication.
//!
//! Every request carries three headers derived from the shared secret:
//! the RFC 3339 timestamp, an `Authorization` value of the form
//! `YcHmacV1 <key>:<signature>`, and `Accept`. The signature is an
//! HMAC-SHA256 over, in order:
//!
//! 1. the timestamp string exactly as sent in `X-YC-Timestamp`
//! 2. the request path (no query string)
//! 3. the method name
//! 4. only when there is a body: base64(SHA-256(body))
//!
//! The receiving service recomputes the same value, so the path, method
//! and body bytes signed here must be the ones put on the wire.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use super::Error;

type HmacSha256 = Hmac<Sha256>;

/// Name of the timestamp header.
pub const TIMESTAMP_HEADER: &str = "x-yc-timestamp";

/// Scheme prefix of the `Authorization` header.
pub const AUTH_SCHEME: &str = "YcHmacV1";

/// `Content-Type` sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Formats an instant the way it is signed and transmitted.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use yellowcard::api::format_timestamp;
///
/// let t = Utc.with_ymd_and_hms(2024, 6, 14, 16, 20, 0).unwrap();
/// assert_eq!(format_timestamp(t), "2024-06-14T16:20:00Z");
/// ```
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Computes authentication headers from an API key pair.
///
/// The secret never leaves this type except as input to the MAC, and the
/// `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct Signer {
    key: String,
    secret: SecretString,
}

impl Signer {
    /// Creates a signer for the given public key and signing secret.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: SecretString::new(secret.into()),
        }
    }

    /// Returns the public key sent in the `Authorization` header.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Computes the base64 signature for one request.
    ///
    /// `timestamp` must be the exact string sent in `X-YC-Timestamp`.
    /// An empty body is signed the same way as no body.
    #[must_use]
    pub fn signature(
        &self,
        method: &Method,
        path: &str,
        body: Option<&[u8]>,
        timestamp: &str,
    ) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC can take any size");

        mac.update(timestamp.as_bytes());
        mac.update(path.as_bytes());
        mac.update(method.as_str().as_bytes());

        if let Some(body) = non_empty(body) {
            let body_hash = STANDARD.encode(Sha256::digest(body));
            mac.update(body_hash.as_bytes());
        }

        STANDARD.encode(mac.finalize().into_bytes())
    }

    /// Builds the full header set for one request.
    ///
    /// The result is fully determined by the arguments: the same inputs
    /// always produce byte-identical headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the key contains characters that are
    /// not allowed in a header value.
    pub fn headers(
        &self,
        method: &Method,
        path: &str,
        body: Option<&[u8]>,
        timestamp: DateTime<Utc>,
    ) -> Result<HeaderMap, Error> {
        let timestamp = format_timestamp(timestamp);
        let signature = self.signature(method, path, body, &timestamp);

        let authorization = HeaderValue::from_str(&format!(
            "{AUTH_SCHEME} {}:{signature}",
            self.key
        ))
        .map_err(|e| Error::Request(format!("invalid API key: {e}")))?;
        let timestamp = HeaderValue::from_str(&timestamp)
            .map_err(|e| Error::Request(format!("invalid timestamp: {e}")))?;

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(HeaderName::from_static(TIMESTAMP_HEADER), timestamp);

        if non_empty(body).is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        Ok(headers)
    }
}

fn non_empty(body: Option<&[u8]>) -> Option<&[u8]> {
    body.filter(|b| !b.is_empty())
}
