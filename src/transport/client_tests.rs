//! Tests for `ReqwestClient`.
//!
//! These cover construction only; wire behaviour belongs to reqwest.

use super::{HttpClient, HttpError, HttpRequest, ReqwestClient};

mod reqwest_client {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_uses_default_timeout() {
        assert_eq!(ReqwestClient::DEFAULT_TIMEOUT, Duration::from_secs(60));
        let client = ReqwestClient::new();
        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn with_timeout_builds_client() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(5));
        let _ = format!("{client:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        let _ = format!("{client:?}");
    }

    #[test]
    fn client_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(10));
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        let result = client
            .request(HttpRequest::new(http::Method::GET, url))
            .await;

        // Behind a proxy the failure may surface as a 5xx response instead.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout(_)) => {}
            Ok(resp) if resp.is_failure() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
