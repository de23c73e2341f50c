//! Tests for request/response types and the transport trait.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url(s: &str) -> url::Url {
    url::Url::parse(s).unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_without_headers_or_body() {
        let req = HttpRequest::new(http::Method::GET, url("https://api.yellowcard.io/x"));

        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url.as_str(), "https://api.yellowcard.io/x");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let body = br#"{"amount":1}"#.to_vec();
        let req =
            HttpRequest::new(http::Method::POST, url("https://example.com/")).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_headers_replaces_headers() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );

        let req = HttpRequest::new(http::Method::GET, url("https://example.com/"))
            .with_headers(headers);

        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn with_query_appends_pairs_in_order() {
        let req = HttpRequest::new(http::Method::GET, url("https://example.com/rates"))
            .with_query(&[("currency", "TZS"), ("country", "TZ")]);

        assert_eq!(
            req.url.as_str(),
            "https://example.com/rates?currency=TZS&country=TZ"
        );
    }

    #[test]
    fn with_empty_query_leaves_url_untouched() {
        let req =
            HttpRequest::new(http::Method::GET, url("https://example.com/rates")).with_query(&[]);

        assert_eq!(req.url.as_str(), "https://example.com/rates");
        assert!(req.url.query().is_none());
    }

    #[test]
    fn with_query_encodes_reserved_characters() {
        let req = HttpRequest::new(http::Method::GET, url("https://example.com/"))
            .with_query(&[("q", "a&b=c")]);

        assert_eq!(req.url.query(), Some("q=a%26b%3Dc"));
    }

    #[test]
    fn header_returns_none_when_missing() {
        let req = HttpRequest::new(http::Method::GET, url("https://example.com/"));

        assert!(req.header("authorization").is_none());
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_failure_for_4xx_and_5xx() {
        for status in [
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::UNAUTHORIZED,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::INTERNAL_SERVER_ERROR,
            http::StatusCode::BAD_GATEWAY,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_failure(), "Expected {status} to be a failure");
        }
    }

    #[test]
    fn is_not_failure_below_400() {
        for status in [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
            http::StatusCode::NOT_MODIFIED,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_failure(), "Expected {status} not to be a failure");
        }
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::connection(std::io::Error::other("network unavailable"));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message_and_keeps_source() {
        let error = HttpError::timeout(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "deadline elapsed",
        ));

        assert_eq!(error.to_string(), "Request timed out");
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("deadline elapsed")
        );
    }

    #[test]
    fn cancelled_displays_message() {
        assert_eq!(HttpError::Cancelled.to_string(), "Request cancelled");
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("missing scheme".to_string());

        assert!(error.to_string().contains("Invalid URL"));
        assert!(error.to_string().contains("missing scheme"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn arc_and_reference_delegate_to_inner_client() {
        let inner = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
        });
        let req = HttpRequest::new(http::Method::GET, url("https://example.com/"));

        inner.request(req.clone()).await.unwrap();
        (&*inner).request(req.clone()).await.unwrap();
        Arc::clone(&inner).request(req).await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    }
}
