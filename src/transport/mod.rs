//! Transport layer between the API client and the network.
//!
//! This module provides:
//! - Prepared request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport abstraction ([`HttpClient`])
//! - The production implementation ([`ReqwestClient`])
//! - A recording test double ([`MockHttpClient`])

mod client;
mod error;
mod http;
mod mock;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use mock::{MockHttpClient, NOT_FOUND_BODY};
