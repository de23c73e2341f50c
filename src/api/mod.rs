//! Yellow Card business API client.
//!
//! [`Client`] signs every request with the account's HMAC key pair
//! ([`Signer`]), sends it through a pluggable transport and turns the
//! response into either a typed value or an [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use yellowcard::api::{Client, ClientConfig, Environment};
//! use yellowcard::model::CurrencyCode;
//!
//! # async fn example() -> Result<(), yellowcard::api::Error> {
//! let client = Client::new(
//!     "public-key",
//!     "signing-secret",
//!     ClientConfig::default().with_environment(Environment::Sandbox),
//! );
//!
//! for rate in client.get_rates(Some(&CurrencyCode::NGN)).await? {
//!     println!("{}: buy {:?}", rate.code, rate.buy);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod dispatch;
mod endpoints;
mod error;
mod signer;

pub use client::Client;
pub use config::{
    ClientConfig, Environment, PRODUCTION_BASE_URL, ParseEnvironmentError, SANDBOX_BASE_URL,
};
pub use error::{ApiError, Error, ValidationError};
pub use signer::{AUTH_SCHEME, JSON_CONTENT_TYPE, Signer, TIMESTAMP_HEADER, format_timestamp};
