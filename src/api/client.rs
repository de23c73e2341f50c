//! The API client handle.

use tokio_util::sync::CancellationToken;

use crate::time::SystemClock;
use crate::transport::ReqwestClient;

use super::{ClientConfig, Environment, Signer};

/// Client for the Yellow Card business API.
///
/// Holds the configuration and the API key pair; nothing in it changes
/// after construction, so one client can serve many concurrent calls.
/// Cloning is as cheap as cloning the transport.
///
/// # Example
///
/// ```no_run
/// use yellowcard::api::{Client, ClientConfig, Environment};
/// use yellowcard::model::CountryCode;
///
/// # async fn example() -> Result<(), yellowcard::api::Error> {
/// let client = Client::new(
///     "public-key",
///     "signing-secret",
///     ClientConfig::default().with_environment(Environment::Sandbox),
/// );
///
/// let channels = client.get_channels(Some(&CountryCode::KE)).await?;
/// println!("{} active channels", channels.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<H = ReqwestClient, C = SystemClock> {
    pub(super) config: ClientConfig<H, C>,
    pub(super) signer: Signer,
    pub(super) cancel: Option<CancellationToken>,
}

impl<H, C> Client<H, C> {
    /// Creates a client from an API key pair and a configuration.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>, config: ClientConfig<H, C>) -> Self {
        Self {
            config,
            signer: Signer::new(key, secret),
            cancel: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig<H, C> {
        &self.config
    }

    /// Returns the selected environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.config.environment()
    }

    /// Returns the API root requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        self.config.base_url()
    }

    /// Returns the public API key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.signer.key()
    }
}

impl<H: Clone, C: Clone> Client<H, C> {
    /// Returns a copy of this client whose calls abort when `token` is cancelled.
    ///
    /// A call in flight when the token fires fails promptly with a
    /// transport error ([`HttpError::Cancelled`](crate::transport::HttpError::Cancelled));
    /// later calls fail the same way without sending anything.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            config: self.config.clone(),
            signer: self.signer.clone(),
            cancel: Some(token),
        }
    }
}
