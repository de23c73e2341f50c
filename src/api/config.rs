//! Client configuration.

use std::fmt;
use std::str::FromStr;

use crate::time::SystemClock;
use crate::transport::ReqwestClient;

/// Production API root.
pub const PRODUCTION_BASE_URL: &str = "https://api.yellowcard.io";

/// Sandbox API root.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.api.yellowcard.io";

/// Which deployment of the API to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Test deployment; no real money moves.
    Sandbox,
    /// Live deployment.
    #[default]
    Production,
}

impl Environment {
    /// Returns the API root for this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Returns the lowercase name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown environment name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}': expected sandbox or production")]
pub struct ParseEnvironmentError(pub String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "test" => Ok(Self::Sandbox),
            "production" | "prod" | "live" => Ok(Self::Production),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Settings a [`Client`](super::Client) is built from.
///
/// Start from [`ClientConfig::default`] (production, reqwest transport,
/// system clock) and override fields with the `with_*` methods. Each
/// method touches only its own field, so applying them in sequence is
/// last-write-wins.
///
/// The base URL is derived from the environment and cannot be set
/// independently.
///
/// # Type Parameters
///
/// - `H`: the transport ([`HttpClient`](crate::transport::HttpClient))
/// - `C`: the clock used for request timestamps ([`Clock`](crate::time::Clock))
///
/// # Example
///
/// ```
/// use yellowcard::api::{ClientConfig, Environment};
///
/// let config = ClientConfig::default().with_environment(Environment::Sandbox);
/// assert_eq!(config.base_url(), "https://sandbox.api.yellowcard.io");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig<H = ReqwestClient, C = SystemClock> {
    environment: Environment,
    http_client: H,
    clock: C,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            http_client: ReqwestClient::new(),
            clock: SystemClock,
        }
    }
}

impl<H> ClientConfig<H, SystemClock> {
    /// Creates a production configuration around an existing transport.
    ///
    /// Use this instead of [`ClientConfig::default`] to avoid building a
    /// reqwest client that would be replaced right away.
    #[must_use]
    pub const fn with_transport(http_client: H) -> Self {
        Self {
            environment: Environment::Production,
            http_client,
            clock: SystemClock,
        }
    }
}

impl<H, C> ClientConfig<H, C> {
    /// Selects the environment (and with it the base URL).
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Replaces the transport.
    #[must_use]
    pub fn with_http_client<H2>(self, http_client: H2) -> ClientConfig<H2, C> {
        ClientConfig {
            environment: self.environment,
            http_client,
            clock: self.clock,
        }
    }

    /// Replaces the clock used to timestamp requests.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> ClientConfig<H, C2> {
        ClientConfig {
            environment: self.environment,
            http_client: self.http_client,
            clock,
        }
    }

    /// Returns the selected environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the API root for the selected environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http_client
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
