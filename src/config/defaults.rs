//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::api::Environment;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 60;

/// Default output path of `yellowcard init`.
pub const CONFIG_FILE: &str = "yellowcard.toml";

/// Environment variable holding the public API key.
pub const ENV_API_KEY: &str = "YELLOWCARD_API_KEY";

/// Environment variable holding the signing secret.
pub const ENV_API_SECRET: &str = "YELLOWCARD_API_SECRET";

/// Environment variable selecting sandbox or production.
pub const ENV_ENVIRONMENT: &str = "YELLOWCARD_ENVIRONMENT";

/// Environment used when none is configured.
#[must_use]
pub const fn environment() -> Environment {
    Environment::Production
}
