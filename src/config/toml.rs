//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API key pair
    #[serde(default)]
    pub credentials: CredentialsSection,

    /// Client settings
    #[serde(default)]
    pub client: ClientSection,
}

/// API key pair section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    /// Public API key
    pub key: Option<String>,

    /// Signing secret
    pub secret: Option<String>,
}

/// Client settings section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// "sandbox" or "production"
    pub environment: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Yellow Card CLI Configuration File
#
# Values here are overridden by environment variables
# (YELLOWCARD_API_KEY, YELLOWCARD_API_SECRET, YELLOWCARD_ENVIRONMENT),
# which are in turn overridden by command-line flags.

[credentials]
# Public API key (required)
# key = "your-api-key"

# Signing secret (required)
# Prefer YELLOWCARD_API_SECRET over storing the secret in this file.
# secret = "your-api-secret"

[client]
# API environment: "sandbox" or "production" (default: production)
environment = "sandbox"

# Request timeout in seconds (default: 60)
# timeout = 60
"#
    .to_string()
}
