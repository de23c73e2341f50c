//! Validated configuration after merging CLI, environment and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;

use crate::api::Environment;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Environment variables are already folded into [`Cli`] by clap, so they
/// rank between explicit flags and the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Public API key (required)
    pub key: String,

    /// Signing secret (required)
    pub secret: SecretString,

    /// API environment
    pub environment: Environment,

    /// Whole-request timeout
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ environment: {}, base_url: {}, key: {}, timeout: {}s }}",
            self.environment,
            self.environment.base_url(),
            self.key,
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and the environment variables behind them) take
    /// precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key or secret is missing or empty
    /// - The environment name is unknown
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let key = resolve_required(
            cli.key.as_deref(),
            toml.and_then(|t| t.credentials.key.as_deref()),
        )
        .ok_or_else(|| {
            ConfigError::missing(
                field::KEY,
                "Use --key, set YELLOWCARD_API_KEY or set credentials.key in config file",
            )
        })?;

        let secret = resolve_required(
            cli.secret.as_deref(),
            toml.and_then(|t| t.credentials.secret.as_deref()),
        )
        .ok_or_else(|| {
            ConfigError::missing(
                field::SECRET,
                "Use --secret, set YELLOWCARD_API_SECRET or set credentials.secret in config file",
            )
        })?;

        let environment = Self::resolve_environment(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            key: key.to_string(),
            secret: SecretString::new(secret.to_string()),
            environment,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_environment(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Environment, ConfigError> {
        if let Some(env) = cli.environment {
            return Ok(env.into());
        }

        match toml.and_then(|t| t.client.environment.as_deref()) {
            Some(name) => Ok(name.parse::<Environment>()?),
            None => Ok(defaults::environment()),
        }
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let secs = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.client.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if secs == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Duration::from_secs(secs))
    }
}

/// Picks the first non-blank value, CLI before file.
fn resolve_required<'a>(cli: Option<&'a str>, toml: Option<&'a str>) -> Option<&'a str> {
    [cli, toml]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
