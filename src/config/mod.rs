//! Configuration layer for the `yellowcard` command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--key`, `--secret`, `--environment`, `--timeout`
//! 2. **Environment variables** - `YELLOWCARD_API_KEY`, `YELLOWCARD_API_SECRET`,
//!    `YELLOWCARD_ENVIRONMENT`
//! 3. **TOML config file** - `[credentials]` and `[client]` sections
//! 4. **Built-in defaults** - production environment, 60 second timeout
//!
//! The key and secret have no default. A blank value at a higher level
//! does not hide a real one below it.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, EnvironmentArg};
pub use error::{ConfigError, field};
pub use toml::{ClientSection, CredentialsSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
