//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;

/// Yellow Card: command-line client for the Yellow Card payments API
///
/// Lists channels, networks and rates, resolves bank accounts and drives
/// the payment lifecycle (submit, accept, deny, look up).
#[derive(Debug, Parser)]
#[command(name = "yellowcard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Public API key
    #[arg(long, global = true, env = defaults::ENV_API_KEY)]
    pub key: Option<String>,

    /// API signing secret
    #[arg(long, global = true, env = defaults::ENV_API_SECRET, hide_env_values = true)]
    pub secret: Option<String>,

    /// API environment
    #[arg(long, value_enum, global = true, env = defaults::ENV_ENVIRONMENT)]
    pub environment: Option<EnvironmentArg>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for yellowcard
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// List active payment channels
    Channels {
        /// Two-letter country code, e.g. NG
        #[arg(long)]
        country: Option<String>,
    },

    /// List active networks (banks and mobile money operators)
    Networks {
        /// Two-letter country code, e.g. NG
        #[arg(long)]
        country: Option<String>,
    },

    /// Show exchange rates
    Rates {
        /// Three-letter currency code, e.g. NGN
        #[arg(long)]
        currency: Option<String>,
    },

    /// Look up the holder of a bank account
    ResolveBank {
        /// Account number to resolve
        #[arg(long)]
        account_number: String,

        /// Network (bank) id the account belongs to
        #[arg(long)]
        network_id: String,
    },

    /// Submit a payment described by a JSON file
    Pay {
        /// Path to the JSON payment request
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Accept a pending payment
    Accept {
        /// Payment id
        id: String,
    },

    /// Deny a pending payment
    Deny {
        /// Payment id
        id: String,
    },

    /// Look up a payment
    Lookup {
        /// Payment id
        id: String,
    },
}

/// Environment argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    /// Sandbox deployment
    #[value(name = "sandbox", alias = "test")]
    Sandbox,
    /// Live deployment
    #[value(name = "production", aliases = ["prod", "live"])]
    Production,
}

impl From<EnvironmentArg> for crate::api::Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Sandbox => Self::Sandbox,
            EnvironmentArg::Production => Self::Production,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning parse errors.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, missing values and the like.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
