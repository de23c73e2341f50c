//! Application execution logic.
//!
//! This module builds the API client from the validated configuration,
//! runs one subcommand against it and prints the result as JSON.

use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use yellowcard::api::{Client, ClientConfig};
use yellowcard::config::{Command, ValidatedConfig};
use yellowcard::model::{CountryCode, CurrencyCode, PaymentRequest, ResolveBankAccountRequest};
use yellowcard::time::Clock;
use yellowcard::transport::{HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] yellowcard::api::Error),

    /// Failed to read the payment request file.
    #[error("Failed to read payment file '{}': {source}", path.display())]
    ReadPayment {
        /// Path to the payment file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The payment request file is not a valid request.
    #[error("Invalid payment file '{}': {source}", path.display())]
    ParsePayment {
        /// Path to the payment file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The result could not be rendered as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[source] serde_json::Error),

    /// `init` is handled before any client exists.
    #[error("'init' does not call the API")]
    NotAnApiCommand,
}

/// Executes one API subcommand and prints its result on stdout.
///
/// Ctrl+C (or SIGTERM) cancels the request in flight.
///
/// # Errors
///
/// Returns an error if the payment file is unreadable, the API call fails
/// or is cancelled, or the result cannot be rendered.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires
/// real network access and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let client = create_client(&config);
    tracing::debug!(
        environment = %client.environment(),
        base_url = client.base_url(),
        "Client ready"
    );

    let token = CancellationToken::new();
    let watcher = tokio::spawn(cancel_on_shutdown(token.clone()));

    let result = run_command(&client.with_cancellation(token), command).await;
    watcher.abort();

    println!("{}", result?);
    Ok(())
}

/// Creates the API client from configuration.
fn create_client(config: &ValidatedConfig) -> Client {
    let client_config = ClientConfig::with_transport(ReqwestClient::with_timeout(config.timeout))
        .with_environment(config.environment);

    Client::new(
        config.key.as_str(),
        config.secret.expose_secret().as_str(),
        client_config,
    )
}

/// Runs one subcommand and returns the pretty-printed JSON result.
async fn run_command<H: HttpClient, C: Clock>(
    client: &Client<H, C>,
    command: Command,
) -> Result<String, RunError> {
    match command {
        Command::Init { .. } => Err(RunError::NotAnApiCommand),
        Command::Channels { country } => {
            let country = country.as_deref().map(country_code);
            render(&client.get_channels(country.as_ref()).await?)
        }
        Command::Networks { country } => {
            let country = country.as_deref().map(country_code);
            render(&client.get_networks(country.as_ref()).await?)
        }
        Command::Rates { currency } => {
            let currency = currency.as_deref().map(currency_code);
            render(&client.get_rates(currency.as_ref()).await?)
        }
        Command::ResolveBank {
            account_number,
            network_id,
        } => {
            let request = ResolveBankAccountRequest {
                account_number,
                network_id,
            };
            render(&client.resolve_bank_account(&request).await?)
        }
        Command::Pay { file } => {
            let request = read_payment_request(&file)?;
            tracing::info!(sequence_id = %request.sequence_id, "Submitting payment");
            render(&client.make_payment(&request).await?)
        }
        Command::Accept { id } => render(&client.accept_payment(&id).await?),
        Command::Deny { id } => render(&client.deny_payment(&id).await?),
        Command::Lookup { id } => render(&client.lookup_payment(&id).await?),
    }
}

/// Normalises user input to the upper-case codes the API uses.
fn country_code(raw: &str) -> CountryCode {
    CountryCode::new(raw.trim().to_ascii_uppercase())
}

fn currency_code(raw: &str) -> CurrencyCode {
    CurrencyCode::new(raw.trim().to_ascii_uppercase())
}

/// Loads a payment request from a JSON file.
fn read_payment_request(path: &Path) -> Result<PaymentRequest, RunError> {
    let content = std::fs::read(path).map_err(|e| RunError::ReadPayment {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_slice(&content).map_err(|e| RunError::ParsePayment {
        path: path.to_path_buf(),
        source: e,
    })
}

fn render<T: Serialize>(value: &T) -> Result<String, RunError> {
    serde_json::to_string_pretty(value).map_err(RunError::Render)
}

/// Cancels `token` once a shutdown signal arrives.
async fn cancel_on_shutdown(token: CancellationToken) {
    shutdown_signal().await;
    tracing::warn!("Shutdown signal received, cancelling request");
    token.cancel();
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM on Unix).
///
/// If a handler cannot be installed the corresponding branch never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
