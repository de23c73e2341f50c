//! Typed wrappers over [`Client::call`], one per API operation.

use http::Method;
use serde::Serialize;

use crate::model::{
    Channel, ChannelsEnvelope, CountryCode, CurrencyCode, Network, NetworksEnvelope, Payment,
    PaymentRequest, Rate, RatesEnvelope, ResolveBankAccountRequest, ResolveBankAccountResponse,
};
use crate::time::Clock;
use crate::transport::HttpClient;

use super::{Client, Error, ValidationError};

const CHANNELS_PATH: &str = "/business/channels";
const NETWORKS_PATH: &str = "/business/networks";
const RATES_PATH: &str = "/business/rates";
const BANK_DETAILS_PATH: &str = "/business/details/bank";
const PAYMENTS_PATH: &str = "/business/payments";

impl<H: HttpClient, C: Clock> Client<H, C> {
    /// Lists the active payment channels, optionally for one country.
    ///
    /// Channels whose status is anything other than `active` are dropped.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::CountryNotSupported`] before sending
    /// anything if `country` is not a supported market; otherwise any
    /// [`Error`] from the request.
    pub async fn get_channels(&self, country: Option<&CountryCode>) -> Result<Vec<Channel>, Error> {
        let query = country_query(country)?;
        let envelope: ChannelsEnvelope = self
            .call_json(Method::GET, CHANNELS_PATH, None, &query, "channels response")
            .await?;

        Ok(envelope
            .channels
            .into_iter()
            .filter(Channel::is_active)
            .collect())
    }

    /// Lists the active networks (banks, mobile money operators, e-wallets),
    /// optionally for one country.
    ///
    /// # Errors
    ///
    /// Same as [`Client::get_channels`].
    pub async fn get_networks(&self, country: Option<&CountryCode>) -> Result<Vec<Network>, Error> {
        let query = country_query(country)?;
        let envelope: NetworksEnvelope = self
            .call_json(Method::GET, NETWORKS_PATH, None, &query, "networks response")
            .await?;

        Ok(envelope
            .networks
            .into_iter()
            .filter(Network::is_active)
            .collect())
    }

    /// Lists exchange rates, optionally for one currency.
    ///
    /// # Errors
    ///
    /// Fails with [`ValidationError::CurrencyNotSupported`] before sending
    /// anything if `currency` is not supported.
    pub async fn get_rates(&self, currency: Option<&CurrencyCode>) -> Result<Vec<Rate>, Error> {
        let query = match currency {
            Some(code) if !code.is_supported() => {
                return Err(ValidationError::CurrencyNotSupported.into());
            }
            Some(code) => vec![("currency", code.as_str())],
            None => Vec::new(),
        };

        let envelope: RatesEnvelope = self
            .call_json(Method::GET, RATES_PATH, None, &query, "rates response")
            .await?;

        Ok(envelope.rates)
    }

    /// Looks up the holder of a bank account before paying into it.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from encoding, the request or decoding.
    pub async fn resolve_bank_account(
        &self,
        request: &ResolveBankAccountRequest,
    ) -> Result<ResolveBankAccountResponse, Error> {
        let body = encode(request)?;
        self.call_json(
            Method::POST,
            BANK_DETAILS_PATH,
            Some(body.as_slice()),
            &[],
            "bank account response",
        )
        .await
    }

    /// Submits a disbursement. The rate is locked in and the payment waits
    /// for [`Client::accept_payment`] unless `force_accept` is set.
    ///
    /// # Errors
    ///
    /// Any [`Error`] from encoding, the request or decoding.
    pub async fn make_payment(&self, request: &PaymentRequest) -> Result<Payment, Error> {
        let body = encode(request)?;
        tracing::debug!(sequence_id = %request.sequence_id, "Submitting payment");

        self.call_json(
            Method::POST,
            PAYMENTS_PATH,
            Some(body.as_slice()),
            &[],
            "make payment response",
        )
        .await
    }

    /// Approves a pending payment for execution.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidPaymentId`] for an unusable id, otherwise
    /// any [`Error`] from the request; the service answers
    /// `PaymentInvalidState` for payments that are not pending approval.
    pub async fn accept_payment(&self, id: &str) -> Result<Payment, Error> {
        let path = format!("{PAYMENTS_PATH}/{}/accept", payment_id(id)?);
        self.call_json(Method::POST, &path, None, &[], "accept payment response")
            .await
    }

    /// Rejects a pending payment.
    ///
    /// # Errors
    ///
    /// Same as [`Client::accept_payment`].
    pub async fn deny_payment(&self, id: &str) -> Result<Payment, Error> {
        let path = format!("{PAYMENTS_PATH}/{}/deny", payment_id(id)?);
        self.call_json(Method::POST, &path, None, &[], "deny payment response")
            .await
    }

    /// Fetches a payment by id.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidPaymentId`] for an unusable id, otherwise
    /// any [`Error`] from the request (`PaymentNotFound` for unknown ids).
    pub async fn lookup_payment(&self, id: &str) -> Result<Payment, Error> {
        let path = format!("{PAYMENTS_PATH}/{}", payment_id(id)?);
        self.call_json(Method::GET, &path, None, &[], "lookup payment response")
            .await
    }
}

fn country_query(country: Option<&CountryCode>) -> Result<Vec<(&'static str, &str)>, Error> {
    match country {
        Some(code) if !code.is_supported() => Err(ValidationError::CountryNotSupported.into()),
        Some(code) => Ok(vec![("country", code.as_str())]),
        None => Ok(Vec::new()),
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

/// Accepts ids that can be used as a single path segment without escaping.
///
/// The path is signed exactly as sent, so ids are rejected rather than
/// percent-encoded.
fn payment_id(id: &str) -> Result<&str, Error> {
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
        && id != "."
        && id != "..";

    if valid {
        Ok(id)
    } else {
        Err(ValidationError::InvalidPaymentId(id.to_string()).into())
    }
}
