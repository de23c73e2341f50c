//! Request and response payloads.
//!
//! Plain data records mirroring the JSON bodies of the API. Field names
//! are camelCase on the wire. Nested objects whose shape the service does
//! not document are kept as raw [`serde_json::Value`]s so they survive a
//! decode/encode round trip unchanged.

pub mod countries;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use countries::{COUNTRIES, CURRENCIES, Country, CountryCode, CurrencyCode};

/// Status value of channels and networks that accept traffic.
pub const STATUS_ACTIVE: &str = "active";

/// Kind of account receiving a payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Bank account
    #[default]
    #[serde(rename = "bank")]
    Bank,
    /// Mobile money wallet
    #[serde(rename = "momo")]
    MobileMoney,
}

/// Which set of sender fields the service validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// A business; `businessName` and `businessId` are required.
    Institution,
    /// An individual; name, phone, email, country, address, dob and id are required.
    Retail,
}

/// A payment rail (bank transfer, mobile money, ...) available in a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    /// Channel identifier, used as `channel_id` in payments
    pub id: String,
    /// Availability through the API
    pub api_status: String,
    /// Undocumented routing object, kept verbatim.
    pub balancer: serde_json::Value,
    /// Rail kind, e.g. `bank` or `momo`
    pub channel_type: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Currency label used for the country
    pub country_currency: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Expected settlement time in seconds
    pub estimated_settlement_time: i64,
    /// Flat fee in local currency
    pub fee_local: f64,
    /// Flat fee in USD
    #[serde(rename = "feeUSD")]
    pub fee_usd: f64,
    /// Largest accepted amount
    pub max: f64,
    /// Smallest accepted amount
    pub min: f64,
    /// `deposit` or `withdraw`
    pub ramp_type: String,
    /// How funds settle
    pub settlement_type: String,
    /// `active` when the channel accepts payments
    pub status: String,
    /// Success-rate threshold, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i64>,
    /// Last modification time
    pub updated_at: Option<DateTime<Utc>>,
    /// Upstream vendor
    pub vendor_id: String,
    /// Availability in the hosted widget, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_status: Option<String>,
}

impl Channel {
    /// Returns true if the channel currently accepts payments.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// A bank, mobile money operator or e-wallet reachable through one or
/// more channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Network {
    /// Network identifier, used as `network_id` in destinations
    pub id: String,
    /// Kind of account number the network expects
    pub account_number_type: String,
    /// Channels that can reach this network
    #[serde(rename = "channelIds")]
    pub channel_ids: Vec<String>,
    /// Bank or operator code, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Country-specific account number format
    pub country_account_number_type: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Display name
    pub name: String,
    /// `active` when the network accepts payments
    pub status: String,
    /// Last modification time
    pub updated_at: Option<DateTime<Utc>>,
}

impl Network {
    /// Returns true if the network currently accepts payments.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Buy/sell price of a currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rate {
    /// ISO 4217 currency code
    pub code: String,
    /// Rate identifier
    pub rate_id: String,
    /// Locale the rate applies to
    pub locale: String,
    /// Units of the currency per USD when buying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy: Option<f64>,
    /// Units of the currency per USD when selling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell: Option<f64>,
    /// When the rate was last refreshed
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelsEnvelope {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NetworksEnvelope {
    #[serde(default)]
    pub networks: Vec<Network>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatesEnvelope {
    #[serde(default)]
    pub rates: Vec<Rate>,
}

/// Bank account to validate before sending money to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveBankAccountRequest {
    /// Account number to look up
    pub account_number: String,
    /// Network (bank) holding the account
    pub network_id: String,
}

/// Account holder details returned by the bank lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveBankAccountResponse {
    /// Bank name
    pub account_bank: String,
    /// Registered account holder
    pub account_name: String,
    /// Account number as known to the bank
    pub account_number: String,
}

/// Where a payment is delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    /// Bank name, for bank accounts
    pub account_bank: String,
    /// Account holder name
    pub account_name: String,
    /// Account number or phone number
    pub account_number: String,
    /// Bank account or mobile money
    pub account_type: AccountType,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Receiving network
    pub network_id: String,
    /// Receiving network name, omitted when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network_name: String,
}

/// Who is sending a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sender {
    /// Full name
    pub name: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    /// Phone number in international format
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Date of birth, `mm/dd/yyyy`
    pub dob: String,
    /// Email address
    pub email: String,
    /// Identity document number
    pub id_number: String,
    /// Identity document kind
    pub id_type: String,
    /// Business name, for institution senders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Business registration number, for institution senders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
}

/// A disbursement request. Submitting it locks in a rate and waits for
/// acceptance unless `force_accept` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount in USD
    pub amount: f64,
    /// Channel used to deliver the payment
    pub channel_id: String,
    /// Selects which sender fields are validated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub customer_type: Option<CustomerType>,
    /// Receiving account
    pub destination: Destination,
    /// Skip the separate accept step
    #[serde(default)]
    pub force_accept: bool,
    /// Purpose of the payment
    pub reason: String,
    /// Originating customer
    pub sender: Sender,
    /// Caller-chosen idempotency and correlation token.
    pub sequence_id: String,
}

/// A payment as recorded by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    /// Payment identifier
    pub id: String,
    /// Amount in USD
    pub amount: f64,
    /// Channel used to deliver the payment
    pub channel_id: String,
    /// Amount in the local currency
    pub converted_amount: f64,
    /// Destination country
    pub country: String,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Local currency
    pub currency: String,
    /// Receiving account
    pub destination: Destination,
    /// Whether the partner settles directly
    pub direct_settlement: bool,
    /// Deadline for accepting the payment
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the accept step was skipped
    pub force_accept: bool,
    /// Owning partner
    pub partner_id: String,
    /// Exchange rate locked at creation
    pub rate: f64,
    /// Purpose of the payment
    pub reason: String,
    /// Origin of the request
    pub request_source: String,
    /// Originating customer
    pub sender: Sender,
    /// Caller-chosen token from the request
    pub sequence_id: String,
    /// Fee in the local currency
    pub service_fee_amount_local: f64,
    /// Fee in USD
    #[serde(rename = "serviceFeeAmountUSD")]
    pub service_fee_amount_usd: f64,
    /// Undocumented settlement object, kept verbatim.
    pub settlement_info: serde_json::Value,
    /// Lifecycle state, e.g. `created` or `complete`
    pub status: String,
    /// Last modification time
    pub updated_at: Option<DateTime<Utc>>,
}
