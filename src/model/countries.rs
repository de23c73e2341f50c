//! Supported country and currency codes.
//!
//! The service only operates in a fixed set of markets. Codes are open
//! newtypes so callers can pass values read from user input; use
//! `is_supported` (or let the client do it) before sending them anywhere.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(Cow<'static, str>);

/// An ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(Cow<'static, str>);

/// A supported market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Country code
    pub code: CountryCode,
    /// English display name
    pub name: &'static str,
    /// Local currency
    pub currency: CurrencyCode,
}

macro_rules! code_consts {
    ($ty:ident: $($code:ident),+ $(,)?) => {
        impl $ty {
            $(
                #[doc = concat!("`", stringify!($code), "`")]
                pub const $code: Self = Self(Cow::Borrowed(stringify!($code)));
            )+
        }
    };
}

code_consts!(CountryCode: BF, BJ, BW, CD, CG, CI, CM, GA, GH, KE, ML, MW, NG, RW, SN, TG, TZ, UG, ZA, ZM);
code_consts!(CurrencyCode: BWP, CDF, GHS, KES, MWK, NGN, RWF, TZS, UGX, XAF, XOF, ZAR, ZMW);

/// Every supported country, ordered by code.
pub static COUNTRIES: [Country; 20] = [
    country(CountryCode::BF, "Burkina Faso", CurrencyCode::XOF),
    country(CountryCode::BJ, "Benin", CurrencyCode::XOF),
    country(CountryCode::BW, "Botswana", CurrencyCode::BWP),
    country(CountryCode::CD, "Democratic Republic of the Congo", CurrencyCode::CDF),
    country(CountryCode::CG, "Congo Brazzaville", CurrencyCode::XAF),
    country(CountryCode::CI, "Ivory Coast", CurrencyCode::XOF),
    country(CountryCode::CM, "Cameroon", CurrencyCode::XAF),
    country(CountryCode::GA, "Gabon", CurrencyCode::XAF),
    country(CountryCode::GH, "Ghana", CurrencyCode::GHS),
    country(CountryCode::KE, "Kenya", CurrencyCode::KES),
    country(CountryCode::ML, "Mali", CurrencyCode::XOF),
    country(CountryCode::MW, "Malawi", CurrencyCode::MWK),
    country(CountryCode::NG, "Nigeria", CurrencyCode::NGN),
    country(CountryCode::RW, "Rwanda", CurrencyCode::RWF),
    country(CountryCode::SN, "Senegal", CurrencyCode::XOF),
    country(CountryCode::TG, "Togo", CurrencyCode::XOF),
    country(CountryCode::TZ, "Tanzania", CurrencyCode::TZS),
    country(CountryCode::UG, "Uganda", CurrencyCode::UGX),
    country(CountryCode::ZA, "South Africa", CurrencyCode::ZAR),
    country(CountryCode::ZM, "Zambia", CurrencyCode::ZMW),
];

/// Every supported currency, ordered by code.
pub static CURRENCIES: [CurrencyCode; 13] = [
    CurrencyCode::BWP,
    CurrencyCode::CDF,
    CurrencyCode::GHS,
    CurrencyCode::KES,
    CurrencyCode::MWK,
    CurrencyCode::NGN,
    CurrencyCode::RWF,
    CurrencyCode::TZS,
    CurrencyCode::UGX,
    CurrencyCode::XAF,
    CurrencyCode::XOF,
    CurrencyCode::ZAR,
    CurrencyCode::ZMW,
];

const fn country(code: CountryCode, name: &'static str, currency: CurrencyCode) -> Country {
    Country {
        code,
        name,
        currency,
    }
}

impl CountryCode {
    /// Wraps an arbitrary code. Nothing is validated here.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the market entry for this code, if supported.
    #[must_use]
    pub fn country(&self) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.code == *self)
    }

    /// Returns true if the service operates in this country.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.country().is_some()
    }
}

impl CurrencyCode {
    /// Wraps an arbitrary code. Nothing is validated here.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the service quotes rates for this currency.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        CURRENCIES.contains(self)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
