//! Currency types for financial calculations.
//!
//! ISO 4217 currency codes with serialisation support. Currencies are
//! totally ordered by code so that sensitivity aggregation can iterate
//! them deterministically.
//!
//! # Examples
//!
//! ```
//! use ratevol_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//!
//! let eur: Currency = "eur".parse().unwrap();
//! assert_eq!(eur, Currency::EUR);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency code.
///
/// Enum-based for static dispatch and cheap copy semantics. Covers the
/// major swaption markets; parsing an unlisted code returns
/// [`CurrencyError::UnknownCode`].
///
/// The derived `Ord` follows the variant declaration order, which is
/// alphabetical by code.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Swiss Franc
    CHF,

    /// Euro
    EUR,

    /// British Pound Sterling
    GBP,

    /// Japanese Yen
    JPY,

    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::JPY.code(), "JPY");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::USD => "USD",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// Most currencies use 2 decimal places; JPY uses 0.
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "CHF" => Ok(Currency::CHF),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "USD" => Ok(Currency::USD),
            _ => Err(CurrencyError::UnknownCode(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
