//! Sensitivity value types.
//!
//! A pricer produces one [`SwaptionSabrSensitivity`] per swaption: the
//! derivative of its value to the four SABR parameters at the option's
//! (expiry, tenor). The provider projects these onto surface nodes as
//! [`CurrencyParameterSensitivity`] vectors, which aggregate across trades
//! via [`CurrencyParameterSensitivities::combined_with`].

pub mod collection;
pub mod currency_param;
pub mod error;
pub mod point;

pub use collection::SwaptionSabrSensitivities;
pub use currency_param::{CurrencyParameterSensitivities, CurrencyParameterSensitivity};
pub use error::SensitivityError;
pub use point::SwaptionSabrSensitivity;
