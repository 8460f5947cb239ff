//! Swaption volatility provider backed by SABR parameter surfaces.
//!
//! This crate provides:
//! - [`volatilities`]: the [`SabrParametersSwaptionVolatilities`] provider,
//!   mapping option expiries and swap tenors onto SABR implied volatilities
//! - [`sensitivity`]: point sensitivities to the SABR parameters and their
//!   projection onto surface nodes, grouped per currency
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, NaiveTime};
//! use ratevol_core::surface::ParameterSurface;
//! use ratevol_core::types::Date;
//! use ratevol_sabr::{SabrInterestRateParameters, SwapConvention};
//! use ratevol_swaption::SabrParametersSwaptionVolatilities;
//!
//! let parameters = SabrInterestRateParameters::new(
//!     ParameterSurface::constant("Alpha", 0.05),
//!     ParameterSurface::constant("Beta", 0.5),
//!     ParameterSurface::constant("Rho", -0.25),
//!     ParameterSurface::constant("Nu", 0.4),
//!     0.025,
//!     SwapConvention::usd_fixed_6m_libor_3m(),
//! )
//! .unwrap();
//!
//! let vols = SabrParametersSwaptionVolatilities::of_date_time_zone(
//!     parameters,
//!     Date::from_ymd(2024, 1, 5).unwrap(),
//!     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
//!     FixedOffset::east_opt(0).unwrap(),
//! );
//!
//! let five_years_on = Date::from_ymd(2029, 1, 5).unwrap();
//! assert_eq!(vols.tenor(Date::from_ymd(2024, 1, 5).unwrap(), five_years_on), 5.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sensitivity;
pub mod volatilities;

pub use sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, SensitivityError,
    SwaptionSabrSensitivities, SwaptionSabrSensitivity,
};
pub use volatilities::SabrParametersSwaptionVolatilities;
