//! SABR model layer for swaption volatility surfaces.
//!
//! This crate provides:
//! - [`formula`]: shifted-lognormal Hagan (2002) implied volatility and its
//!   parameter derivatives
//! - [`convention`]: swap convention value objects used to key volatility
//!   providers
//! - [`parameters`]: SABR parameter sets backed by (expiry, tenor) surfaces
//!
//! # Example
//!
//! ```
//! use ratevol_sabr::formula;
//!
//! let vol = formula::volatility(1.0, 0.025, 0.025, 0.0, 0.04, 0.5, -0.25, 0.4).unwrap();
//! assert!(vol > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod convention;
pub mod formula;
pub mod parameters;

pub use convention::SwapConvention;
pub use formula::{SabrError, SabrParamDerivatives};
pub use parameters::SabrInterestRateParameters;
