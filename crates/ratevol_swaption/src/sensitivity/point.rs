//! Per-swaption SABR parameter sensitivity.

use ratevol_core::types::{Currency, ZonedDateTime};
use ratevol_sabr::SwapConvention;

/// Sensitivity of a single swaption's value to the four SABR parameters.
///
/// Locates the sensitivity at (convention, expiry, tenor) and tags it with
/// the currency the value is expressed in. The four components are the
/// derivatives of the swaption value to alpha, beta, rho, and nu at that
/// point of the surfaces.
///
/// Value type: points are cheap to clone and consumed per call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwaptionSabrSensitivity {
    convention: SwapConvention,
    expiry: ZonedDateTime,
    tenor: f64,
    currency: Currency,
    alpha: f64,
    beta: f64,
    rho: f64,
    nu: f64,
}

impl SwaptionSabrSensitivity {
    /// Construct a point sensitivity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        convention: SwapConvention,
        expiry: ZonedDateTime,
        tenor: f64,
        currency: Currency,
        alpha: f64,
        beta: f64,
        rho: f64,
        nu: f64,
    ) -> Self {
        Self {
            convention,
            expiry,
            tenor,
            currency,
            alpha,
            beta,
            rho,
            nu,
        }
    }

    /// Returns the swap convention.
    pub fn convention(&self) -> &SwapConvention {
        &self.convention
    }

    /// Returns the option expiry.
    pub fn expiry(&self) -> ZonedDateTime {
        self.expiry
    }

    /// Returns the underlying swap tenor in years.
    pub fn tenor(&self) -> f64 {
        self.tenor
    }

    /// Returns the currency of the sensitivity values.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the derivative to alpha.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the derivative to beta.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the derivative to rho.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the derivative to nu.
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// True when this point shares a grouping key (convention, expiry,
    /// tenor, currency) with `other`.
    pub fn same_key(&self, other: &Self) -> bool {
        self.convention == other.convention
            && self.expiry == other.expiry
            && self.tenor == other.tenor
            && self.currency == other.currency
    }

    /// Component-wise sum of two points sharing a grouping key.
    pub(crate) fn merged_with(&self, other: &Self) -> Self {
        debug_assert!(self.same_key(other));
        Self {
            alpha: self.alpha + other.alpha,
            beta: self.beta + other.beta,
            rho: self.rho + other.rho,
            nu: self.nu + other.nu,
            ..self.clone()
        }
    }
}
