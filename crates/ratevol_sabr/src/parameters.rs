//! SABR parameter sets backed by (expiry, tenor) surfaces.

use crate::convention::SwapConvention;
use crate::formula::{self, SabrError, SabrParamDerivatives};
use ratevol_core::surface::{ParameterSurface, Surface};

/// SABR model parameters varying over (expiry, tenor).
///
/// Immutable aggregate of four parameter surfaces, a displacement shift,
/// and the swap convention the parameters were calibrated for. Each
/// surface carries a distinct name, which is the key under which node
/// sensitivities to that surface are reported.
///
/// # Examples
///
/// ```
/// use ratevol_core::surface::ParameterSurface;
/// use ratevol_sabr::{SabrInterestRateParameters, SwapConvention};
///
/// let params = SabrInterestRateParameters::new(
///     ParameterSurface::constant("Alpha", 0.05),
///     ParameterSurface::constant("Beta", 0.5),
///     ParameterSurface::constant("Rho", -0.25),
///     ParameterSurface::constant("Nu", 0.4),
///     0.025,
///     SwapConvention::usd_fixed_6m_libor_3m(),
/// )
/// .unwrap();
///
/// let vol = params.volatility(1.0, 5.0, 0.03, 0.025).unwrap();
/// assert!(vol > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SabrInterestRateParameters {
    alpha_surface: ParameterSurface<f64>,
    beta_surface: ParameterSurface<f64>,
    rho_surface: ParameterSurface<f64>,
    nu_surface: ParameterSurface<f64>,
    shift: f64,
    convention: SwapConvention,
}

impl SabrInterestRateParameters {
    /// Construct a parameter set from its four surfaces, shift, and
    /// convention.
    ///
    /// # Errors
    ///
    /// `SabrError::DuplicateSurfaceName` when two surfaces share a name.
    pub fn new(
        alpha_surface: ParameterSurface<f64>,
        beta_surface: ParameterSurface<f64>,
        rho_surface: ParameterSurface<f64>,
        nu_surface: ParameterSurface<f64>,
        shift: f64,
        convention: SwapConvention,
    ) -> Result<Self, SabrError> {
        let names = [
            alpha_surface.name(),
            beta_surface.name(),
            rho_surface.name(),
            nu_surface.name(),
        ];
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(SabrError::DuplicateSurfaceName(name.to_string()));
            }
        }
        Ok(Self {
            alpha_surface,
            beta_surface,
            rho_surface,
            nu_surface,
            shift,
            convention,
        })
    }

    /// Alpha (initial volatility) at the given expiry and tenor.
    pub fn alpha(&self, expiry: f64, tenor: f64) -> Result<f64, SabrError> {
        Ok(self.alpha_surface.z_value(expiry, tenor)?)
    }

    /// Beta (CEV exponent) at the given expiry and tenor.
    pub fn beta(&self, expiry: f64, tenor: f64) -> Result<f64, SabrError> {
        Ok(self.beta_surface.z_value(expiry, tenor)?)
    }

    /// Rho (rate/volatility correlation) at the given expiry and tenor.
    pub fn rho(&self, expiry: f64, tenor: f64) -> Result<f64, SabrError> {
        Ok(self.rho_surface.z_value(expiry, tenor)?)
    }

    /// Nu (vol-of-vol) at the given expiry and tenor.
    pub fn nu(&self, expiry: f64, tenor: f64) -> Result<f64, SabrError> {
        Ok(self.nu_surface.z_value(expiry, tenor)?)
    }

    /// Returns the displacement shift.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns the swap convention the parameters apply to.
    pub fn convention(&self) -> &SwapConvention {
        &self.convention
    }

    /// Returns the alpha surface.
    pub fn alpha_surface(&self) -> &ParameterSurface<f64> {
        &self.alpha_surface
    }

    /// Returns the beta surface.
    pub fn beta_surface(&self) -> &ParameterSurface<f64> {
        &self.beta_surface
    }

    /// Returns the rho surface.
    pub fn rho_surface(&self) -> &ParameterSurface<f64> {
        &self.rho_surface
    }

    /// Returns the nu surface.
    pub fn nu_surface(&self) -> &ParameterSurface<f64> {
        &self.nu_surface
    }

    /// Implied volatility for a swaption with the given expiry time, swap
    /// tenor, strike, and forward rate.
    ///
    /// Samples the four surfaces at (expiry, tenor) and evaluates the
    /// shifted Hagan formula. Pure: same inputs always give the same
    /// output.
    ///
    /// # Errors
    ///
    /// Surface lookup errors pass through unchanged; formula validation
    /// errors as in [`formula::volatility`].
    pub fn volatility(
        &self,
        expiry: f64,
        tenor: f64,
        strike: f64,
        forward: f64,
    ) -> Result<f64, SabrError> {
        formula::volatility(
            expiry,
            strike,
            forward,
            self.shift,
            self.alpha(expiry, tenor)?,
            self.beta(expiry, tenor)?,
            self.rho(expiry, tenor)?,
            self.nu(expiry, tenor)?,
        )
    }

    /// Implied volatility with its derivatives to the sampled
    /// alpha/beta/rho/nu values.
    ///
    /// # Errors
    ///
    /// As [`volatility`](Self::volatility).
    pub fn volatility_param_adjoint(
        &self,
        expiry: f64,
        tenor: f64,
        strike: f64,
        forward: f64,
    ) -> Result<SabrParamDerivatives, SabrError> {
        formula::volatility_param_adjoint(
            expiry,
            strike,
            forward,
            self.shift,
            self.alpha(expiry, tenor)?,
            self.beta(expiry, tenor)?,
            self.rho(expiry, tenor)?,
            self.nu(expiry, tenor)?,
        )
    }
}
