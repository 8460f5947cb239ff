//! Shifted-lognormal Hagan (2002) SABR implied volatility.
//!
//! The implied volatility is approximated by
//!
//! ```text
//! sigma(K, F) = alpha / [(FK)^((1-beta)/2) * D(F/K)]
//!               * (z / x(z))
//!               * [1 + expansion_terms * T]
//! ```
//!
//! where
//! - `D(F/K) = 1 + ((1-beta)^2/24)*ln^2(F/K) + ((1-beta)^4/1920)*ln^4(F/K)`
//! - `z = (nu/alpha) * (FK)^((1-beta)/2) * ln(F/K)`
//! - `x(z) = ln((sqrt(1-2*rho*z+z^2) + z - rho) / (1-rho))`
//!
//! and `F`, `K` are the shifted forward and strike. Near the money the
//! expansion formula is used to avoid the 0/0 singularity (`z/x(z) -> 1` as
//! `z -> 0`).
//!
//! Expiry is allowed to be negative: an expiry date on the valuation date
//! with an earlier time of day produces a slightly negative time, and the
//! expansion terms are linear in `T`.

use ratevol_core::types::InterpolationError;
use thiserror::Error;

/// SABR evaluation error.
///
/// Parameter validation failures and numerical problems, plus pass-through
/// of surface lookup errors raised while sampling parameter surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SabrError {
    /// Initial volatility must be positive
    #[error("Invalid alpha: {0} (must be positive)")]
    InvalidAlpha(f64),

    /// CEV exponent must lie in [0, 1]
    #[error("Invalid beta: {0} (must be in [0, 1])")]
    InvalidBeta(f64),

    /// Correlation must lie in the open interval (-1, 1)
    #[error("Invalid rho: {0} (must be in (-1, 1))")]
    InvalidRho(f64),

    /// Vol-of-vol must be non-negative
    #[error("Invalid nu: {0} (must be non-negative)")]
    InvalidNu(f64),

    /// Shifted forward must be positive
    #[error("Shifted forward {0} is not positive")]
    NonPositiveShiftedForward(f64),

    /// Shifted strike must be positive
    #[error("Shifted strike {0} is not positive")]
    NonPositiveShiftedStrike(f64),

    /// NaN or infinity produced during evaluation
    #[error("NaN or infinity detected in {0}")]
    NonFinite(String),

    /// Two parameter surfaces share a name; sensitivity keys would collide
    #[error("Surface name {0} is used by more than one parameter")]
    DuplicateSurfaceName(String),

    /// Surface lookup failure while sampling SABR parameters
    #[error(transparent)]
    Surface(#[from] InterpolationError),
}

/// Near-the-money threshold on |ln(F/K)| below which the expansion formula
/// is used.
const ATM_THRESHOLD: f64 = 1e-4;

/// Threshold on |z| below which z/x(z) is taken at its limit 1.
const Z_EPS: f64 = 1e-8;

/// Relative bump size for the finite-difference parameter derivatives.
const FD_BUMP: f64 = 1e-6;

/// SABR implied volatility for the given option and model parameters.
///
/// `expiry` is the time to expiry in years (may be slightly negative),
/// `strike` and `forward` are quoted rates, and `shift` displaces both so
/// the model operates on `strike + shift` and `forward + shift`.
///
/// # Errors
///
/// Parameter validation: `alpha > 0`, `beta` in `[0, 1]`, `rho` in
/// `(-1, 1)`, `nu >= 0`, and both shifted rates positive. `NonFinite` when
/// the evaluation degenerates.
///
/// # Examples
///
/// ```
/// use ratevol_sabr::formula;
///
/// // At the money the smile reduces to alpha / F^(1-beta) plus expansion
/// let vol = formula::volatility(1.0, 0.025, 0.025, 0.0, 0.04, 0.5, -0.25, 0.4).unwrap();
/// assert!((vol - 0.04 / 0.025_f64.sqrt()).abs() < 0.01);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn volatility(
    expiry: f64,
    strike: f64,
    forward: f64,
    shift: f64,
    alpha: f64,
    beta: f64,
    rho: f64,
    nu: f64,
) -> Result<f64, SabrError> {
    validate_params(alpha, beta, rho, nu)?;

    let f = forward + shift;
    let k = strike + shift;
    if f <= 0.0 {
        return Err(SabrError::NonPositiveShiftedForward(f));
    }
    if k <= 0.0 {
        return Err(SabrError::NonPositiveShiftedStrike(k));
    }

    let log_fk = (f / k).ln();
    let vol = if log_fk.abs() < ATM_THRESHOLD {
        vol_near_the_money(expiry, f, k, alpha, beta, rho, nu)
    } else {
        vol_hagan(expiry, f, k, log_fk, alpha, beta, rho, nu)
    };

    if !vol.is_finite() {
        return Err(SabrError::NonFinite("volatility".to_string()));
    }
    Ok(vol)
}

/// Value and parameter derivatives of the SABR implied volatility.
///
/// Derivatives are with respect to the model parameters at fixed option
/// terms; node-level surface sensitivities are built from these via the
/// chain rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SabrParamDerivatives {
    /// Implied volatility at the unbumped parameters
    pub value: f64,
    /// d(sigma)/d(alpha)
    pub d_alpha: f64,
    /// d(sigma)/d(beta)
    pub d_beta: f64,
    /// d(sigma)/d(rho)
    pub d_rho: f64,
    /// d(sigma)/d(nu)
    pub d_nu: f64,
}

/// Implied volatility together with its alpha/beta/rho/nu derivatives.
///
/// Derivatives are computed by central finite differences on the parameter,
/// falling back to a one-sided difference when the bump would leave the
/// parameter's valid range (beta at 0 or 1, rho near +/-1, nu at 0).
///
/// # Errors
///
/// Same conditions as [`volatility`].
#[allow(clippy::too_many_arguments)]
pub fn volatility_param_adjoint(
    expiry: f64,
    strike: f64,
    forward: f64,
    shift: f64,
    alpha: f64,
    beta: f64,
    rho: f64,
    nu: f64,
) -> Result<SabrParamDerivatives, SabrError> {
    let value = volatility(expiry, strike, forward, shift, alpha, beta, rho, nu)?;

    let d_alpha = bounded_diff(alpha, f64::MIN_POSITIVE, f64::INFINITY, |a| {
        volatility(expiry, strike, forward, shift, a, beta, rho, nu)
    })?;
    let d_beta = bounded_diff(beta, 0.0, 1.0, |b| {
        volatility(expiry, strike, forward, shift, alpha, b, rho, nu)
    })?;
    let d_rho = bounded_diff(rho, -1.0 + Z_EPS, 1.0 - Z_EPS, |r| {
        volatility(expiry, strike, forward, shift, alpha, beta, r, nu)
    })?;
    let d_nu = bounded_diff(nu, 0.0, f64::INFINITY, |n| {
        volatility(expiry, strike, forward, shift, alpha, beta, rho, n)
    })?;

    Ok(SabrParamDerivatives {
        value,
        d_alpha,
        d_beta,
        d_rho,
        d_nu,
    })
}

fn validate_params(alpha: f64, beta: f64, rho: f64, nu: f64) -> Result<(), SabrError> {
    if alpha <= 0.0 {
        return Err(SabrError::InvalidAlpha(alpha));
    }
    if !(0.0..=1.0).contains(&beta) {
        return Err(SabrError::InvalidBeta(beta));
    }
    if rho <= -1.0 || rho >= 1.0 {
        return Err(SabrError::InvalidRho(rho));
    }
    if nu < 0.0 {
        return Err(SabrError::InvalidNu(nu));
    }
    Ok(())
}

/// Expansion-formula branch for |ln(F/K)| below the near-the-money
/// threshold. K ~ F, so the singular z/x(z) factor is at its limit 1.
fn vol_near_the_money(t: f64, f: f64, k: f64, alpha: f64, beta: f64, rho: f64, nu: f64) -> f64 {
    let one_minus_beta = 1.0 - beta;
    let fk = f * k;
    let fk_pow_half = fk.powf(one_minus_beta / 2.0);

    let base = alpha / fk_pow_half;
    base * expansion(t, fk, fk_pow_half, alpha, beta, rho, nu)
}

/// Full Hagan formula for strikes away from the money.
#[allow(clippy::too_many_arguments)]
fn vol_hagan(
    t: f64,
    f: f64,
    k: f64,
    log_fk: f64,
    alpha: f64,
    beta: f64,
    rho: f64,
    nu: f64,
) -> f64 {
    let one_minus_beta = 1.0 - beta;
    let fk = f * k;
    let fk_pow_half = fk.powf(one_minus_beta / 2.0);

    // D(F/K) = 1 + ((1-beta)^2/24)*ln^2 + ((1-beta)^4/1920)*ln^4
    let log_fk_2 = log_fk * log_fk;
    let omb_2 = one_minus_beta * one_minus_beta;
    let d = 1.0 + omb_2 / 24.0 * log_fk_2 + omb_2 * omb_2 / 1920.0 * log_fk_2 * log_fk_2;

    // z = (nu/alpha) * (FK)^((1-beta)/2) * ln(F/K)
    let z = nu / alpha * fk_pow_half * log_fk;
    let z_over_x = if z.abs() < Z_EPS { 1.0 } else { z / x_of_z(z, rho) };

    let base = alpha / (fk_pow_half * d);
    base * z_over_x * expansion(t, fk, fk_pow_half, alpha, beta, rho, nu)
}

/// x(z) = ln((sqrt(1-2*rho*z+z^2) + z - rho) / (1-rho))
///
/// The discriminant equals (z-rho)^2 + 1 - rho^2, strictly positive for
/// |rho| < 1.
fn x_of_z(z: f64, rho: f64) -> f64 {
    let sqrt_disc = (1.0 - 2.0 * rho * z + z * z).sqrt();
    ((sqrt_disc + z - rho) / (1.0 - rho)).ln()
}

/// The [1 + (...)*T] correction common to both branches, at the geometric
/// midpoint FK.
fn expansion(t: f64, fk: f64, fk_pow_half: f64, alpha: f64, beta: f64, rho: f64, nu: f64) -> f64 {
    let one_minus_beta = 1.0 - beta;
    let fk_pow_full = fk.powf(one_minus_beta);

    let term1 = one_minus_beta * one_minus_beta / 24.0 * alpha * alpha / fk_pow_full;
    let term2 = rho * beta * nu * alpha / (4.0 * fk_pow_half);
    let term3 = (2.0 - 3.0 * rho * rho) / 24.0 * nu * nu;

    1.0 + (term1 + term2 + term3) * t
}

/// Finite difference of `f` at `x`, central inside (`lo`, `hi`) and
/// one-sided at the boundary.
fn bounded_diff<F>(x: f64, lo: f64, hi: f64, f: F) -> Result<f64, SabrError>
where
    F: Fn(f64) -> Result<f64, SabrError>,
{
    let h = FD_BUMP * x.abs().max(1.0);
    let up = (x + h).min(hi);
    let down = (x - h).max(lo);
    Ok((f(up)? - f(down)?) / (up - down))
}
