//! SABR swaption volatility provider.

use chrono::{FixedOffset, NaiveTime};
use ratevol_core::surface::Surface;
use ratevol_core::types::{seconds_of_day, zoned_date_time, Date, DayCount, ZonedDateTime};
use ratevol_sabr::{SabrError, SabrInterestRateParameters, SabrParamDerivatives, SwapConvention};

use crate::sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, SensitivityError,
    SwaptionSabrSensitivities, SwaptionSabrSensitivity,
};

/// Average year length used for tenor snapping and the intraday fold.
const DAYS_PER_YEAR: f64 = 365.25;

const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

/// Swaption volatility provider backed by SABR parameter surfaces.
///
/// Immutable snapshot anchored at a valuation instant: volatilities and
/// sensitivities are pure functions of the inputs plus construction-time
/// state, so a provider can be shared freely across threads.
///
/// Expiry coordinates are measured by [`relative_time`](Self::relative_time)
/// and tenor coordinates by [`tenor`](Self::tenor); both feed the parameter
/// surfaces directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SabrParametersSwaptionVolatilities {
    parameters: SabrInterestRateParameters,
    valuation_date_time: ZonedDateTime,
    day_count: DayCount,
}

impl SabrParametersSwaptionVolatilities {
    /// Construct a provider from parameters, a valuation instant, and the
    /// day count measuring expiry times.
    pub fn new(
        parameters: SabrInterestRateParameters,
        valuation_date_time: ZonedDateTime,
        day_count: DayCount,
    ) -> Self {
        Self {
            parameters,
            valuation_date_time,
            day_count,
        }
    }

    /// Construct a provider with the ACT/ACT ISDA expiry measure, the
    /// convention SABR surfaces are calibrated on.
    pub fn of(
        parameters: SabrInterestRateParameters,
        valuation_date_time: ZonedDateTime,
    ) -> Self {
        Self::new(parameters, valuation_date_time, DayCount::ActActIsda)
    }

    /// Construct a provider from the valuation instant's components.
    ///
    /// Equivalent to [`of`](Self::of) with the combined instant: both forms
    /// produce equal providers.
    pub fn of_date_time_zone(
        parameters: SabrInterestRateParameters,
        valuation_date: Date,
        valuation_time: NaiveTime,
        offset: FixedOffset,
    ) -> Self {
        Self::of(
            parameters,
            zoned_date_time(valuation_date, valuation_time, offset),
        )
    }

    /// Returns the swap convention the provider applies to.
    pub fn convention(&self) -> &SwapConvention {
        self.parameters.convention()
    }

    /// Returns the SABR parameters.
    pub fn parameters(&self) -> &SabrInterestRateParameters {
        &self.parameters
    }

    /// Returns the valuation instant.
    pub fn valuation_date_time(&self) -> ZonedDateTime {
        self.valuation_date_time
    }

    /// Returns the day count measuring expiry times.
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Tenor of the underlying swap, as a signed year count snapped to the
    /// nearest quarter year.
    ///
    /// The snapping absorbs business-day adjustments of the swap dates:
    /// schedules landing a month-end roll or a few days past an
    /// anniversary still report the nominal tenor. `tenor(d, d) == 0` and
    /// `tenor(a, b) == -tenor(b, a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::Date;
    /// # use chrono::{FixedOffset, NaiveTime};
    /// # use ratevol_core::surface::ParameterSurface;
    /// # use ratevol_sabr::{SabrInterestRateParameters, SwapConvention};
    /// # use ratevol_swaption::SabrParametersSwaptionVolatilities;
    /// # let parameters = SabrInterestRateParameters::new(
    /// #     ParameterSurface::constant("Alpha", 0.05),
    /// #     ParameterSurface::constant("Beta", 0.5),
    /// #     ParameterSurface::constant("Rho", -0.25),
    /// #     ParameterSurface::constant("Nu", 0.4),
    /// #     0.025,
    /// #     SwapConvention::usd_fixed_6m_libor_3m(),
    /// # ).unwrap();
    /// # let vols = SabrParametersSwaptionVolatilities::of_date_time_zone(
    /// #     parameters,
    /// #     Date::from_ymd(2014, 1, 3).unwrap(),
    /// #     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    /// #     FixedOffset::east_opt(0).unwrap(),
    /// # );
    /// let start = Date::from_ymd(2014, 1, 3).unwrap();
    /// // A five-year swap ending a month past the anniversary still reads 5.0
    /// assert_eq!(vols.tenor(start, Date::from_ymd(2019, 2, 2).unwrap()), 5.0);
    /// assert_eq!(vols.tenor(start, Date::from_ymd(2018, 12, 31).unwrap()), 5.0);
    /// ```
    pub fn tenor(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        (days / DAYS_PER_YEAR * 4.0).round() / 4.0
    }

    /// Signed time from the valuation instant to `date_time`, in years.
    ///
    /// The date part is measured with the provider's day count; the
    /// time-of-day difference folds in as a sub-day fraction. Exactly zero
    /// at the valuation instant; negative before it, including an expiry
    /// earlier the same day.
    pub fn relative_time(&self, date_time: ZonedDateTime) -> f64 {
        let valuation_date = Date::from(self.valuation_date_time.date_naive());
        let target_date = Date::from(date_time.date_naive());
        let date_part = self.day_count.year_fraction(valuation_date, target_date);

        let seconds = seconds_of_day(date_time) - seconds_of_day(self.valuation_date_time);
        date_part + seconds as f64 / SECONDS_PER_YEAR
    }

    /// Implied volatility for a swaption expiring at `expiry` on a swap of
    /// the given tenor, strike, and forward.
    ///
    /// # Errors
    ///
    /// Surface lookup and SABR validation errors pass through unchanged.
    pub fn volatility(
        &self,
        expiry: ZonedDateTime,
        tenor: f64,
        strike: f64,
        forward: f64,
    ) -> Result<f64, SabrError> {
        let expiry_time = self.relative_time(expiry);
        self.parameters.volatility(expiry_time, tenor, strike, forward)
    }

    /// Implied volatility together with its derivatives to the sampled
    /// alpha/beta/rho/nu values, for building point sensitivities.
    ///
    /// # Errors
    ///
    /// As [`volatility`](Self::volatility).
    pub fn volatility_param_adjoint(
        &self,
        expiry: ZonedDateTime,
        tenor: f64,
        strike: f64,
        forward: f64,
    ) -> Result<SabrParamDerivatives, SabrError> {
        let expiry_time = self.relative_time(expiry);
        self.parameters
            .volatility_param_adjoint(expiry_time, tenor, strike, forward)
    }

    /// Project a point sensitivity onto the nodes of the four parameter
    /// surfaces.
    ///
    /// Each surface's node-sensitivity vector at the point's
    /// (expiry time, tenor) is scaled by the point's corresponding
    /// derivative component and tagged with (surface name, point currency).
    /// The result carries one entry per surface.
    ///
    /// # Errors
    ///
    /// Surface lookup errors pass through unchanged.
    pub fn parameter_sensitivity(
        &self,
        point: &SwaptionSabrSensitivity,
    ) -> Result<CurrencyParameterSensitivities, SensitivityError> {
        let expiry_time = self.relative_time(point.expiry());
        let tenor = point.tenor();

        let projections = [
            (self.parameters.alpha_surface(), point.alpha()),
            (self.parameters.beta_surface(), point.beta()),
            (self.parameters.rho_surface(), point.rho()),
            (self.parameters.nu_surface(), point.nu()),
        ];

        let mut entries = Vec::with_capacity(projections.len());
        for (surface, component) in projections {
            let weights = surface.z_value_node_sensitivity(expiry_time, tenor)?;
            if weights.is_empty() {
                continue;
            }
            entries.push(
                CurrencyParameterSensitivity::new(surface.name(), point.currency(), weights)
                    .multiplied_by(component),
            );
        }
        CurrencyParameterSensitivities::of(entries)
    }

    /// Project a collection of point sensitivities onto surface nodes and
    /// aggregate.
    ///
    /// The points are normalized first (grouped and summed per key), then
    /// the per-point projections are folded with
    /// [`CurrencyParameterSensitivities::combined_with`] in the normalized
    /// order. By linearity this equals combining the individual
    /// projections, and the sequential fold makes the result
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Surface lookup errors and node-count mismatches pass through
    /// unchanged.
    pub fn parameter_sensitivity_all(
        &self,
        points: &SwaptionSabrSensitivities,
    ) -> Result<CurrencyParameterSensitivities, SensitivityError> {
        let mut total = CurrencyParameterSensitivities::empty();
        for point in points.normalize().iter() {
            let projected = self.parameter_sensitivity(point)?;
            total = total.combined_with(&projected)?;
        }
        Ok(total)
    }
}
