//! Swap convention value objects.
//!
//! A convention identifies the family of fixed-vs-ibor swaps a volatility
//! provider applies to. The core never interprets the convention beyond
//! identity: it keys providers and sensitivity normalisation.

use ratevol_core::types::DayCount;
use std::fmt;

/// Named fixed-vs-ibor swap convention.
///
/// Immutable value object with identity semantics: two conventions are the
/// same exactly when all fields match. `Hash` lets conventions key
/// aggregation maps, and the derived `Ord` (name-major) gives collections
/// a total order over conventions, including same-named ones that differ
/// in other fields.
///
/// # Examples
///
/// ```
/// use ratevol_sabr::SwapConvention;
///
/// let usd = SwapConvention::usd_fixed_6m_libor_3m();
/// assert_eq!(usd.name(), "USD-FIXED-6M-LIBOR-3M");
/// assert_eq!(usd, SwapConvention::usd_fixed_6m_libor_3m());
/// assert_ne!(usd, SwapConvention::eur_fixed_1y_euribor_6m());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapConvention {
    name: String,
    fixed_leg_day_count: DayCount,
    floating_index: String,
}

impl SwapConvention {
    /// Construct a convention from its components.
    pub fn new(
        name: impl Into<String>,
        fixed_leg_day_count: DayCount,
        floating_index: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fixed_leg_day_count,
            floating_index: floating_index.into(),
        }
    }

    /// USD fixed-vs-LIBOR-3M swaps: semi-annual 30/360 fixed leg.
    pub fn usd_fixed_6m_libor_3m() -> Self {
        Self::new("USD-FIXED-6M-LIBOR-3M", DayCount::Thirty360, "USD-LIBOR-3M")
    }

    /// EUR fixed-vs-EURIBOR-6M swaps: annual 30/360 fixed leg.
    pub fn eur_fixed_1y_euribor_6m() -> Self {
        Self::new(
            "EUR-FIXED-1Y-EURIBOR-6M",
            DayCount::Thirty360,
            "EUR-EURIBOR-6M",
        )
    }

    /// Returns the convention name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixed leg day count.
    pub fn fixed_leg_day_count(&self) -> DayCount {
        self.fixed_leg_day_count
    }

    /// Returns the floating index label.
    pub fn floating_index(&self) -> &str {
        &self.floating_index
    }
}

impl fmt::Display for SwapConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
