//! Collection of per-swaption SABR sensitivities.

use super::point::SwaptionSabrSensitivity;
use std::cmp::Ordering;

/// Ordered collection of [`SwaptionSabrSensitivity`] points.
///
/// A portfolio typically produces several points sharing a grouping key
/// (same convention, expiry, tenor, and currency). [`normalize`]
/// consolidates those into one point per key with summed components, in a
/// deterministic order, so that downstream node projection touches each
/// surface point once.
///
/// [`normalize`]: Self::normalize
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwaptionSabrSensitivities {
    points: Vec<SwaptionSabrSensitivity>,
}

impl SwaptionSabrSensitivities {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from existing points.
    pub fn of(points: Vec<SwaptionSabrSensitivity>) -> Self {
        Self { points }
    }

    /// Appends a point.
    pub fn push(&mut self, point: SwaptionSabrSensitivity) {
        self.points.push(point);
    }

    /// Number of points held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points are held.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &SwaptionSabrSensitivity> {
        self.points.iter()
    }

    /// Group points by (convention, expiry, tenor, currency) and sum the
    /// components within each group.
    ///
    /// Output order is sorted by expiry, then tenor, then currency, then
    /// convention (name-major total order), so normalizing is
    /// deterministic regardless of input order.
    pub fn normalize(&self) -> Self {
        let mut sorted = self.points.clone();
        sorted.sort_by(key_order);

        let mut merged: Vec<SwaptionSabrSensitivity> = Vec::with_capacity(sorted.len());
        for point in sorted {
            match merged.last_mut() {
                Some(last) if last.same_key(&point) => *last = last.merged_with(&point),
                _ => merged.push(point),
            }
        }
        Self { points: merged }
    }
}

impl FromIterator<SwaptionSabrSensitivity> for SwaptionSabrSensitivities {
    fn from_iter<I: IntoIterator<Item = SwaptionSabrSensitivity>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

fn key_order(a: &SwaptionSabrSensitivity, b: &SwaptionSabrSensitivity) -> Ordering {
    a.expiry()
        .cmp(&b.expiry())
        .then(a.tenor().partial_cmp(&b.tenor()).unwrap_or(Ordering::Equal))
        .then(a.currency().cmp(&b.currency()))
        .then(a.convention().cmp(b.convention()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};
    use ratevol_core::types::{zoned_date_time, Currency, Date};
    use ratevol_sabr::SwapConvention;

    fn expiry(year: i32) -> chrono::DateTime<FixedOffset> {
        zoned_date_time(
            Date::from_ymd(year, 1, 3).unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            FixedOffset::east_opt(0).unwrap(),
        )
    }

    fn point(year: i32, tenor: f64, alpha: f64) -> SwaptionSabrSensitivity {
        SwaptionSabrSensitivity::new(
            SwapConvention::usd_fixed_6m_libor_3m(),
            expiry(year),
            tenor,
            Currency::USD,
            alpha,
            alpha * 2.0,
            -alpha,
            alpha / 2.0,
        )
    }

    #[test]
    fn test_normalize_merges_same_key() {
        let points =
            SwaptionSabrSensitivities::of(vec![point(2015, 5.0, 1.0), point(2015, 5.0, 2.5)]);
        let normalized = points.normalize();
        assert_eq!(normalized.len(), 1);
        let merged = normalized.iter().next().unwrap();
        assert_eq!(merged.alpha(), 3.5);
        assert_eq!(merged.beta(), 7.0);
    }

    #[test]
    fn test_normalize_keeps_distinct_keys() {
        let points = SwaptionSabrSensitivities::of(vec![
            point(2017, 5.0, 1.0),
            point(2015, 5.0, 2.0),
            point(2015, 7.0, 3.0),
        ]);
        let normalized = points.normalize();
        assert_eq!(normalized.len(), 3);
        // Sorted by expiry then tenor
        let tenors: Vec<_> = normalized.iter().map(|p| (p.expiry(), p.tenor())).collect();
        assert_eq!(
            tenors,
            vec![(expiry(2015), 5.0), (expiry(2015), 7.0), (expiry(2017), 5.0)]
        );
    }

    #[test]
    fn test_normalize_order_independent() {
        let a = SwaptionSabrSensitivities::of(vec![
            point(2015, 5.0, 1.0),
            point(2017, 2.0, 4.0),
            point(2015, 5.0, 2.0),
        ]);
        let b = SwaptionSabrSensitivities::of(vec![
            point(2017, 2.0, 4.0),
            point(2015, 5.0, 2.0),
            point(2015, 5.0, 1.0),
        ]);
        assert_eq!(a.normalize(), b.normalize());
    }

    #[test]
    fn test_normalize_orders_same_named_conventions() {
        use ratevol_core::types::DayCount;

        let base = point(2015, 5.0, 1.0);
        let variant = SwaptionSabrSensitivity::new(
            SwapConvention::new("USD-FIXED-6M-LIBOR-3M", DayCount::Act365Fixed, "USD-LIBOR-3M"),
            expiry(2015),
            5.0,
            Currency::USD,
            2.0,
            4.0,
            -2.0,
            1.0,
        );

        let a = SwaptionSabrSensitivities::of(vec![base.clone(), variant.clone()]).normalize();
        let b = SwaptionSabrSensitivities::of(vec![variant, base]).normalize();
        // Distinct conventions stay separate, in a fixed order
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(SwaptionSabrSensitivities::new().normalize().is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let points: SwaptionSabrSensitivities =
            (0..3).map(|i| point(2015 + i, 5.0, 1.0)).collect();
        assert_eq!(points.len(), 3);
    }
}
