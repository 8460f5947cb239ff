//! Time types and day count conventions for financial calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `ZonedDateTime`: Date-time with a fixed UTC offset, used for valuation
//!   timestamps and option expiries
//! - `DayCount`: Industry-standard day count conventions with signed year
//!   fractions
//!
//! # Examples
//!
//! ```
//! use ratevol_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2014, 1, 3).unwrap();
//! let end = Date::from_ymd(2015, 1, 3).unwrap();
//!
//! let yf = DayCount::ActActIsda.year_fraction(start, end);
//! assert!((yf - 1.0).abs() < 1e-10);
//!
//! // Reversed dates yield the negated fraction
//! assert_eq!(DayCount::ActActIsda.year_fraction(end, start), -yf);
//! ```

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Timelike};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Date-time with a fixed UTC offset.
///
/// Used for valuation timestamps and option expiries. Two instances built
/// from the same (date, time, offset) triple compare equal, which underpins
/// the provider's round-trip construction property.
pub type ZonedDateTime = DateTime<FixedOffset>;

/// Combine a [`Date`], time of day, and UTC offset into a [`ZonedDateTime`].
///
/// A fixed offset maps local time to an instant unambiguously, so this
/// conversion cannot fail.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, NaiveTime};
/// use ratevol_core::types::time::{zoned_date_time, Date};
///
/// let date = Date::from_ymd(2014, 1, 3).unwrap();
/// let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let zone = FixedOffset::east_opt(0).unwrap();
///
/// let zdt = zoned_date_time(date, time, zone);
/// assert_eq!(zdt.to_rfc3339(), "2014-01-03T10:00:00+00:00");
/// ```
pub fn zoned_date_time(date: Date, time: NaiveTime, offset: FixedOffset) -> ZonedDateTime {
    let local = date.into_inner().and_time(time);
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Seconds elapsed since local midnight for a [`ZonedDateTime`].
///
/// Used to fold intraday time into date-level year fractions as a sub-day
/// component.
pub fn seconds_of_day(date_time: ZonedDateTime) -> i64 {
    i64::from(date_time.time().num_seconds_from_midnight())
}

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and the date arithmetic needed for
/// expiry and tenor calculations.
///
/// # Examples
///
/// ```
/// use ratevol_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(date - start, 166);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` when the triple does not form a
    /// valid calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::Parse(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the year (1-366).
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// Returns this date shifted by a number of calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(d.plus_days(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(d.plus_days(-28), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn plus_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Returns this date shifted by a number of calendar years.
    ///
    /// When the target month is shorter than the source day (Feb 29 on a
    /// non-leap year), the day is clamped to the month's last day.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2016, 2, 29).unwrap();
    /// assert_eq!(d.plus_years(1), Date::from_ymd(2017, 2, 28).unwrap());
    /// assert_eq!(d.plus_years(-2), Date::from_ymd(2014, 2, 28).unwrap());
    /// ```
    pub fn plus_years(self, years: i32) -> Self {
        let year = self.year() + years;
        let month = self.month();
        let mut day = self.day();
        loop {
            if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
                return Date(d);
            }
            day -= 1;
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates, negative when `self`
    /// precedes `other`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention (year fraction convention).
///
/// All year fractions are signed: reversing the dates negates the result,
/// and `year_fraction(d, d) == 0` for every convention. This lets the
/// volatility provider express times before the valuation date directly.
///
/// # Variants
///
/// - `Act360`: Actual days / 360 (money market instruments)
/// - `Act365Fixed`: Actual days / 365 (most derivatives markets)
/// - `ActActIsda`: Calendar-year split with actual year lengths (swaption
///   expiry measure)
/// - `Thirty360`: 30/360 US bond basis
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayCount {
    /// Actual/360: actual days / 360.0
    Act360,

    /// Actual/365 Fixed: actual days / 365.0
    Act365Fixed,

    /// Actual/Actual ISDA: the interval is split at calendar-year
    /// boundaries; each piece is divided by its own year's actual length
    /// (365 or 366).
    ActActIsda,

    /// 30/360 US bond basis: months count as 30 days, years as 360, with
    /// the standard end-of-month day adjustments.
    Thirty360,
}

impl DayCount {
    /// Returns the market code for this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::time::DayCount;
    ///
    /// assert_eq!(DayCount::ActActIsda.name(), "ACT/ACT ISDA");
    /// assert_eq!(DayCount::Act365Fixed.name(), "ACT/365F");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "ACT/360",
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::ActActIsda => "ACT/ACT ISDA",
            DayCount::Thirty360 => "30/360",
        }
    }

    /// Calculates the signed year fraction from `start` to `end`.
    ///
    /// Negative when `end` precedes `start`; zero when the dates coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratevol_core::types::time::{Date, DayCount};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCount::Act365Fixed.year_fraction(start, end);
    /// assert!((yf - 182.0 / 365.0).abs() < 1e-12);
    /// assert_eq!(DayCount::Act365Fixed.year_fraction(end, start), -yf);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if end < start {
            return -self.year_fraction(end, start);
        }
        match self {
            DayCount::Act360 => (end - start) as f64 / 360.0,
            DayCount::Act365Fixed => (end - start) as f64 / 365.0,
            DayCount::ActActIsda => act_act_isda(start, end),
            DayCount::Thirty360 => thirty_360(start, end),
        }
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a day count convention from its market code (case-insensitive,
    /// separators ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '-', '_'], "").as_str() {
            "ACT360" | "ACTUAL360" => Ok(DayCount::Act360),
            "ACT365F" | "ACT365" | "ACTUAL365" => Ok(DayCount::Act365Fixed),
            "ACTACTISDA" | "ACTACT" => Ok(DayCount::ActActIsda),
            "30360" | "THIRTY360" => Ok(DayCount::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}

fn year_length(year: i32) -> f64 {
    if is_leap_year(year) {
        366.0
    } else {
        365.0
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// ACT/ACT ISDA year fraction, `start <= end`.
fn act_act_isda(start: Date, end: Date) -> f64 {
    let (y1, y2) = (start.year(), end.year());
    if y1 == y2 {
        return (end - start) as f64 / year_length(y1);
    }
    let first = (year_length(y1) - start.ordinal() as f64 + 1.0) / year_length(y1);
    let last = (end.ordinal() as f64 - 1.0) / year_length(y2);
    first + last + (y2 - y1 - 1) as f64
}

/// 30/360 US bond basis year fraction, `start <= end`.
fn thirty_360(start: Date, end: Date) -> f64 {
    let d1 = if start.day() == 31 { 30 } else { start.day() };
    let d2 = if end.day() == 31 && d1 == 30 {
        30
    } else {
        end.day()
    };
    let days = 360 * (end.year() - start.year())
        + 30 * (end.month() as i32 - start.month() as i32)
        + (d2 as i32 - d1 as i32);
    days as f64 / 360.0
}
