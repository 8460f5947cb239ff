//! Core time, currency, and error types.
//!
//! This module provides:
//! - `time`: `Date`, `ZonedDateTime`, and signed `DayCount` year fractions
//! - `currency`: ISO 4217 currency codes with metadata
//! - `error`: Structured error types for date, currency, and interpolation
//!   operations
//!
//! Commonly used types are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod time;

pub use currency::Currency;
pub use error::{CurrencyError, DateError, InterpolationError};
pub use time::{seconds_of_day, zoned_date_time, Date, DayCount, ZonedDateTime};
