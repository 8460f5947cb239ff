//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing
//! - `InterpolationError`: Errors from grid interpolation and surface lookup

use thiserror::Error;

/// Date construction and parsing errors.
///
/// # Examples
///
/// ```
/// use ratevol_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert!(format!("{}", err).contains("2024-2-30"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The (year, month, day) triple does not form a valid calendar date.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// The input string could not be parsed as an ISO 8601 date.
    #[error("Date parse error: {0}")]
    Parse(String),
}

/// Currency parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The input string is not a supported ISO 4217 code.
    #[error("Unknown currency code: {0}")]
    UnknownCode(String),
}

/// Grid interpolation and surface lookup errors.
///
/// # Variants
///
/// - `OutOfBounds`: Query outside the valid interpolation domain
/// - `InsufficientData`: Not enough points to build an interpolator
/// - `InvalidInput`: Malformed grid (dimension mismatch, unsorted axis)
///
/// # Examples
///
/// ```
/// use ratevol_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query coordinate that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Malformed input data (dimension mismatch, unsorted axis).
    #[error("Invalid interpolation input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(format!("{}", err), "Invalid date: 2023-2-29");
    }

    #[test]
    fn test_currency_error_display() {
        let err = CurrencyError::UnknownCode("XXX".to_string());
        assert!(format!("{}", err).contains("XXX"));
    }

    #[test]
    fn test_interpolation_error_out_of_bounds_display() {
        let err = InterpolationError::OutOfBounds {
            x: -1.0,
            min: 0.0,
            max: 10.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("-1"));
        assert!(msg.contains("[0, 10]"));
    }

    #[test]
    fn test_interpolation_error_insufficient_data_display() {
        let err = InterpolationError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Insufficient data points: got 1, need at least 2"
        );
    }

    #[test]
    fn test_errors_clone_and_eq() {
        let err = InterpolationError::InvalidInput("bad grid".to_string());
        assert_eq!(err.clone(), err);
    }
}
