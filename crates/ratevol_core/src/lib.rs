//! # ratevol_core: Foundation Layer for the ratevol Library
//!
//! Bottom layer of the workspace, providing:
//! - Time types: `Date`, `ZonedDateTime`, `DayCount` (`types::time`)
//! - Currency types: `Currency` (`types::currency`)
//! - Error types: `DateError`, `CurrencyError`, `InterpolationError` (`types::error`)
//! - Bilinear grid interpolation with node-weight extraction (`math::interpolators`)
//! - Named 2-D parameter surfaces with per-node sensitivities (`surface`)
//!
//! This crate has no dependencies on other ratevol_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional, behind the `serde` feature)
//!
//! ## Usage
//!
//! ```rust
//! use ratevol_core::surface::{InterpolatedNodeSurface, Surface};
//! use ratevol_core::types::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 182.0 / 365.0).abs() < 1e-12);
//!
//! let surface = InterpolatedNodeSurface::new(
//!     "Alpha",
//!     &[0.0, 1.0],
//!     &[1.0, 5.0],
//!     &[&[0.05, 0.04][..], &[0.045, 0.035][..]],
//! )
//! .unwrap();
//! let alpha = surface.z_value(0.5, 3.0).unwrap();
//! assert!(alpha > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod surface;
pub mod types;
