//! Mathematical primitives for surface construction.

pub mod interpolators;
