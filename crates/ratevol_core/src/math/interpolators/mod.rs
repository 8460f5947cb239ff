//! Interpolation schemes over gridded data.

pub mod bilinear;

pub use bilinear::BilinearInterpolator;
