//! Parameter surfaces over (expiry, tenor).
//!
//! This module provides:
//! - [`Surface`]: the lookup trait shared by all surface shapes
//! - [`InterpolatedNodeSurface`]: bilinear node grid with flat extrapolation
//! - [`ConstantSurface`]: single-node surface with the same value everywhere
//! - [`ParameterSurface`]: static dispatch enum wrapping the concrete shapes

pub mod constant;
pub mod interpolated;
pub mod surface_enum;
pub mod traits;

pub use constant::ConstantSurface;
pub use interpolated::InterpolatedNodeSurface;
pub use surface_enum::ParameterSurface;
pub use traits::Surface;
