//! Static dispatch enum over the concrete surface shapes.

use super::constant::ConstantSurface;
use super::interpolated::InterpolatedNodeSurface;
use super::traits::Surface;
use crate::types::InterpolationError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete surface implementations.
///
/// Avoids trait objects while letting SABR parameter sets mix constant and
/// interpolated surfaces per parameter.
///
/// # Example
///
/// ```
/// use ratevol_core::surface::{ParameterSurface, Surface};
///
/// let beta = ParameterSurface::constant("Beta", 0.5_f64);
/// assert_eq!(beta.z_value(1.0, 5.0).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSurface<T: Float> {
    /// Single-node constant surface
    Constant(ConstantSurface<T>),
    /// Bilinear node grid with flat extrapolation
    Interpolated(InterpolatedNodeSurface<T>),
}

impl<T: Float> ParameterSurface<T> {
    /// Create a constant surface variant.
    #[inline]
    pub fn constant(name: impl Into<String>, value: T) -> Self {
        ParameterSurface::Constant(ConstantSurface::new(name, value))
    }

    /// Create an interpolated surface variant from grid data.
    ///
    /// # Errors
    ///
    /// Propagates the interpolator's validation errors.
    pub fn interpolated(
        name: impl Into<String>,
        xs: &[T],
        ys: &[T],
        zs: &[&[T]],
    ) -> Result<Self, InterpolationError> {
        Ok(ParameterSurface::Interpolated(InterpolatedNodeSurface::new(
            name, xs, ys, zs,
        )?))
    }
}

impl<T: Float> Surface<T> for ParameterSurface<T> {
    fn name(&self) -> &str {
        match self {
            ParameterSurface::Constant(s) => s.name(),
            ParameterSurface::Interpolated(s) => s.name(),
        }
    }

    fn parameter_count(&self) -> usize {
        match self {
            ParameterSurface::Constant(s) => s.parameter_count(),
            ParameterSurface::Interpolated(s) => s.parameter_count(),
        }
    }

    fn z_value(&self, x: T, y: T) -> Result<T, InterpolationError> {
        match self {
            ParameterSurface::Constant(s) => s.z_value(x, y),
            ParameterSurface::Interpolated(s) => s.z_value(x, y),
        }
    }

    fn z_value_node_sensitivity(&self, x: T, y: T) -> Result<Vec<T>, InterpolationError> {
        match self {
            ParameterSurface::Constant(s) => s.z_value_node_sensitivity(x, y),
            ParameterSurface::Interpolated(s) => s.z_value_node_sensitivity(x, y),
        }
    }
}

impl<T: Float> From<ConstantSurface<T>> for ParameterSurface<T> {
    fn from(surface: ConstantSurface<T>) -> Self {
        ParameterSurface::Constant(surface)
    }
}

impl<T: Float> From<InterpolatedNodeSurface<T>> for ParameterSurface<T> {
    fn from(surface: InterpolatedNodeSurface<T>) -> Self {
        ParameterSurface::Interpolated(surface)
    }
}
