//! Bilinear node surface with flat extrapolation.

use super::traits::Surface;
use crate::math::interpolators::BilinearInterpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Named bilinear node grid over (expiry, tenor).
///
/// Queries outside the grid are clamped to the nearest boundary, so the
/// surface extrapolates flat in both directions. Node sensitivities are the
/// bilinear weight vector evaluated at the clamped point, flattened x-major
/// (`node k = i * ys.len() + j`).
///
/// # Example
///
/// ```
/// use ratevol_core::surface::{InterpolatedNodeSurface, Surface};
///
/// let surface = InterpolatedNodeSurface::new(
///     "Alpha",
///     &[0.0, 1.0],
///     &[1.0, 5.0],
///     &[&[0.05, 0.04][..], &[0.045, 0.035][..]],
/// )
/// .unwrap();
///
/// assert_eq!(surface.parameter_count(), 4);
/// let value = surface.z_value(0.5, 3.0).unwrap();
/// assert!(value > 0.035 && value < 0.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedNodeSurface<T: Float> {
    name: String,
    interpolator: BilinearInterpolator<T>,
}

impl<T: Float> InterpolatedNodeSurface<T> {
    /// Construct a surface from a name and grid data.
    ///
    /// Axes must be sorted with at least 2 points each; `zs` must be an
    /// `xs.len() x ys.len()` grid.
    ///
    /// # Errors
    ///
    /// Propagates the interpolator's validation errors
    /// (`InsufficientData`, `InvalidInput`).
    pub fn new(
        name: impl Into<String>,
        xs: &[T],
        ys: &[T],
        zs: &[&[T]],
    ) -> Result<Self, InterpolationError> {
        Ok(Self {
            name: name.into(),
            interpolator: BilinearInterpolator::new(xs, ys, zs)?,
        })
    }

    /// Returns the x-axis node coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.interpolator.xs()
    }

    /// Returns the y-axis node coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        self.interpolator.ys()
    }

    /// Clamp a query point into the grid domain (flat extrapolation).
    fn clamp(&self, x: T, y: T) -> (T, T) {
        let (x_min, x_max) = self.interpolator.domain_x();
        let (y_min, y_max) = self.interpolator.domain_y();
        (x.max(x_min).min(x_max), y.max(y_min).min(y_max))
    }
}

impl<T: Float> Surface<T> for InterpolatedNodeSurface<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_count(&self) -> usize {
        self.interpolator.xs().len() * self.interpolator.ys().len()
    }

    fn z_value(&self, x: T, y: T) -> Result<T, InterpolationError> {
        let (cx, cy) = self.clamp(x, y);
        self.interpolator.interpolate(cx, cy)
    }

    fn z_value_node_sensitivity(&self, x: T, y: T) -> Result<Vec<T>, InterpolationError> {
        let (cx, cy) = self.clamp(x, y);
        self.interpolator.node_weights(cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn surface() -> InterpolatedNodeSurface<f64> {
        InterpolatedNodeSurface::new(
            "Alpha",
            &[0.0, 1.0, 5.0],
            &[1.0, 10.0],
            &[
                &[0.05, 0.04][..],
                &[0.045, 0.038][..],
                &[0.04, 0.035][..],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_name_and_parameter_count() {
        let s = surface();
        assert_eq!(s.name(), "Alpha");
        assert_eq!(s.parameter_count(), 6);
    }

    #[test]
    fn test_z_value_at_nodes() {
        let s = surface();
        assert_relative_eq!(s.z_value(0.0, 1.0).unwrap(), 0.05);
        assert_relative_eq!(s.z_value(1.0, 10.0).unwrap(), 0.038);
        assert_relative_eq!(s.z_value(5.0, 10.0).unwrap(), 0.035);
    }

    #[test]
    fn test_flat_extrapolation_beyond_grid() {
        let s = surface();
        // Past the far corner in both directions: clamps to the corner node
        assert_relative_eq!(s.z_value(10.0, 30.0).unwrap(), 0.035);
        // Before the near corner
        assert_relative_eq!(s.z_value(-1.0, 0.5).unwrap(), 0.05);
        // Only x out of range: y still interpolates
        let edge = s.z_value(10.0, 5.5).unwrap();
        let on_grid = s.z_value(5.0, 5.5).unwrap();
        assert_relative_eq!(edge, on_grid);
    }

    #[test]
    fn test_node_sensitivity_length_matches_parameter_count() {
        let s = surface();
        let sens = s.z_value_node_sensitivity(0.5, 5.0).unwrap();
        assert_eq!(sens.len(), s.parameter_count());
    }

    #[test]
    fn test_node_sensitivity_clamped_point() {
        let s = surface();
        // Outside the grid the sensitivity is that of the clamped point,
        // so it concentrates on boundary nodes and still sums to one.
        let sens = s.z_value_node_sensitivity(10.0, 30.0).unwrap();
        let total: f64 = sens.iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_relative_eq!(sens[5], 1.0); // node (5.0, 10.0), index 2*2+1
    }

    #[test]
    fn test_node_sensitivity_reproduces_value() {
        let s = surface();
        let flat = [0.05, 0.04, 0.045, 0.038, 0.04, 0.035];
        for (x, y) in [(0.5, 5.0), (3.0, 2.0), (4.9, 9.9)] {
            let sens = s.z_value_node_sensitivity(x, y).unwrap();
            let dot: f64 = sens.iter().zip(flat).map(|(w, z)| w * z).sum();
            assert_relative_eq!(dot, s.z_value(x, y).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let result = InterpolatedNodeSurface::new("Bad", &[0.0, 1.0], &[0.0, 1.0], &[&[1.0][..]]);
        assert!(result.is_err());
    }
}
