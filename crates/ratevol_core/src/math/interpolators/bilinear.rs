//! Bilinear 2D interpolation for parameter surfaces.

use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// Stores a grid of values z(x, y) and interpolates at arbitrary (x, y)
/// coordinates within the grid. Besides plain interpolation it exposes the
/// per-node weight vector of the scheme, which is the analytic sensitivity
/// of the interpolated value to each grid node.
///
/// # Grid Layout
///
/// The grid is stored as `zs[i][j] = z(xs[i], ys[j])` where `xs` defines the
/// x-axis coordinates (rows) and `ys` the y-axis coordinates (columns).
/// The flattened node ordering used by [`node_weights`](Self::node_weights)
/// is x-major: node `k = i * ys.len() + j`.
///
/// # Example
///
/// ```
/// use ratevol_core::math::interpolators::BilinearInterpolator;
///
/// let xs: [f64; 2] = [0.0, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = [&[1.0, 2.0][..], &[3.0, 4.0][..]];
///
/// let interp = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();
/// let z = interp.interpolate(0.5, 0.5).unwrap();
/// assert!((z - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearInterpolator<T: Float> {
    /// X-axis coordinates
    xs: Vec<T>,
    /// Y-axis coordinates
    ys: Vec<T>,
    /// Grid values: zs[i][j] = z(xs[i], ys[j])
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// `xs` and `ys` must be sorted and hold at least 2 points each; `zs`
    /// must be an `xs.len() x ys.len()` grid.
    ///
    /// # Errors
    ///
    /// - `InterpolationError::InsufficientData` when an axis has fewer than
    ///   2 points
    /// - `InterpolationError::InvalidInput` when the grid dimensions do not
    ///   match the axis lengths
    pub fn new(xs: &[T], ys: &[T], zs: &[&[T]]) -> Result<Self, InterpolationError> {
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if ys.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: ys.len(),
                need: 2,
            });
        }
        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }
        for (i, row) in zs.iter().enumerate() {
            if row.len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.len(),
                    ys.len()
                )));
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.iter().map(|row| row.to_vec()).collect(),
        })
    }

    /// Interpolate the value at point (x, y).
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates within the grid cell.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` when (x, y) lies outside the grid.
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        self.check_bounds(x, y)?;

        let i = self.find_index(&self.xs, x);
        let j = self.find_index(&self.ys, y);
        let (u, v) = self.cell_coords(i, j, x, y);

        let z00 = self.zs[i][j];
        let z10 = self.zs[i + 1][j];
        let z01 = self.zs[i][j + 1];
        let z11 = self.zs[i + 1][j + 1];

        let one = T::one();
        Ok((one - u) * (one - v) * z00 + u * (one - v) * z10 + (one - u) * v * z01 + u * v * z11)
    }

    /// Per-node weight vector of the scheme at (x, y).
    ///
    /// Entry `k = i * ys.len() + j` is the partial derivative of the
    /// interpolated value with respect to grid node `zs[i][j]`. At most the
    /// four corners of the enclosing cell are non-zero, and the weights sum
    /// to one.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` when (x, y) lies outside the grid.
    pub fn node_weights(&self, x: T, y: T) -> Result<Vec<T>, InterpolationError> {
        self.check_bounds(x, y)?;

        let i = self.find_index(&self.xs, x);
        let j = self.find_index(&self.ys, y);
        let (u, v) = self.cell_coords(i, j, x, y);

        let ny = self.ys.len();
        let one = T::one();
        let mut weights = vec![T::zero(); self.xs.len() * ny];
        weights[i * ny + j] = (one - u) * (one - v);
        weights[(i + 1) * ny + j] = u * (one - v);
        weights[i * ny + j + 1] = (one - u) * v;
        weights[(i + 1) * ny + j + 1] = u * v;
        Ok(weights)
    }

    /// Return the valid interpolation domain for x.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Return the valid interpolation domain for y.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Returns a reference to the x-axis coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-axis coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns a reference to the grid values.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }

    fn check_bounds(&self, x: T, y: T) -> Result<(), InterpolationError> {
        let (x_min, x_max) = self.domain_x();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        let (y_min, y_max) = self.domain_y();
        if y < y_min || y > y_max {
            return Err(InterpolationError::OutOfBounds {
                x: y.to_f64().unwrap_or(f64::NAN),
                min: y_min.to_f64().unwrap_or(f64::NAN),
                max: y_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Find the grid cell index along an axis using binary search.
    #[inline]
    fn find_index(&self, axis: &[T], value: T) -> usize {
        let pos = axis.partition_point(|&a| a <= value);
        if pos == 0 {
            0
        } else if pos >= axis.len() {
            axis.len() - 2
        } else {
            pos - 1
        }
    }

    /// Normalised coordinates of (x, y) within cell (i, j).
    #[inline]
    fn cell_coords(&self, i: usize, j: usize, x: T, y: T) -> (T, T) {
        let u = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let v = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);
        (u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid_3x3() -> BilinearInterpolator<f64> {
        // z = x + y on a 3x3 grid
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 2.0];
        let zs = [
            &[0.0, 1.0, 2.0][..],
            &[1.0, 2.0, 3.0][..],
            &[2.0, 3.0, 4.0][..],
        ];
        BilinearInterpolator::new(&xs, &ys, &zs).unwrap()
    }

    #[test]
    fn test_new_insufficient_axis() {
        let result = BilinearInterpolator::new(&[0.0], &[0.0, 1.0], &[&[0.0, 1.0][..]]);
        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_new_grid_dimension_mismatch() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0];
        let zs = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        assert!(matches!(
            BilinearInterpolator::new(&xs, &ys, &zs),
            Err(InterpolationError::InvalidInput(_))
        ));

        let zs_ragged = [&[0.0, 1.0][..], &[2.0][..], &[4.0, 5.0][..]];
        assert!(matches!(
            BilinearInterpolator::new(&xs, &ys, &zs_ragged),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_interpolate_at_corners() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let zs = [&[1.0, 2.0][..], &[3.0, 4.0][..]];
        let interp = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();

        assert_relative_eq!(interp.interpolate(0.0, 0.0).unwrap(), 1.0);
        assert_relative_eq!(interp.interpolate(1.0, 0.0).unwrap(), 3.0);
        assert_relative_eq!(interp.interpolate(0.0, 1.0).unwrap(), 2.0);
        assert_relative_eq!(interp.interpolate(1.0, 1.0).unwrap(), 4.0);
    }

    #[test]
    fn test_interpolate_recovers_planar_surface() {
        let interp = grid_3x3();
        for (x, y) in [(0.5, 0.5), (1.5, 0.5), (0.5, 1.5), (1.7, 1.3), (2.0, 0.4)] {
            assert_relative_eq!(
                interp.interpolate(x, y).unwrap(),
                x + y,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_interpolate_out_of_bounds() {
        let interp = grid_3x3();
        for (x, y) in [(-0.1, 0.5), (2.1, 0.5), (0.5, -0.1), (0.5, 2.1)] {
            assert!(matches!(
                interp.interpolate(x, y),
                Err(InterpolationError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_node_weights_sum_to_one() {
        let interp = grid_3x3();
        for (x, y) in [(0.0, 0.0), (0.5, 0.5), (1.5, 1.9), (2.0, 2.0)] {
            let weights = interp.node_weights(x, y).unwrap();
            assert_eq!(weights.len(), 9);
            let total: f64 = weights.iter().sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_node_weights_at_node_are_selective() {
        let interp = grid_3x3();
        // At grid node (1, 1), flattened index 1 * 3 + 1 = 4
        let weights = interp.node_weights(1.0, 1.0).unwrap();
        for (k, w) in weights.iter().enumerate() {
            if k == 4 {
                assert_relative_eq!(*w, 1.0);
            } else {
                assert_relative_eq!(*w, 0.0);
            }
        }
    }

    #[test]
    fn test_node_weights_reproduce_interpolation() {
        let interp = grid_3x3();
        let flat: Vec<f64> = interp.zs().iter().flatten().copied().collect();
        for (x, y) in [(0.3, 0.7), (1.2, 0.1), (1.9, 1.9)] {
            let weights = interp.node_weights(x, y).unwrap();
            let dot: f64 = weights.iter().zip(&flat).map(|(w, z)| w * z).sum();
            assert_relative_eq!(dot, interp.interpolate(x, y).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_node_weights_out_of_bounds() {
        let interp = grid_3x3();
        assert!(matches!(
            interp.node_weights(3.0, 0.5),
            Err(InterpolationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_domain_accessors() {
        let interp = grid_3x3();
        assert_eq!(interp.domain_x(), (0.0, 2.0));
        assert_eq!(interp.domain_y(), (0.0, 2.0));
        assert_eq!(interp.xs().len(), 3);
        assert_eq!(interp.ys().len(), 3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_weights_nonnegative_and_normalised(
                x in 0.0f64..2.0,
                y in 0.0f64..2.0,
            ) {
                let interp = grid_3x3();
                let weights = interp.node_weights(x, y).unwrap();
                let mut total = 0.0;
                for w in &weights {
                    prop_assert!(*w >= 0.0);
                    total += w;
                }
                prop_assert!((total - 1.0).abs() < 1e-12);
            }

            #[test]
            fn prop_interpolation_within_node_range(
                x in 0.0f64..2.0,
                y in 0.0f64..2.0,
            ) {
                let interp = grid_3x3();
                let z = interp.interpolate(x, y).unwrap();
                prop_assert!((0.0..=4.0).contains(&z));
            }
        }
    }
}
