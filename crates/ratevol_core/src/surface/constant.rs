//! Single-node constant surface.

use super::traits::Surface;
use crate::types::InterpolationError;
use num_traits::Float;

/// Surface taking the same value everywhere.
///
/// Parameterised by a single node, so its sensitivity vector is `[1]` at
/// every query point. Commonly used to hold a fixed SABR beta.
///
/// # Example
///
/// ```
/// use ratevol_core::surface::{ConstantSurface, Surface};
///
/// let beta = ConstantSurface::new("Beta", 0.5);
/// assert_eq!(beta.parameter_count(), 1);
/// assert_eq!(beta.z_value(2.0, 10.0).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantSurface<T: Float> {
    name: String,
    value: T,
}

impl<T: Float> ConstantSurface<T> {
    /// Construct a constant surface from a name and a value.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the node value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Float> Surface<T> for ConstantSurface<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn z_value(&self, _x: T, _y: T) -> Result<T, InterpolationError> {
        Ok(self.value)
    }

    fn z_value_node_sensitivity(&self, _x: T, _y: T) -> Result<Vec<T>, InterpolationError> {
        Ok(vec![T::one()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_value_everywhere() {
        let s = ConstantSurface::new("Beta", 0.5_f64);
        assert_eq!(s.z_value(0.0, 0.0).unwrap(), 0.5);
        assert_eq!(s.z_value(-3.0, 100.0).unwrap(), 0.5);
        assert_eq!(s.name(), "Beta");
    }

    #[test]
    fn test_node_sensitivity_is_unit() {
        let s = ConstantSurface::new("Beta", 0.5_f64);
        assert_eq!(s.parameter_count(), 1);
        assert_eq!(s.z_value_node_sensitivity(1.0, 2.0).unwrap(), vec![1.0]);
    }
}
