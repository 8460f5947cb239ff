//! Surface lookup trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// A named parameter surface over (x, y) coordinates.
///
/// Implementations expose both the interpolated value and the analytic
/// sensitivity of that value to each underlying node. The node ordering is
/// stable per surface and is the ordering used by every sensitivity vector
/// the surface produces.
pub trait Surface<T: Float> {
    /// Stable identifier for the surface, used as the sensitivity key.
    fn name(&self) -> &str;

    /// Number of nodes parameterising the surface.
    ///
    /// Every vector returned by
    /// [`z_value_node_sensitivity`](Self::z_value_node_sensitivity) has
    /// exactly this length.
    fn parameter_count(&self) -> usize;

    /// Surface value at (x, y).
    fn z_value(&self, x: T, y: T) -> Result<T, InterpolationError>;

    /// Sensitivity of the surface value at (x, y) to each node, in the
    /// surface's node order.
    fn z_value_node_sensitivity(&self, x: T, y: T) -> Result<Vec<T>, InterpolationError>;
}
