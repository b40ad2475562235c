//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors.
pub type R2 = Vector2<Scalar>;

/// Euclidean distance between two points in the plane.
#[inline]
#[must_use]
pub fn distance(a: R2, b: R2) -> Scalar {
    (b - a).norm()
}
