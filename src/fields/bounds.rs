use crate::math::{R2, Scalar};
use crate::particles::Particle;

/// Axis-aligned rectangle over which a grid is sampled.
///
/// A derived box is always seeded at the origin, so it covers `(0, 0)` even
/// when no particle sits there.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// Smallest x (m).
    pub xmin: Scalar,
    /// Largest x (m).
    pub xmax: Scalar,
    /// Smallest y (m).
    pub ymin: Scalar,
    /// Largest y (m).
    pub ymax: Scalar,
}

impl BoundingBox {
    /// Box with explicit bounds. Inverted bounds are accepted as given and simply
    /// produce a short (or empty) grid walk.
    #[must_use]
    pub const fn new(xmin: Scalar, xmax: Scalar, ymin: Scalar, ymax: Scalar) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Smallest box enclosing the origin and every particle.
    #[must_use]
    pub fn derive(particles: &[Particle]) -> Self {
        particles.iter().fold(Self::default(), |b, p| Self {
            xmin: b.xmin.min(p.x()),
            xmax: b.xmax.max(p.x()),
            ymin: b.ymin.min(p.y()),
            ymax: b.ymax.max(p.y()),
        })
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> Scalar {
        self.xmax - self.xmin
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> Scalar {
        self.ymax - self.ymin
    }

    /// True if `point` lies inside the box or on its edge.
    #[must_use]
    pub fn contains(&self, point: R2) -> bool {
        (self.xmin..=self.xmax).contains(&point.x) && (self.ymin..=self.ymax).contains(&point.y)
    }

    /// Column coordinates visited by a grid walk: `xmin + i·spacing` up to and
    /// including `xmax + spacing`.
    pub fn x_nodes(&self, spacing: Scalar) -> impl Iterator<Item = Scalar> + Clone {
        axis_nodes(self.xmin, self.xmax, spacing)
    }

    /// Row coordinates visited by a grid walk, see [`Self::x_nodes`].
    pub fn y_nodes(&self, spacing: Scalar) -> impl Iterator<Item = Scalar> + Clone {
        axis_nodes(self.ymin, self.ymax, spacing)
    }

    /// Number of `(columns, rows)` in the grid walk, or `None` when `spacing`
    /// is not a positive finite number.
    #[must_use]
    pub fn node_counts(&self, spacing: Scalar) -> Option<(usize, usize)> {
        if !is_valid_spacing(spacing) {
            return None;
        }
        Some((self.x_nodes(spacing).count(), self.y_nodes(spacing).count()))
    }
}

pub(crate) fn is_valid_spacing(spacing: Scalar) -> bool {
    spacing > 0.0 && spacing.is_finite()
}

// Coordinates come from the index rather than repeated addition so every node
// in a row shares a bit-identical y. Non-finite bounds yield no nodes, and the
// walk stops at the first node that overflows. When `spacing` is below the
// float resolution at `min`, neighbouring indices round to the same value;
// repeats are dropped so coordinates stay strictly increasing and rows never
// merge, at the cost of fewer nodes than `width / spacing` suggests.
fn axis_nodes(min: Scalar, max: Scalar, spacing: Scalar) -> impl Iterator<Item = Scalar> + Clone {
    let walkable = is_valid_spacing(spacing) && min.is_finite() && max.is_finite();
    let limit = max + spacing;
    let mut last = Scalar::NEG_INFINITY;
    (0_usize..)
        .map(move |i| min + i as Scalar * spacing)
        .take_while(move |v| walkable && v.is_finite() && *v <= limit)
        .filter(move |v| {
            let fresh = *v > last;
            last = *v;
            fresh
        })
}
