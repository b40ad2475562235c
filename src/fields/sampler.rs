//! Grid sampling of superposed point-charge fields.
//!
//! The walk visits rows in increasing y and, within a row, columns in
//! increasing x. Both axes over-scan the box by one spacing so the far edge is
//! always covered. Exporters rely on this row-major order.

use crate::math::{R2, Scalar};
use crate::particles::Particle;

use super::bounds::{is_valid_spacing, BoundingBox};
use super::coulomb::{field_contribution, potential_contribution};

/// Scalar quantity evaluated at each grid node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldQuantity {
    /// Scalar sum of signed radial field strengths (V/m).
    ElectricField,
    /// Electrostatic potential (V).
    Potential,
}

impl FieldQuantity {
    /// Contribution of a single particle at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn contribution(self, particle: &Particle, x: Scalar, y: Scalar) -> Scalar {
        match self {
            Self::ElectricField => field_contribution(particle, x, y),
            Self::Potential => potential_contribution(particle, x, y),
        }
    }

    /// Superposed value at `(x, y)`; zero for an empty particle set.
    #[must_use]
    pub fn evaluate(self, particles: &[Particle], x: Scalar, y: Scalar) -> Scalar {
        particles
            .iter()
            .fold(0.0, |total, p| total + self.contribution(p, x, y))
    }

    const fn label(self) -> &'static str {
        match self {
            Self::ElectricField => "electric field",
            Self::Potential => "voltage",
        }
    }
}

/// One evaluated grid node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    /// Node x (m).
    pub x: Scalar,
    /// Node y (m).
    pub y: Scalar,
    /// Field strength or potential at the node.
    pub value: Scalar,
}

impl SampledPoint {
    /// Node position.
    #[must_use]
    pub fn position(&self) -> R2 {
        R2::new(self.x, self.y)
    }
}

/// Samples `quantity` over `bounds` (derived from `particles` when `None`).
///
/// Returns an empty grid when `spacing` is not a positive finite number. With
/// `debug` set, each node is also traced through the `log` facade at debug level.
#[must_use]
pub fn sample_grid(
    particles: &[Particle],
    spacing: Scalar,
    bounds: Option<&BoundingBox>,
    quantity: FieldQuantity,
    debug: bool,
) -> Vec<SampledPoint> {
    if !is_valid_spacing(spacing) {
        log::warn!("refusing to sample grid with spacing {spacing}");
        return Vec::new();
    }
    let bounds = bounds
        .copied()
        .unwrap_or_else(|| BoundingBox::derive(particles));
    let columns: Vec<Scalar> = bounds.x_nodes(spacing).collect();
    log::trace!(
        "sampling {} over {:?} with spacing {spacing} ({} columns)",
        quantity.label(),
        bounds,
        columns.len()
    );
    walk_rows(particles, &bounds, spacing, &columns, quantity, debug)
}

#[cfg(not(feature = "rayon"))]
fn walk_rows(
    particles: &[Particle],
    bounds: &BoundingBox,
    spacing: Scalar,
    columns: &[Scalar],
    quantity: FieldQuantity,
    debug: bool,
) -> Vec<SampledPoint> {
    bounds
        .y_nodes(spacing)
        .flat_map(move |y| {
            columns
                .iter()
                .map(move |&x| sample_node(particles, x, y, quantity, debug))
        })
        .collect()
}

// Rows are independent; rayon's ordered collect keeps the row-major layout.
#[cfg(feature = "rayon")]
fn walk_rows(
    particles: &[Particle],
    bounds: &BoundingBox,
    spacing: Scalar,
    columns: &[Scalar],
    quantity: FieldQuantity,
    debug: bool,
) -> Vec<SampledPoint> {
    use rayon::prelude::*;

    let rows: Vec<Scalar> = bounds.y_nodes(spacing).collect();
    rows.par_iter()
        .flat_map_iter(move |&y| {
            columns
                .iter()
                .map(move |&x| sample_node(particles, x, y, quantity, debug))
        })
        .collect()
}

fn sample_node(
    particles: &[Particle],
    x: Scalar,
    y: Scalar,
    quantity: FieldQuantity,
    debug: bool,
) -> SampledPoint {
    let value = quantity.evaluate(particles, x, y);
    if debug {
        log::debug!("At {x}, {y} its {} is {value}", quantity.label());
    }
    SampledPoint { x, y, value }
}

/// Electric field (scalar-sum convention) at every node, in row-major order.
#[must_use]
pub fn sample_field(
    particles: &[Particle],
    spacing: Scalar,
    bounds: Option<&BoundingBox>,
    debug: bool,
) -> Vec<SampledPoint> {
    sample_grid(particles, spacing, bounds, FieldQuantity::ElectricField, debug)
}

/// Potential values at every node, in the same row-major order as [`sample_field`].
#[must_use]
pub fn sample_potential(
    particles: &[Particle],
    spacing: Scalar,
    bounds: Option<&BoundingBox>,
    debug: bool,
) -> Vec<Scalar> {
    sample_grid(particles, spacing, bounds, FieldQuantity::Potential, debug)
        .into_iter()
        .map(|s| s.value)
        .collect()
}
