//! Fixed point charges positioned in the plane.

use std::fmt;

use crate::math::{R2, Scalar};
use crate::units::Charge;

/// Largest particle set accepted by [`crate::simulation::SamplingConfig`] by default.
pub const MAX_PARTICLES: usize = 25;

/// Point source of charge at a fixed 2D position (meters).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: R2,
    charge: Charge,
}

impl Particle {
    /// Creates a particle at `(x, y)` carrying `charge`.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, charge: Charge) -> Self {
        Self {
            position: R2::new(x, y),
            charge,
        }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.position.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.position.y
    }

    /// Position vector.
    #[must_use]
    pub const fn position(&self) -> R2 {
        self.position
    }

    /// Charge carried by the particle.
    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle's X: {} Particle's Y: {} Particle's Charge: {}",
            self.x(),
            self.y(),
            self.charge.value()
        )
    }
}
