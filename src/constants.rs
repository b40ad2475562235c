//! Physical constants and unit conversion factors.
//!
//! ## Accuracy
//!
//! [`COULOMB_CONSTANT`] is the three-significant-figure value used for classroom
//! electrostatics (8.99 × 10⁹ N·m²/C²). It differs from the CODATA-derived
//! `1/(4πε₀)` in the fourth digit; [`exact_coulomb_constant`] is provided for
//! comparison.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::Scalar;

/// Coulomb's constant _k_ in N·m²/C², rounded to 8.99 × 10⁹.
pub const COULOMB_CONSTANT: Scalar = 8.99e9;
/// Coulombs per nanocoulomb.
pub const NANOCOULOMB: Scalar = 1.0e-9;
/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Elementary charge _e_ in coulombs (C).
/// Exact value by 2019 SI definition: 1.602176634 × 10⁻¹⁹ C.
pub const ELEMENTARY_CHARGE: Scalar = 1.602_176_634e-19;

/// Returns `1/(4πε₀)` computed from [`VACUUM_PERMITTIVITY`].
#[inline]
#[must_use]
pub fn exact_coulomb_constant() -> Scalar {
    1.0 / (4.0 * PI * VACUUM_PERMITTIVITY)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rounded_constant_is_close_to_exact() {
        assert_relative_eq!(COULOMB_CONSTANT, exact_coulomb_constant(), max_relative = 1.0e-3);
    }
}
