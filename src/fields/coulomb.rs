use crate::constants::COULOMB_CONSTANT;
use crate::math::{distance, R2, Scalar};
use crate::particles::Particle;
use crate::units::Charge;

/// Signed radial field strength `k q / r²` (V/m) at `(x, y)` due to `particle`.
///
/// Contributions from several particles are summed as scalars, not as vectors.
/// At the particle's own position the result is ±∞ (NaN for a zero charge).
#[inline]
#[must_use]
pub fn field_contribution(particle: &Particle, x: Scalar, y: Scalar) -> Scalar {
    let r = distance(particle.position(), R2::new(x, y));
    COULOMB_CONSTANT * particle.charge().value() / (r * r)
}

/// Electric potential `k q / r` (V) at `(x, y)` due to `particle`.
///
/// Singular at the particle's own position, like [`field_contribution`].
#[inline]
#[must_use]
pub fn potential_contribution(particle: &Particle, x: Scalar, y: Scalar) -> Scalar {
    let r = distance(particle.position(), R2::new(x, y));
    COULOMB_CONSTANT * particle.charge().value() / r
}

/// Coulomb force `k q₁ q₂ / d²` in newtons between two charges `distance` meters apart.
///
/// Positive values are repulsive.
#[must_use]
pub fn coulomb_force(q1: Charge, q2: Charge, distance: Scalar) -> Scalar {
    COULOMB_CONSTANT * q1.value() * q2.value() / (distance * distance)
}

/// Net force on a 1 C test charge sitting between two source charges on a line,
/// `d1` meters from `q1` and `d2` meters from `q2`.
#[must_use]
pub fn net_force_between_fields(q1: Charge, d1: Scalar, q2: Charge, d2: Scalar) -> Scalar {
    let unit = Charge::from_coulombs(1.0);
    coulomb_force(q1, unit, d1) - coulomb_force(q2, unit, d2)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const Q: Scalar = 2.0e-9;

    fn origin_charge() -> Particle {
        Particle::new(0.0, 0.0, Charge::from_coulombs(Q))
    }

    #[test]
    fn potential_falls_off_as_inverse_distance() {
        let p = origin_charge();
        for d in [1.0, 2.0, 5.0] {
            let v = potential_contribution(&p, d, 0.0);
            assert_relative_eq!(v, COULOMB_CONSTANT * Q / d, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn field_falls_off_as_inverse_square() {
        let p = origin_charge();
        for d in [1.0, 2.0, 5.0] {
            let e = field_contribution(&p, 0.0, d);
            assert_relative_eq!(e, COULOMB_CONSTANT * Q / (d * d), max_relative = 1.0e-12);
        }
    }

    #[test]
    fn contributions_follow_charge_sign() {
        let p = Particle::new(1.0, 1.0, Charge::from_nanocoulombs(-4.0));
        assert!(field_contribution(&p, 2.0, 3.0) < 0.0);
        assert!(potential_contribution(&p, 2.0, 3.0) < 0.0);
    }

    #[test]
    fn coincident_point_is_infinite_not_a_panic() {
        let p = origin_charge();
        assert_eq!(field_contribution(&p, 0.0, 0.0), Scalar::INFINITY);
        assert_eq!(potential_contribution(&p, 0.0, 0.0), Scalar::INFINITY);
        let neutral = Particle::new(0.0, 0.0, Charge::ZERO);
        assert!(field_contribution(&neutral, 0.0, 0.0).is_nan());
    }

    #[test]
    fn coulomb_force_matches_textbook_value() {
        let q = Charge::from_scientific(1.0, -6);
        let f = coulomb_force(q, q, 1.0);
        assert_relative_eq!(f, 8.99e-3, max_relative = 1.0e-12);
        assert!(coulomb_force(q, -q, 1.0) < 0.0);
    }

    #[test]
    fn net_force_is_difference_of_single_fields() {
        let q1 = Charge::from_scientific(3.0, -9);
        let q2 = Charge::from_scientific(1.0, -9);
        let net = net_force_between_fields(q1, 1.0, q2, 2.0);
        let expected = COULOMB_CONSTANT * 3.0e-9 - COULOMB_CONSTANT * 1.0e-9 / 4.0;
        assert_relative_eq!(net, expected, max_relative = 1.0e-12);
    }
}
