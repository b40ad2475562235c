//! Electric charge with an explicit unit.
//!
//! Charges are always stored in coulombs; nanocoulombs exist only as a
//! constructor convenience.

use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;

use thiserror::Error;

use crate::constants::NANOCOULOMB;
use crate::math::Scalar;

/// Scalar electric charge in coulombs (C).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Charge(Scalar);

impl Charge {
    /// Zero charge.
    pub const ZERO: Self = Self(0.0);

    /// Creates a charge from a value in coulombs.
    #[must_use]
    pub const fn from_coulombs(coulombs: Scalar) -> Self {
        Self(coulombs)
    }

    /// Creates a charge from a value in nanocoulombs.
    #[must_use]
    pub fn from_nanocoulombs(nanocoulombs: Scalar) -> Self {
        Self(nanocoulombs * NANOCOULOMB)
    }

    /// Creates a charge of `base × 10^exponent` coulombs.
    #[must_use]
    pub fn from_scientific(base: Scalar, exponent: i32) -> Self {
        Self(base * Scalar::powi(10.0, exponent))
    }

    /// Charge in coulombs.
    #[must_use]
    pub const fn value(self) -> Scalar {
        self.0
    }

    /// Charge expressed in nanocoulombs.
    #[must_use]
    pub fn nanocoulombs(self) -> Scalar {
        self.0 / NANOCOULOMB
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} C", self.0)
    }
}

impl Neg for Charge {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Charge {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Errors raised while parsing a charge literal such as `"5 nC"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChargeError {
    /// The input was empty or whitespace.
    #[error("empty charge literal")]
    Empty,
    /// The numeric part could not be parsed.
    #[error("invalid charge magnitude: {0:?}")]
    InvalidNumber(String),
    /// The unit suffix is not `C` or `nC`.
    #[error("unknown charge unit: {0:?} (expected C or nC)")]
    UnknownUnit(String),
}

impl FromStr for Charge {
    type Err = ParseChargeError;

    /// Parses `"<number>"`, `"<number> C"` or `"<number> nC"`; the unit is
    /// case-insensitive and a bare number is taken as coulombs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseChargeError::Empty);
        }
        let number_len = trimmed
            .trim_end_matches(|c: char| c.is_ascii_alphabetic())
            .len();
        let (number, unit) = trimmed.split_at(number_len);
        let number = number.trim();
        if number.is_empty() {
            return Err(ParseChargeError::InvalidNumber(trimmed.to_owned()));
        }
        let scale = match unit.to_ascii_lowercase().as_str() {
            "" | "c" => 1.0,
            "nc" => NANOCOULOMB,
            _ => return Err(ParseChargeError::UnknownUnit(unit.to_owned())),
        };
        let magnitude: Scalar = number
            .parse()
            .map_err(|_| ParseChargeError::InvalidNumber(number.to_owned()))?;
        Ok(Self(magnitude * scale))
    }
}
