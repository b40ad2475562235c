#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and unit conversion factors.
pub mod constants;
/// Scalar and vector aliases plus small geometric helpers.
pub mod math;
/// Charge quantities with explicit units.
pub mod units;
/// Positioned point charges.
pub mod particles;
/// Coulomb primitives, bounding boxes and grid samplers.
pub mod fields;
/// Grid export helpers.
pub mod io;
/// Configured sampling passes with input limits.
pub mod simulation;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
