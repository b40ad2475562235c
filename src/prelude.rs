//! Convenience re-exports for sampling and exporting charge fields.

pub use crate::constants::*;
pub use crate::errors::ChargeGridError;
pub use crate::fields::{
    coulomb_force,
    field_contribution,
    net_force_between_fields,
    potential_contribution,
    sample_field,
    sample_grid,
    sample_potential,
    BoundingBox,
    FieldQuantity,
    SampledPoint,
};
pub use crate::io::{write_grid_csv, write_rows, write_value_rows, DEFAULT_OUTPUT_FILE};
pub use crate::math::{distance, Scalar, R2};
pub use crate::particles::{Particle, MAX_PARTICLES};
pub use crate::simulation::{
    EquipotentialMapper,
    GridSampler,
    SampledGrid,
    SamplingConfig,
    SamplingError,
};
pub use crate::units::{Charge, ParseChargeError};
