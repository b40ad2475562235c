//! Point-charge field primitives, sampling boxes and grid samplers.

mod bounds;
mod coulomb;
mod sampler;

pub use bounds::BoundingBox;
pub use coulomb::{
    coulomb_force,
    field_contribution,
    net_force_between_fields,
    potential_contribution,
};
pub use sampler::{
    sample_field,
    sample_grid,
    sample_potential,
    FieldQuantity,
    SampledPoint,
};
