//! Configured sampling passes over a particle set.

use std::io::{self, Write};

use crate::fields::{sample_grid, BoundingBox, FieldQuantity, SampledPoint};
use crate::io::write_rows;
use crate::math::Scalar;
use crate::particles::{Particle, MAX_PARTICLES};

/// Default cap on the number of grid nodes a single pass may evaluate.
pub const DEFAULT_MAX_NODES: usize = 1 << 20;

/// Parameters for one sampling pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Human-readable identifier.
    pub name: String,
    /// Quantity evaluated at each node.
    pub quantity: FieldQuantity,
    /// Grid spacing in meters. Non-positive values produce an empty grid.
    pub spacing: Scalar,
    /// Explicit sampling box; derived from the particles when `None`.
    pub bounds: Option<BoundingBox>,
    /// Trace every node evaluation through `log`.
    pub debug: bool,
    /// Largest accepted particle count.
    pub max_particles: usize,
    /// Largest accepted node count, `None` for no limit.
    pub max_nodes: Option<usize>,
}

impl SamplingConfig {
    /// Creates an electric-field configuration.
    #[must_use]
    pub fn electric_field(name: impl Into<String>, spacing: Scalar) -> Self {
        Self::new(name, FieldQuantity::ElectricField, spacing)
    }

    /// Creates a potential configuration.
    #[must_use]
    pub fn potential(name: impl Into<String>, spacing: Scalar) -> Self {
        Self::new(name, FieldQuantity::Potential, spacing)
    }

    fn new(name: impl Into<String>, quantity: FieldQuantity, spacing: Scalar) -> Self {
        Self {
            name: name.into(),
            quantity,
            spacing,
            bounds: None,
            debug: false,
            max_particles: MAX_PARTICLES,
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }

    /// Samples over `bounds` instead of the derived box.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Enables or disables per-node tracing.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Overrides the particle limit.
    #[must_use]
    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    /// Overrides the node limit.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

/// Errors raised before a sampling pass starts.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    /// More particles than the configuration allows.
    #[error("too many particles: {count} (limit {max})")]
    TooManyParticles {
        /// Supplied particle count.
        count: usize,
        /// Configured limit.
        max: usize,
    },
    /// The grid would exceed the configured node limit.
    #[error("grid too large: at least {nodes} nodes (limit {max})")]
    GridTooLarge {
        /// Node count, counted per axis up to one past the limit.
        nodes: u64,
        /// Configured limit.
        max: usize,
    },
    /// Raised when the configuration is internally inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Row-major grid produced by a sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledGrid {
    quantity: FieldQuantity,
    points: Vec<SampledPoint>,
    columns: usize,
    rows: usize,
}

impl SampledGrid {
    fn new(quantity: FieldQuantity, points: Vec<SampledPoint>) -> Self {
        let mut runs = points.chunk_by(|a, b| a.y == b.y);
        let columns = runs.next().map_or(0, <[SampledPoint]>::len);
        let rows = if columns == 0 { 0 } else { 1 + runs.count() };
        Self {
            quantity,
            points,
            columns,
            rows,
        }
    }

    /// Quantity stored in the grid.
    #[must_use]
    pub const fn quantity(&self) -> FieldQuantity {
        self.quantity
    }

    /// Nodes per row.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total sampled nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing was sampled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in row-major order.
    #[must_use]
    pub fn points(&self) -> &[SampledPoint] {
        &self.points
    }

    /// Consumes the grid and returns its samples.
    #[must_use]
    pub fn into_points(self) -> Vec<SampledPoint> {
        self.points
    }

    /// Values without coordinates, row-major.
    #[must_use]
    pub fn values(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Value at `(column, row)`, counting from the top-left node.
    #[must_use]
    pub fn value_at(&self, column: usize, row: usize) -> Option<Scalar> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.points.get(row * self.columns + column).map(|p| p.value)
    }

    /// Writes the grid as row-grouped CSV.
    pub fn write_csv<W: Write>(&self, sink: W) -> io::Result<()> {
        write_rows(&self.points, sink)
    }
}

/// Trait for engines that turn a particle set into a sampled grid.
pub trait GridSampler {
    /// Runs one sampling pass over `particles`.
    fn run(&self, particles: &[Particle]) -> Result<SampledGrid, SamplingError>;
}

/// Sampler applying a [`SamplingConfig`] with particle and node limits.
#[derive(Debug, Clone)]
pub struct EquipotentialMapper {
    config: SamplingConfig,
}

impl EquipotentialMapper {
    /// Creates a mapper for `config`.
    #[must_use]
    pub const fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl GridSampler for EquipotentialMapper {
    fn run(&self, particles: &[Particle]) -> Result<SampledGrid, SamplingError> {
        let config = &self.config;
        if !config.spacing.is_finite() {
            return Err(SamplingError::InvalidConfig(format!(
                "spacing must be finite, got {}",
                config.spacing
            )));
        }
        if particles.len() > config.max_particles {
            return Err(SamplingError::TooManyParticles {
                count: particles.len(),
                max: config.max_particles,
            });
        }
        let bounds = config
            .bounds
            .unwrap_or_else(|| BoundingBox::derive(particles));
        if let Some(max) = config.max_nodes {
            let nodes = bounded_node_count(&bounds, config.spacing, max);
            if nodes > max as u64 {
                return Err(SamplingError::GridTooLarge { nodes, max });
            }
        }

        log::info!(
            "{}: sampling {:?} for {} particles at spacing {}",
            config.name,
            config.quantity,
            particles.len(),
            config.spacing
        );
        let points = sample_grid(
            particles,
            config.spacing,
            Some(&bounds),
            config.quantity,
            config.debug,
        );
        if points.is_empty() {
            log::warn!("{}: sampling produced an empty grid", config.name);
        }
        Ok(SampledGrid::new(config.quantity, points))
    }
}

// Exact walk size as long as it stays within `max`; each axis stops counting
// at `max + 1` so oversized grids are rejected without walking them.
fn bounded_node_count(bounds: &BoundingBox, spacing: Scalar, max: usize) -> u64 {
    let cap = max.saturating_add(1);
    let columns = bounds.x_nodes(spacing).take(cap).count() as u64;
    if columns == 0 {
        return 0;
    }
    let rows = bounds.y_nodes(spacing).take(cap).count() as u64;
    columns.saturating_mul(rows)
}
