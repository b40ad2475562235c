//! I/O helpers for exporting sampled grids.

pub mod grid;

pub use grid::*;
