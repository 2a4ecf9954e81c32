// File: crates/pancake-core/src/error.rs
// Summary: Error type shared by context derivation and data-driven components.

use thiserror::Error;

use crate::axis::Axis;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Bounds cannot be derived from zero records.
    #[error("cannot derive chart bounds from an empty record sequence")]
    EmptyData,
    /// Every record shares the same coordinate on `axis`, so a linear scale
    /// over it would have an infinite slope.
    #[error("{axis} domain collapses to a single value ({value})")]
    DegenerateDomain { axis: Axis, value: f64 },
    /// An accessor could not produce a coordinate for record `index`.
    #[error("record {index} has no {axis} coordinate")]
    MissingCoordinate { index: usize, axis: Axis },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
