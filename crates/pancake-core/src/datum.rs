// File: crates/pancake-core/src/datum.rs
// Summary: Record accessors: default x/y projections and fallible coordinate lookup.

use crate::axis::Axis;
use crate::error::{ChartError, Result};

/// Records with built-in x/y fields, used when no accessors are supplied.
pub trait Datum {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Plain point record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl Datum for XY {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

impl Datum for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Datum for [f64; 2] {
    fn x(&self) -> f64 { self[0] }
    fn y(&self) -> f64 { self[1] }
}

impl<T: Datum + ?Sized> Datum for &T {
    fn x(&self) -> f64 { (**self).x() }
    fn y(&self) -> f64 { (**self).y() }
}

/// What an accessor may return: a plain number, or `None` when the record
/// lacks the field.
pub trait Coordinate {
    fn coordinate(self) -> Option<f64>;
}

impl Coordinate for f64 {
    fn coordinate(self) -> Option<f64> { Some(self) }
}

impl Coordinate for f32 {
    fn coordinate(self) -> Option<f64> { Some(self as f64) }
}

impl Coordinate for i32 {
    fn coordinate(self) -> Option<f64> { Some(self as f64) }
}

impl Coordinate for Option<f64> {
    fn coordinate(self) -> Option<f64> { self }
}

/// Project record `index` through the accessor pair.
pub(crate) fn read_point<T, X, Y, CX, CY>(index: usize, datum: &T, x: &X, y: &Y) -> Result<(f64, f64)>
where
    X: Fn(&T) -> CX,
    Y: Fn(&T) -> CY,
    CX: Coordinate,
    CY: Coordinate,
{
    let px = x(datum)
        .coordinate()
        .ok_or(ChartError::MissingCoordinate { index, axis: Axis::X })?;
    let py = y(datum)
        .coordinate()
        .ok_or(ChartError::MissingCoordinate { index, axis: Axis::Y })?;
    Ok((px, py))
}
