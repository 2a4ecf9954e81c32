// File: crates/pancake-core/src/context.rs
// Summary: Render context: domain bounds plus the x/y percentage scales shared by one render.

use tracing::debug;

use crate::axis::Axis;
use crate::datum::{read_point, Coordinate, Datum};
use crate::error::{ChartError, Result};
use crate::scale::Linear;

/// Bounds and scales for one chart render.
///
/// Fields are private: once built, a context is only read. Components take
/// it by shared reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    scale_x: Linear,
    scale_y: Linear,
}

impl RenderContext {
    /// Standard layout: x maps onto `0..100` percent, y onto `100..0` so
    /// that larger values sit higher.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self::with_scales(
            min_x,
            max_x,
            min_y,
            max_y,
            Linear::percent((min_x, max_x)),
            Linear::percent_flipped((min_y, max_y)),
        )
    }

    pub fn with_scales(min_x: f64, max_x: f64, min_y: f64, max_y: f64, scale_x: Linear, scale_y: Linear) -> Self {
        Self { min_x, max_x, min_y, max_y, scale_x, scale_y }
    }

    /// Derive bounds from records with built-in coordinates.
    pub fn from_records<T: Datum>(records: &[T]) -> Result<Self> {
        Self::from_records_by(records, T::x, T::y)
    }

    /// Derive bounds by scanning every record through the accessors.
    ///
    /// Fails on an empty slice, on a missing coordinate, and when either
    /// axis collapses to a single value.
    pub fn from_records_by<T, X, Y, CX, CY>(records: &[T], x: X, y: Y) -> Result<Self>
    where
        X: Fn(&T) -> CX,
        Y: Fn(&T) -> CY,
        CX: Coordinate,
        CY: Coordinate,
    {
        if records.is_empty() {
            return Err(ChartError::EmptyData);
        }

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (i, rec) in records.iter().enumerate() {
            let (px, py) = read_point(i, rec, &x, &y)?;
            min_x = min_x.min(px);
            max_x = max_x.max(px);
            min_y = min_y.min(py);
            max_y = max_y.max(py);
        }

        if min_x == max_x {
            return Err(ChartError::DegenerateDomain { axis: Axis::X, value: min_x });
        }
        if min_y == max_y {
            return Err(ChartError::DegenerateDomain { axis: Axis::Y, value: min_y });
        }

        debug!(records = records.len(), min_x, max_x, min_y, max_y, "derived render context");
        Ok(Self::new(min_x, max_x, min_y, max_y))
    }

    pub fn min_x(&self) -> f64 { self.min_x }
    pub fn max_x(&self) -> f64 { self.max_x }
    pub fn min_y(&self) -> f64 { self.min_y }
    pub fn max_y(&self) -> f64 { self.max_y }
    pub fn scale_x(&self) -> &Linear { &self.scale_x }
    pub fn scale_y(&self) -> &Linear { &self.scale_y }

    /// `(min, max)` along `axis`.
    pub fn bounds(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }

    #[inline]
    pub fn x(&self, value: f64) -> f64 { self.scale_x.apply(value) }
    #[inline]
    pub fn y(&self, value: f64) -> f64 { self.scale_y.apply(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum::XY;

    #[test]
    fn y_axis_points_up() {
        let ctx = RenderContext::new(0.0, 10.0, 0.0, 100.0);
        assert_eq!(ctx.x(5.0), 50.0);
        assert_eq!(ctx.y(100.0), 0.0);
        assert_eq!(ctx.y(0.0), 100.0);
    }

    #[test]
    fn bounds_come_from_all_records() {
        let data = [XY::new(3.0, 9.0), XY::new(1.0, 4.0), XY::new(2.0, 1.0)];
        let ctx = RenderContext::from_records(&data).unwrap();
        assert_eq!(ctx.bounds(Axis::X), (1.0, 3.0));
        assert_eq!(ctx.bounds(Axis::Y), (1.0, 9.0));
    }

    #[test]
    fn empty_and_flat_inputs_are_rejected() {
        let empty: [XY; 0] = [];
        assert_eq!(RenderContext::from_records(&empty), Err(ChartError::EmptyData));

        let flat: [(f64, f64); 2] = [(0.0, 2.0), (1.0, 2.0)];
        assert_eq!(
            RenderContext::from_records(&flat),
            Err(ChartError::DegenerateDomain { axis: Axis::Y, value: 2.0 })
        );
    }
}
