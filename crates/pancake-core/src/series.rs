// File: crates/pancake-core/src/series.rs
// Summary: SVG path series (line and scatter) built from records through the render context.
// Notes:
// - Path coordinates are in the context's output space (percent for the
//   standard context), meant for an svg with `viewBox="0 0 100 100"`.
// - The final `<path>` markup belongs to the caller's renderer; this module
//   only produces the path data.

use crate::context::RenderContext;
use crate::datum::{read_point, Coordinate, Datum};
use crate::error::Result;
use crate::node::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    /// One polyline through every record, in record order.
    Line,
    /// A round dot per record, drawn as a zero-length arc.
    Scatter,
}

/// Path data for `records` drawn as `kind`.
///
/// An empty slice produces an empty string.
pub fn path_data<T, X, Y, CX, CY>(kind: SeriesKind, records: &[T], ctx: &RenderContext, x: X, y: Y) -> Result<String>
where
    X: Fn(&T) -> CX,
    Y: Fn(&T) -> CY,
    CX: Coordinate,
    CY: Coordinate,
{
    let mut segments = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let (px, py) = read_point(i, rec, &x, &y)?;
        let (sx, sy) = (ctx.x(px), ctx.y(py));
        segments.push(match kind {
            SeriesKind::Line => format!("{sx},{sy}"),
            SeriesKind::Scatter => format!("M{sx} {sy} A0 0 0 0 1 {sx} {sy}"),
        });
    }

    Ok(match kind {
        SeriesKind::Line if segments.is_empty() => String::new(),
        SeriesKind::Line => format!("M{}", segments.join("L")),
        SeriesKind::Scatter => segments.join(" "),
    })
}

/// Line through records with built-in coordinates.
pub fn svg_line<T, R, N>(records: &[T], ctx: &RenderContext, renderer: R) -> Result<Node>
where
    T: Datum,
    R: FnOnce(&str) -> N,
    N: Into<Node>,
{
    svg_line_by(records, ctx, T::x, T::y, renderer)
}

/// Line through records projected by `x` and `y`; `renderer` turns the
/// path data into markup.
pub fn svg_line_by<T, X, Y, CX, CY, R, N>(records: &[T], ctx: &RenderContext, x: X, y: Y, renderer: R) -> Result<Node>
where
    X: Fn(&T) -> CX,
    Y: Fn(&T) -> CY,
    CX: Coordinate,
    CY: Coordinate,
    R: FnOnce(&str) -> N,
    N: Into<Node>,
{
    let d = path_data(SeriesKind::Line, records, ctx, x, y)?;
    Ok(renderer(&d).into())
}

/// Dot per record, for records with built-in coordinates.
pub fn svg_scatterplot<T, R, N>(records: &[T], ctx: &RenderContext, renderer: R) -> Result<Node>
where
    T: Datum,
    R: FnOnce(&str) -> N,
    N: Into<Node>,
{
    svg_scatterplot_by(records, ctx, T::x, T::y, renderer)
}

/// Dot per record projected by `x` and `y`.
pub fn svg_scatterplot_by<T, X, Y, CX, CY, R, N>(
    records: &[T],
    ctx: &RenderContext,
    x: X,
    y: Y,
    renderer: R,
) -> Result<Node>
where
    X: Fn(&T) -> CX,
    Y: Fn(&T) -> CY,
    CX: Coordinate,
    CY: Coordinate,
    R: FnOnce(&str) -> N,
    N: Into<Node>,
{
    let d = path_data(SeriesKind::Scatter, records, ctx, x, y)?;
    Ok(renderer(&d).into())
}
