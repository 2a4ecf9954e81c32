// File: crates/pancake-core/src/chart.rs
// Summary: Chart-level wrappers (chart, full-bleed box, svg canvas) and chart options.

use crate::node::Node;
use crate::tags::{pancake_box, pancake_chart, svg};
use crate::ticks::DEFAULT_TICK_COUNT;

/// Inline style of the full-bleed box.
pub const BOX_STYLE: &str = "left: 0%; bottom: 0%; width: 100%; height: 100%;";

/// Coordinate space shared by the percentage scales and the svg canvas.
pub const VIEW_BOX: &str = "0 0 100 100";

/// Knobs for the chart compositions built on top of the components.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Target tick count for vertical gridlines (X labels).
    pub x_ticks: usize,
    /// Target tick count for horizontal gridlines (Y labels).
    pub y_ticks: usize,
    /// Appended to the last Y label only, e.g. `" ppm"`.
    pub y_unit: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { x_ticks: DEFAULT_TICK_COUNT, y_ticks: DEFAULT_TICK_COUNT, y_unit: None }
    }
}

impl ChartOptions {
    /// Label text for a Y tick, with the unit on the last one.
    pub fn y_label(&self, value: impl std::fmt::Display, last: bool) -> String {
        match (&self.y_unit, last) {
            (Some(unit), true) => format!("{value}{unit}"),
            _ => value.to_string(),
        }
    }
}

/// Positioning root. Grids, boxes and points inside lay out against it.
pub fn chart<I, N>(children: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    pancake_chart().children(children).into()
}

/// Box covering the whole chart area.
pub fn plot_box<I, N>(children: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    pancake_box().style(BOX_STYLE).children(children).into()
}

/// Stretched svg canvas in the `0..100` percent space used by the series paths.
pub fn plot_svg<I, N>(children: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    svg()
        .attr("viewBox", VIEW_BOX)
        .attr("preserveAspectRatio", "none")
        .children(children)
        .into()
}
