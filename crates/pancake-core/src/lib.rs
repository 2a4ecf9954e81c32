// File: crates/pancake-core/src/lib.rs
// Summary: Core library entry point; exports tick math, scales, the node tree and chart components.

pub mod axis;
pub mod chart;
pub mod context;
pub mod datum;
pub mod error;
pub mod escape;
pub mod grid;
pub mod node;
pub mod page;
pub mod point;
pub mod scale;
pub mod series;
pub mod tags;
pub mod ticks;

pub use axis::{Axis, Orientation};
pub use chart::{chart, plot_box, plot_svg, ChartOptions};
pub use context::RenderContext;
pub use datum::{Coordinate, Datum, XY};
pub use error::{ChartError, Result};
pub use escape::escape_html;
pub use grid::{Grid, GridTick};
pub use node::{h, Element, Node, Text};
pub use page::{Page, PageOptions};
pub use point::point;
pub use scale::{linear, Linear};
pub use series::{svg_line, svg_line_by, svg_scatterplot, svg_scatterplot_by, SeriesKind};
pub use tags::Tag;
pub use ticks::{increment, ticks, Tick, DEFAULT_TICK_COUNT};
