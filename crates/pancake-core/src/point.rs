// File: crates/pancake-core/src/point.rs
// Summary: Point component anchoring arbitrary markup at a data coordinate.

use crate::context::RenderContext;
use crate::node::Node;
use crate::tags::pancake_point;

/// `pancake-point` placed at `(x, y)` in data space, wrapping `children`.
///
/// The element itself has no size; children position themselves relative
/// to the anchor (e.g. `right: 0` to sit left of it).
pub fn point<I, N>(ctx: &RenderContext, x: f64, y: f64, children: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    pancake_point()
        .style(format!("left: {}%; top: {}%", ctx.x(x), ctx.y(y)))
        .children(children)
        .into()
}
