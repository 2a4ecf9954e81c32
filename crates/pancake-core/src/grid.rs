// File: crates/pancake-core/src/grid.rs
// Summary: Grid component: one absolutely positioned item per tick, rendered by the caller.

use crate::axis::Orientation;
use crate::context::RenderContext;
use crate::node::Node;
use crate::tags::{pancake_grid, pancake_grid_item};
use crate::ticks::{ticks, Tick};

/// What a grid renderer receives for each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTick {
    pub value: Tick,
    pub index: usize,
    /// Lowest-index tick; useful for skipping a label at the origin.
    pub first: bool,
    /// Highest-index tick; useful for appending a unit once.
    pub last: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    orientation: Orientation,
    count: usize,
    ticks: Option<Vec<Tick>>,
}

impl Grid {
    pub fn new(orientation: Orientation, count: usize) -> Self {
        Self { orientation, count, ticks: None }
    }

    /// Lines across the chart at Y tick values.
    pub fn horizontal(count: usize) -> Self {
        Self::new(Orientation::Horizontal, count)
    }

    /// Lines down the chart at X tick values.
    pub fn vertical(count: usize) -> Self {
        Self::new(Orientation::Vertical, count)
    }

    /// Use these values instead of generated ticks.
    pub fn with_ticks<I, T>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tick>,
    {
        self.ticks = Some(ticks.into_iter().map(Into::into).collect());
        self
    }

    pub fn orientation(&self) -> Orientation { self.orientation }

    /// The ticks `render` will lay out against `ctx`.
    pub fn tick_values(&self, ctx: &RenderContext) -> Vec<Tick> {
        match &self.ticks {
            Some(explicit) => explicit.clone(),
            None => {
                let (lo, hi) = ctx.bounds(self.orientation.axis());
                ticks(lo, hi, self.count)
            }
        }
    }

    /// Build a `pancake-grid` holding one positioned `pancake-grid-item` per
    /// tick; `renderer` supplies each item's contents.
    pub fn render<F, I, N>(&self, ctx: &RenderContext, mut renderer: F) -> Node
    where
        F: FnMut(GridTick) -> I,
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        let values = self.tick_values(ctx);
        let last = values.len().saturating_sub(1);
        let items = values.into_iter().enumerate().map(|(index, value)| {
            let tick = GridTick { value, index, first: index == 0, last: index == last };
            pancake_grid_item()
                .style(self.item_style(ctx, value.value()))
                .children(renderer(tick))
        });
        pancake_grid().children(items).into()
    }

    fn item_style(&self, ctx: &RenderContext, value: f64) -> String {
        match self.orientation {
            Orientation::Horizontal => format!("width: 100%; height: 0; top: {}%", ctx.y(value)),
            Orientation::Vertical => format!("width: 0; height: 100%; left: {}%", ctx.x(value)),
        }
    }
}
