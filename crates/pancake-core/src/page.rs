// File: crates/pancake-core/src/page.rs
// Summary: Page assembly: document shell, stylesheet and titled chart sections.

use crate::node::Node;
use crate::tags::{body, div, h2, head, html, style};

/// Stylesheet for the positioning elements, gridlines and series paths.
pub const STYLESHEET: &str = r#"
.chart {
    height: 100%;
    padding: 3em 2em 2em 3em;
    box-sizing: border-box;
}

.axes {
    width: 100%;
    height: 100%;
    border-left: 1px solid black;
    border-bottom: 1px solid black;
}

.y.label {
    position: absolute;
    left: -2.5em;
    width: 2em;
    text-align: right;
    bottom: -0.5em;
}

.x.label {
    position: absolute;
    width: 4em;
    left: -2em;
    bottom: -22px;
    font-family: sans-serif;
    text-align: center;
}

path.data {
    stroke: red;
    stroke-linejoin: round;
    stroke-linecap: round;
    stroke-width: 2px;
    fill: none;
}

pancake-chart {
    position: relative;
    display: block;
    width: 100%;
    height: 100%;
}

pancake-box {
    position: absolute;
}

pancake-grid-item {
    position: absolute;
    left: 0;
    top: 0;
}

svg {
    position: absolute;
    width: 100%;
    height: 100%;
    overflow: visible;
}

svg * {
    vector-effect: non-scaling-stroke;
}

.grid-line {
    position: relative;
    display: block;
}

.grid-line.horizontal {
    width: calc(100% + 2em);
    left: -2em;
    border-bottom: 1px dashed #ccc;
}

.grid-line.vertical {
    height: 100%;
    border-left: 1px dashed #ccc;
}

.grid-line span {
    position: absolute;
    left: 0;
    bottom: 2px;
    line-height: 1;
    font-family: sans-serif;
    font-size: 14px;
    color: #999;
}

.year-label {
    position: absolute;
    width: 4em;
    left: -2em;
    bottom: -30px;
    font-family: sans-serif;
    font-size: 14px;
    color: #999;
    text-align: center;
}

.text {
    position: absolute;
    width: 15em;
    line-height: 1;
    color: #666;
    transform: translate(0,-50%);
    text-shadow: 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white, 0 0 8px white;
}

.text p {
    margin: 0;
    line-height: 1.2;
    color: #999;
}

.text h2 {
    margin: 0;
    font-size: 1.4em;
}

path.avg {
    stroke: #676778;
    opacity: 0.5;
    stroke-linejoin: round;
    stroke-linecap: round;
    stroke-width: 1px;
    fill: none;
}

path.scatter {
    stroke-width: 3px;
}

path.trend {
    stroke: #ff3e00;
    stroke-linejoin: round;
    stroke-linecap: round;
    stroke-width: 2px;
    fill: none;
}

pancake-point {
    position: absolute;
    width: 0;
    height: 0;
}
"#;

#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    pub body_style: String,
    pub heading_style: String,
    pub stylesheet: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            body_style: "height: 100%; max-height: 400px".to_string(),
            heading_style: "margin: 40px 0 0 40px".to_string(),
            stylesheet: STYLESHEET.to_string(),
        }
    }
}

/// A document made of titled chart sections.
#[derive(Clone, Debug, Default)]
pub struct Page {
    options: PageOptions,
    sections: Vec<(String, Node)>,
}

impl Page {
    pub fn new(options: PageOptions) -> Self {
        Self { options, sections: Vec::new() }
    }

    /// Append a heading followed by `chart` wrapped in a `.chart` container.
    pub fn section(mut self, title: impl Into<String>, chart: impl Into<Node>) -> Self {
        self.sections.push((title.into(), chart.into()));
        self
    }

    pub fn len(&self) -> usize { self.sections.len() }
    pub fn is_empty(&self) -> bool { self.sections.is_empty() }

    pub fn into_node(self) -> Node {
        let heading_style = self.options.heading_style;
        let content = self.sections.into_iter().flat_map(|(title, chart)| {
            [
                Node::from(h2().style(&heading_style).text(title)),
                div().class_name("chart").child(chart).into(),
            ]
        });

        html()
            .child(head().child(style().raw_child(self.options.stylesheet)))
            .child(body().style(self.options.body_style).children(content))
            .into()
    }

    pub fn render(self) -> String {
        self.into_node().render()
    }
}
