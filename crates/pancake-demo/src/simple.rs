// File: crates/pancake-demo/src/simple.rs
// Summary: Minimal line chart of y = x² with axes, labelled gridlines and one path.

use anyhow::Result;
use pancake_core::tags::{div, path, span};
use pancake_core::{chart, plot_box, plot_svg, svg_line, Grid, Node, RenderContext, XY};

pub const DATA: [XY; 11] = [
    XY::new(0.0, 0.0),
    XY::new(1.0, 1.0),
    XY::new(2.0, 4.0),
    XY::new(3.0, 9.0),
    XY::new(4.0, 16.0),
    XY::new(5.0, 25.0),
    XY::new(6.0, 36.0),
    XY::new(7.0, 49.0),
    XY::new(8.0, 64.0),
    XY::new(9.0, 81.0),
    XY::new(10.0, 100.0),
];

pub fn simple_chart(data: &[XY]) -> Result<Node> {
    let ctx = RenderContext::from_records(data)?;
    Ok(chart([
        plot_box([div().class_name("axes")]),
        Grid::vertical(5).render(&ctx, |t| [span().class_name("label x").text(t.value)]),
        Grid::horizontal(2).render(&ctx, |t| [span().class_name("label y").text(t.value)]),
        plot_svg([svg_line(data, &ctx, |d| path().class_name("data").attr("d", d))?]),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_expected_markup() {
        let html = simple_chart(&DATA).unwrap().render();
        assert!(html.starts_with("<pancake-chart><pancake-box style=\"left: 0%; bottom: 0%; width: 100%; height: 100%;\">"));
        // x ticks 0..10 step 2, y ticks 0, 50, 100
        assert_eq!(html.matches("class=\"label x\"").count(), 6);
        assert_eq!(html.matches("class=\"label y\"").count(), 3);
        assert!(html.contains("<pancake-grid-item style=\"width: 100%; height: 0; top: 50%\"><span class=\"label y\">50</span>"));
        assert!(html.contains("d=\"M0,100L10,99L20,96"), "{html}");
        assert!(html.ends_with("L100,0\"></path></svg></pancake-chart>"));
    }
}
