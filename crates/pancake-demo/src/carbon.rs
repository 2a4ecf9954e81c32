// File: crates/pancake-demo/src/carbon.rs
// Summary: Atmospheric CO₂ chart: gridlines with ppm/year labels, scatter + average + trend paths, annotations.

use anyhow::{Context, Result};
use pancake_core::tags::{div, em, h2, p, path, span};
use pancake_core::{chart, plot_svg, point, svg_line, svg_line_by, svg_scatterplot, ChartOptions, Grid, Node, RenderContext};

use crate::data::{highest, Reading};

const ANNOTATION_STYLE: &str =
    "position: absolute; right: 0.5em; top: -0.5em; white-space: nowrap; line-height: 1; color: #666;";

/// Options used for the published chart: five ticks per axis, ppm on the top label.
pub fn default_options() -> ChartOptions {
    ChartOptions { y_unit: Some(" ppm".to_string()), ..ChartOptions::default() }
}

pub fn carbon_chart(readings: &[Reading], opts: &ChartOptions) -> Result<Node> {
    let ctx = RenderContext::from_records(readings).context("deriving carbon chart bounds")?;
    let peak = highest(readings).context("no readings to chart")?;

    let y_grid = Grid::horizontal(opts.y_ticks).render(&ctx, |t| {
        [div().class_name("grid-line horizontal").child(span().text(opts.y_label(t.value, t.last)))]
    });
    let x_grid = Grid::vertical(opts.x_ticks).render(&ctx, |t| {
        [
            div().class_name("grid-line vertical"),
            span().class_name("year-label").text(t.value),
        ]
    });

    let series = plot_svg([
        svg_scatterplot(readings, &ctx, |d| path().class_name("avg scatter").attr("d", d))?,
        svg_line(readings, &ctx, |d| path().class_name("avg").attr("d", d))?,
        svg_line_by(readings, &ctx, |r| r.date, |r| r.trend, |d| path().class_name("trend").attr("d", d))?,
    ]);

    Ok(chart([
        y_grid,
        x_grid,
        series,
        point(&ctx, 1962.0, 390.0, [legend()]),
        point(&ctx, 2015.0, 330.0, [footnote()]),
        point(&ctx, peak.date, peak.avg, [peak_annotation(peak.avg)]),
    ]))
}

fn legend() -> Node {
    div()
        .class_name("text")
        .child(h2().text("Atmospheric CO₂"))
        .child(
            p().child(span().style("color: #676778").text("•"))
                .child(span().raw_child("monthly average&nbsp;&nbsp;&nbsp;"))
                .child(span().style("color: #ff3e00").text("—"))
                .child(span().text("trend")),
        )
        .into()
}

fn footnote() -> Node {
    div()
        .class_name("text")
        .style("right: 0; text-align: right;")
        .child(p().child(em().text("This chart will render correctly even if JavaScript is disabled.")))
        .into()
}

fn peak_annotation(avg: f64) -> Node {
    div()
        .class_name("annotation")
        .style(ANNOTATION_STYLE)
        .raw_child(format!("{avg} parts per million (ppm) &rarr;"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_readings;

    const SAMPLE: &str = "1960.0\t316.0\t315.0\n\
                          1980.0\t340.0\t338.0\n\
                          1990.0\t-99.99\t350.0\n\
                          2000.0\t370.0\t368.0\n\
                          2010.0\t416.0\t412.0\n";

    fn render() -> String {
        let rows = read_readings(SAMPLE.as_bytes()).unwrap();
        carbon_chart(&rows, &default_options()).unwrap().render()
    }

    #[test]
    fn unit_only_on_top_label() {
        let html = render();
        assert_eq!(html.matches(" ppm</span>").count(), 1);
        assert!(html.contains("<span>400 ppm</span>"), "{html}");
    }

    #[test]
    fn three_paths_in_order() {
        let html = render();
        let scatter = html.find(r#"class="avg scatter""#).unwrap();
        let avg = html.find(r#"class="avg" d="#).unwrap();
        let trend = html.find(r#"class="trend""#).unwrap();
        assert!(scatter < avg && avg < trend);
    }

    #[test]
    fn peak_is_annotated_raw() {
        let html = render();
        assert!(html.contains("416 parts per million (ppm) &rarr;"));
        assert!(html.contains("<pancake-point style=\"left: 100%; top: 0%\">"));
    }

    #[test]
    fn legend_keeps_entities() {
        assert!(render().contains("monthly average&nbsp;&nbsp;&nbsp;"));
    }
}
