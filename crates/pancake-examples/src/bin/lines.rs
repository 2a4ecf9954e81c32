// File: crates/pancake-examples/src/bin/lines.rs
// Summary: Minimal example that renders a line + scatter chart to a static HTML page.

use anyhow::{Context, Result};
use pancake_core::tags::{div, path, span};
use pancake_core::{chart, plot_box, plot_svg, svg_line, svg_scatterplot, Grid, Page, PageOptions, RenderContext};

fn main() -> Result<()> {
    // Build a simple line series
    let data: [(f64, f64); 6] = [
        (0.0, 0.0),
        (1.0, 1.2),
        (2.0, 0.8),
        (3.0, 1.8),
        (4.0, 1.4),
        (5.0, 2.0),
    ];

    let ctx = RenderContext::from_records(&data)?;
    let body = chart([
        plot_box([div().class_name("axes")]),
        Grid::vertical(5).render(&ctx, |t| [span().class_name("x label").text(t.value)]),
        Grid::horizontal(4).render(&ctx, |t| [span().class_name("y label").text(t.value)]),
        plot_svg([
            svg_line(&data, &ctx, |d| path().class_name("data").attr("d", d))?,
            svg_scatterplot(&data, &ctx, |d| path().class_name("avg scatter").attr("d", d))?,
        ]),
    ]);

    let html = Page::new(PageOptions::default()).section("Lines", body).render();
    let out = std::path::PathBuf::from("target/out/example_lines.html");
    std::fs::create_dir_all("target/out").context("creating target/out")?;
    std::fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
