// File: crates/pancake-demo/src/main.rs
// Summary: Demo loads monthly CO₂ readings and writes the carbon + simple chart page as static HTML.

mod carbon;
mod data;
mod simple;

use anyhow::{Context, Result};
use pancake_core::{Page, PageOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Accept paths from CLI or fall back to defaults
    let mut args = std::env::args().skip(1);
    let raw_in = args.next().unwrap_or_else(|| "carbon.txt".to_string());
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/index.html"));

    let (input, bundled) = resolve_input(&raw_in)?;
    println!("Using input file: {}", input.display());
    if bundled {
        println!("  ({raw_in} not found; using bundled sample)");
    }

    let readings = data::load_readings(&input)?;
    println!("Loaded {} readings", readings.len());
    if readings.is_empty() {
        anyhow::bail!("no readings loaded; check the tab-separated date/avg/trend layout.");
    }

    let page = Page::new(PageOptions::default())
        .section("Carbon Chart", carbon::carbon_chart(&readings, &carbon::default_options())?)
        .section("Simple Chart", simple::simple_chart(&simple::DATA)?);
    let html = page.render();

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&out, &html).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} ({} bytes)", out.display(), html.len());

    Ok(())
}

/// Resolve the input path, falling back to the sample shipped with this crate.
/// Returns (actual_path, used_bundled)
fn resolve_input(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/carbon.txt");
    if bundled.exists() {
        return Ok((bundled, true));
    }
    anyhow::bail!("file not found: {}", p.display());
}
