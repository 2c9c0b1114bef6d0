// File: crates/demo/src/main.rs
// Summary: Headless driver; fetches the temperature dataset and writes PNG and SVG heat maps.

use anyhow::{Context, Result};
use heatmap_core::{HeatMap, RenderOptions};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept an endpoint override from the CLI or fall back to the fixed URL.
    let url = std::env::args().nth(1).unwrap_or_else(|| heatmap_data::DATASET_URL.to_string());
    info!(%url, "fetching dataset");

    let dataset = heatmap_data::load_from(&url)
        .await
        .with_context(|| format!("failed to load dataset from '{}'", url))?;

    let (year_min, year_max) = dataset.year_extent();
    let (t_min, t_max) = dataset.temperature_extent();
    info!(
        observations = dataset.monthly_variance.len(),
        base = dataset.base_temperature,
        years = %format!("{year_min}..{year_max}"),
        temperatures = %format!("{t_min:.2}..{t_max:.2}"),
        "dataset loaded"
    );

    let chart = HeatMap::new(dataset)?;
    let opts = RenderOptions::default();

    let out_dir = PathBuf::from("target/out");
    let out_png = out_dir.join("heatmap.png");
    chart
        .render_to_png(&opts, &out_png)
        .with_context(|| format!("rendering {}", out_png.display()))?;
    info!(path = %out_png.display(), "wrote PNG");

    let out_svg = out_png.with_extension("svg");
    chart
        .render_to_svg(&opts, &out_svg)
        .with_context(|| format!("rendering {}", out_svg.display()))?;
    info!(path = %out_svg.display(), "wrote SVG");

    Ok(())
}
