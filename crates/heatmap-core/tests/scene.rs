// File: crates/heatmap-core/tests/scene.rs
// Purpose: End-to-end scene composition checks on a tiny dataset.

use heatmap_core::dataset::{Observation, TemperatureDataset};
use heatmap_core::{HeatMap, RenderOptions, TITLE};

fn two_observation_dataset() -> TemperatureDataset {
    TemperatureDataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            Observation { year: 1753, month: 1, variance: -1.366 },
            Observation { year: 1753, month: 2, variance: -3.284 },
        ],
    }
}

#[test]
fn renders_one_cell_per_observation() {
    let chart = HeatMap::new(two_observation_dataset()).expect("valid dataset");
    let scene = chart.scene(&RenderOptions::default());

    let cells = scene.cells();
    assert_eq!(cells.len(), 2);

    let meta = cells[0].cell.expect("cell metadata");
    assert_eq!(meta.year, 1753);
    assert_eq!(meta.month_index, 0);
    assert!((meta.temperature - (8.66 - 1.366)).abs() < 1e-9);

    // Both observations share a year, so the cells stack in one column.
    assert_eq!(cells[0].x, cells[1].x);
    assert!(cells[1].y > cells[0].y);
}

#[test]
fn title_and_description() {
    let chart = HeatMap::new(two_observation_dataset()).expect("valid dataset");
    let scene = chart.scene(&RenderOptions::default());

    let title = scene.text_with_id("title").expect("title node");
    assert_eq!(title.content, TITLE);
    assert!(title.content.contains("Land-Surface Temperature"));

    let description = scene.text_with_id("description").expect("description node");
    assert_eq!(description.content, "1753 - 1753: base temperature 8.66\u{00B0} C");
}

#[test]
fn month_axis_always_lists_twelve_months() {
    // Input only covers January and February; the axis still shows all twelve.
    let chart = HeatMap::new(two_observation_dataset()).expect("valid dataset");
    let scene = chart.scene(&RenderOptions::default());

    let labels = scene.labels_in_group("y-axis");
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0].content, "January");
    assert_eq!(labels[11].content, "December");
}

#[test]
fn legend_has_one_tile_per_bucket_and_all_boundaries() {
    let chart = HeatMap::new(two_observation_dataset()).expect("valid dataset");
    let scene = chart.scene(&RenderOptions::default());

    // 9 tiles: every boundary value below the upper-bound sentinel.
    let tiles = scene.rects_with_class("legend-tiles");
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles[0].height, 50.0);

    // 10 boundary labels, one decimal place. min = 8.66 - 3.284, max = 8.66 - 1.366.
    let labels = scene.labels_in_group("legend");
    assert_eq!(labels.len(), 10);
    assert_eq!(labels[0].content, "5.4");
    assert_eq!(labels[9].content, "7.3");
}

#[test]
fn single_year_domain_has_no_decimated_tick() {
    // Index 0 fails (index + 3) % 10 == 0, so a one-year domain shows no year label.
    let chart = HeatMap::new(two_observation_dataset()).expect("valid dataset");
    let scene = chart.scene(&RenderOptions::default());
    assert!(scene.labels_in_group("x-axis").is_empty());
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset = TemperatureDataset { base_temperature: 8.0, monthly_variance: Vec::new() };
    assert!(HeatMap::new(dataset).is_err());
}
