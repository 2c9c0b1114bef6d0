// File: crates/heatmap-core/tests/svg.rs
// Purpose: SVG backend emits the expected document structure and cell attributes.

use heatmap_core::dataset::{Observation, TemperatureDataset};
use heatmap_core::{HeatMap, RenderOptions};

fn sample() -> HeatMap {
    let dataset = TemperatureDataset {
        base_temperature: 8.66,
        monthly_variance: vec![
            Observation { year: 1753, month: 1, variance: -1.366 },
            Observation { year: 1753, month: 2, variance: -3.284 },
        ],
    };
    HeatMap::new(dataset).expect("valid dataset")
}

#[test]
fn document_carries_ids_and_classes() {
    let svg = sample().svg_string(&RenderOptions::default());

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    for id in ["id=\"title\"", "id=\"description\"", "id=\"x-axis\"", "id=\"y-axis\"", "id=\"legend\"", "id=\"legend-axis\"", "id=\"x-label\"", "id=\"y-label\""] {
        assert!(svg.contains(id), "missing {id}");
    }
}

#[test]
fn one_cell_element_per_observation() {
    let svg = sample().svg_string(&RenderOptions::default());

    assert_eq!(svg.matches("class=\"cell\"").count(), 2);
    assert_eq!(svg.matches("class=\"legend-tiles\"").count(), 9);
    assert!(svg.contains("data-year=\"1753\""));
    assert!(svg.contains("data-month=\"0\""));
    assert!(svg.contains("data-month=\"1\""));
    assert!(svg.contains("data-temp=\""));
}

#[test]
fn labels_render_as_text_nodes() {
    let svg = sample().svg_string(&RenderOptions::default());

    assert!(svg.contains(">Monthly Global Land-Surface Temperature</text>"));
    assert!(svg.contains(">1753 - 1753: base temperature 8.66\u{00B0} C</text>"));
    assert!(svg.contains(">Years</text>"));
    assert!(svg.contains(">Months</text>"));
    assert!(svg.contains("transform=\"rotate(270, 40, 400)\""));
}

#[test]
fn surface_size_and_frame() {
    let svg = sample().svg_string(&RenderOptions::default());
    assert!(svg.contains("width=\"2000\" height=\"800\""));
    assert!(svg.contains("border: solid 1px #0000ff"));
}
