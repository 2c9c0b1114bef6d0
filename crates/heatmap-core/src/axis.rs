// File: crates/heatmap-core/src/axis.rs
// Summary: Tick construction for the year, month, and legend axes.

use crate::scale::{BandScale, PointScale};

/// One axis tick: pixel offset along the axis plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f32,
    pub label: String,
}

/// Keep every tenth year label, offset so that index 7 is the first kept.
/// The stride is positional, not calendar-based: which years survive depends
/// on where they sit in the domain.
pub fn keep_year_tick(index: usize) -> bool {
    (index + 3) % 10 == 0
}

/// Decimated ticks for the year band scale, centered on each band.
pub fn year_ticks(scale: &BandScale<i32>) -> Vec<Tick> {
    let half = scale.bandwidth() / 2.0;
    scale
        .domain()
        .iter()
        .enumerate()
        .filter(|(i, _)| keep_year_tick(*i))
        .map(|(i, year)| Tick { offset: scale.position_index(i) + half, label: year.to_string() })
        .collect()
}

/// One tick per month band, centered.
pub fn month_ticks(scale: &BandScale<&'static str>) -> Vec<Tick> {
    let half = scale.bandwidth() / 2.0;
    scale
        .domain()
        .iter()
        .enumerate()
        .map(|(i, name)| Tick { offset: scale.position_index(i) + half, label: (*name).to_string() })
        .collect()
}

/// Legend boundary ticks, one per point, formatted to one decimal place.
pub fn legend_ticks(points: &[f64], scale: &PointScale) -> Vec<Tick> {
    points
        .iter()
        .enumerate()
        .map(|(i, v)| Tick { offset: scale.position(i), label: format!("{:.1}", v) })
        .collect()
}
