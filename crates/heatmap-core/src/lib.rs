// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; exports public API for heat-map construction and rendering.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod format;
pub mod hover;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{HeatMap, RenderOptions, TITLE};
pub use dataset::{DatasetError, Observation, TemperatureDataset};
pub use hover::{CellHit, Tooltip, TooltipState};
pub use scene::Scene;
pub use text::TextShaper;
pub use theme::Theme;
