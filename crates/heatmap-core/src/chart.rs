// File: crates/heatmap-core/src/chart.rs
// Summary: Heat-map layout and the headless render pipeline (Skia CPU raster + PNG).

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{legend_ticks, month_ticks, year_ticks, Tick};
use crate::dataset::{DatasetError, TemperatureDataset};
use crate::format::month_names;
use crate::hover::{CellHit, Tooltip};
use crate::scale::{BandScale, PointScale, QuantizeScale};
use crate::scene::{Anchor, CellMeta, Group, Line, Node, Rect, Scene, Text};
use crate::text::TextShaper;
use crate::theme::{heat_palette, Theme, PALETTE_LEN};
use crate::types::{Insets, HEIGHT, WIDTH};

pub const TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Horizontal run of the legend, starting at the left inset.
const LEGEND_SPAN: f32 = 700.0;
const TICK_LEN: f32 = 6.0;

const TITLE_SIZE: f32 = 28.0;
const SUBTITLE_SIZE: f32 = 18.0;
const TICK_SIZE: f32 = 12.0;
const LABEL_SIZE: f32 = 16.0;
const TOOLTIP_SIZE: f32 = 14.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to avoid font nondeterminism in pixel comparisons.
    pub draw_text: bool,
    /// Active hover tooltip, drawn last by the raster backend.
    pub tooltip: Option<Tooltip>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_text: true,
            tooltip: None,
        }
    }
}

/// The laid-out scales for one render pass.
pub(crate) struct Layout {
    pub x: BandScale<i32>,
    pub y: BandScale<&'static str>,
    pub color: QuantizeScale,
    pub legend: PointScale,
    /// Domain minimum, the interior thresholds, then the domain maximum.
    pub legend_points: Vec<f64>,
}

pub struct HeatMap {
    dataset: TemperatureDataset,
}

impl HeatMap {
    /// Validates the dataset up front; rendering assumes at least one
    /// observation and calendar-range months.
    pub fn new(dataset: TemperatureDataset) -> Result<Self, DatasetError> {
        dataset.validate()?;
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &TemperatureDataset {
        &self.dataset
    }

    pub(crate) fn layout(&self, opts: &RenderOptions) -> Layout {
        let left = opts.insets.left as f32;
        let right = (opts.width - opts.insets.right as i32) as f32;
        let top = opts.insets.top as f32;
        let bottom = (opts.height - opts.insets.bottom as i32) as f32;

        // The literal per-observation year sequence; duplicates collapse in
        // the band scale.
        let x = BandScale::new(self.dataset.monthly_variance.iter().map(|o| o.year), left, right);
        let y = BandScale::new(month_names(), top, bottom);

        let (t_min, t_max) = self.dataset.temperature_extent();
        let color = QuantizeScale::new(t_min, t_max, PALETTE_LEN);

        let (domain_min, domain_max) = color.domain();
        let mut legend_points = Vec::with_capacity(PALETTE_LEN + 1);
        legend_points.push(domain_min);
        legend_points.extend(color.thresholds());
        legend_points.push(domain_max);
        let legend = PointScale::new(legend_points.len(), left, left + LEGEND_SPAN);

        Layout { x, y, color, legend, legend_points }
    }

    /// Build the scene-graph for one render pass. Every call produces fresh
    /// nodes; appending the output twice yields two overlapping charts.
    pub fn scene(&self, opts: &RenderOptions) -> Scene {
        let layout = self.layout(opts);
        let palette = heat_palette();
        let theme = &opts.theme;

        let w = opts.width as f32;
        let h = opts.height as f32;
        let left = opts.insets.left as f32;
        let right = w - opts.insets.right as f32;
        let top = opts.insets.top as f32;
        let bottom = h - opts.insets.bottom as f32;

        let mut scene = Scene::new(opts.width, opts.height, theme.background, theme.frame);

        scene.push(Node::Text(Text {
            x: w / 2.0,
            y: 60.0,
            content: TITLE.to_string(),
            size: TITLE_SIZE,
            color: theme.title,
            anchor: Anchor::Middle,
            rotate: None,
            id: Some("title"),
            class: Some("title"),
        }));

        let (year_min, year_max) = self.dataset.year_extent();
        scene.push(Node::Text(Text {
            x: w / 2.0,
            y: 100.0,
            content: format!(
                "{} - {}: base temperature {}\u{00B0} C",
                year_min, year_max, self.dataset.base_temperature
            ),
            size: SUBTITLE_SIZE,
            color: theme.title,
            anchor: Anchor::Middle,
            rotate: None,
            id: Some("description"),
            class: Some("description"),
        }));

        // X axis (years), decimated tick labels below the plot.
        let mut x_axis = Group::new(Some("x-axis"), Some("axis"));
        x_axis.push(Node::Line(Line {
            x1: left,
            y1: bottom,
            x2: right,
            y2: bottom,
            color: theme.axis_line,
            stroke_width: 1.5,
        }));
        for Tick { offset, label } in year_ticks(&layout.x) {
            x_axis.push(Node::Line(Line {
                x1: offset,
                y1: bottom,
                x2: offset,
                y2: bottom + TICK_LEN,
                color: theme.axis_line,
                stroke_width: 1.0,
            }));
            x_axis.push(Node::Text(Text {
                x: offset,
                y: bottom + TICK_LEN + 14.0,
                content: label,
                size: TICK_SIZE,
                color: theme.tick_label,
                anchor: Anchor::Middle,
                rotate: None,
                id: None,
                class: None,
            }));
        }
        scene.push(Node::Group(x_axis));

        // Legend: boundary axis first, then one tile per bucket, exactly the
        // points below the upper-bound sentinel.
        let (_, t_max) = layout.color.domain();
        let mut legend = Group::new(Some("legend"), None);
        let mut legend_axis = Group::new(Some("legend-axis"), Some("legend-axis"));
        legend_axis.push(Node::Line(Line {
            x1: left,
            y1: h - 60.0,
            x2: left + LEGEND_SPAN,
            y2: h - 60.0,
            color: theme.axis_line,
            stroke_width: 1.0,
        }));
        for Tick { offset, label } in legend_ticks(&layout.legend_points, &layout.legend) {
            legend_axis.push(Node::Line(Line {
                x1: offset,
                y1: h - 60.0,
                x2: offset,
                y2: h - 60.0 + TICK_LEN,
                color: theme.axis_line,
                stroke_width: 1.0,
            }));
            legend_axis.push(Node::Text(Text {
                x: offset,
                y: h - 60.0 + TICK_LEN + 14.0,
                content: label,
                size: TICK_SIZE,
                color: theme.tick_label,
                anchor: Anchor::Middle,
                rotate: None,
                id: None,
                class: None,
            }));
        }
        legend.push(Node::Group(legend_axis));
        for (i, point) in layout.legend_points.iter().enumerate() {
            if *point >= t_max {
                continue;
            }
            legend.push(Node::Rect(Rect {
                x: layout.legend.position(i),
                y: h - 110.0,
                width: layout.legend.step(),
                height: 50.0,
                fill: palette[layout.color.bucket_of(*point)],
                class: Some("legend-tiles"),
                cell: None,
            }));
        }
        scene.push(Node::Group(legend));

        // Y axis (months) on the left.
        let mut y_axis = Group::new(Some("y-axis"), Some("axis"));
        y_axis.push(Node::Line(Line {
            x1: left,
            y1: top,
            x2: left,
            y2: bottom,
            color: theme.axis_line,
            stroke_width: 1.5,
        }));
        for Tick { offset, label } in month_ticks(&layout.y) {
            y_axis.push(Node::Line(Line {
                x1: left - TICK_LEN,
                y1: offset,
                x2: left,
                y2: offset,
                color: theme.axis_line,
                stroke_width: 1.0,
            }));
            y_axis.push(Node::Text(Text {
                x: left - TICK_LEN - 3.0,
                y: offset + 4.0,
                content: label,
                size: TICK_SIZE,
                color: theme.tick_label,
                anchor: Anchor::End,
                rotate: None,
                id: None,
                class: None,
            }));
        }
        scene.push(Node::Group(y_axis));

        // Data cells, one rect per observation.
        let names = month_names();
        let cell_w = layout.x.bandwidth();
        let cell_h = layout.y.bandwidth();
        for obs in &self.dataset.monthly_variance {
            let name = names[(obs.month - 1) as usize];
            let (Some(x), Some(y)) = (layout.x.position(&obs.year), layout.y.position(&name)) else {
                continue;
            };
            let temperature = obs.temperature(self.dataset.base_temperature);
            scene.push(Node::Rect(Rect {
                x,
                y,
                width: cell_w,
                height: cell_h,
                fill: palette[layout.color.bucket_of(temperature)],
                class: Some("cell"),
                cell: Some(CellMeta {
                    year: obs.year,
                    month_index: obs.month - 1,
                    temperature,
                }),
            }));
        }

        scene.push(Node::Text(Text {
            x: w / 2.0,
            y: h - 140.0,
            content: "Years".to_string(),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: Anchor::Middle,
            rotate: None,
            id: Some("x-label"),
            class: Some("label"),
        }));
        scene.push(Node::Text(Text {
            x: 40.0,
            y: h / 2.0,
            content: "Months".to_string(),
            size: LABEL_SIZE,
            color: theme.axis_label,
            anchor: Anchor::Middle,
            rotate: Some(270.0),
            id: Some("y-label"),
            class: Some("label"),
        }));

        scene
    }

    /// Pointer hit-test against the two band scales. Returns the cell under
    /// (x, y), or `None` over gutters, axes, or year/month pairs with no
    /// observation.
    pub fn cell_at(&self, opts: &RenderOptions, x: f32, y: f32) -> Option<CellHit> {
        let layout = self.layout(opts);
        let xi = layout.x.index_at(x)?;
        let yi = layout.y.index_at(y)?;
        let year = *layout.x.domain().get(xi)?;
        let month = yi as u32 + 1;
        let obs = self
            .dataset
            .monthly_variance
            .iter()
            .find(|o| o.year == year && o.month == month)?;
        Some(CellHit {
            year,
            month_index: month - 1,
            temperature: obs.temperature(self.dataset.base_temperature),
            variance: obs.variance,
        })
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a tightly-packed RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        let w = opts.width.max(1);
        let h = opts.height.max(1);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read RGBA pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let scene = self.scene(opts);
        let shaper = TextShaper::new();
        draw_scene(surface.canvas(), &scene, &shaper, opts);
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_scene(canvas: &skia::Canvas, scene: &Scene, shaper: &TextShaper, opts: &RenderOptions) {
    canvas.clear(scene.background);

    let mut frame_paint = skia::Paint::default();
    frame_paint.set_color(scene.frame);
    frame_paint.set_style(skia::paint::Style::Stroke);
    frame_paint.set_stroke_width(1.0);
    canvas.draw_rect(
        skia::Rect::from_ltrb(0.5, 0.5, scene.width as f32 - 0.5, scene.height as f32 - 0.5),
        &frame_paint,
    );

    draw_nodes(canvas, &scene.nodes, shaper, opts.draw_text);

    if opts.draw_text {
        if let Some(tooltip) = &opts.tooltip {
            draw_tooltip(canvas, tooltip, shaper, &opts.theme);
        }
    }
}

fn draw_nodes(canvas: &skia::Canvas, nodes: &[Node], shaper: &TextShaper, draw_text: bool) {
    for node in nodes {
        match node {
            Node::Group(g) => draw_nodes(canvas, &g.children, shaper, draw_text),
            Node::Rect(r) => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(r.fill);
                canvas.draw_rect(
                    skia::Rect::from_xywh(r.x, r.y, r.width, r.height),
                    &paint,
                );
            }
            Node::Line(l) => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(l.color);
                paint.set_stroke_width(l.stroke_width);
                canvas.draw_line((l.x1, l.y1), (l.x2, l.y2), &paint);
            }
            Node::Text(t) => {
                if !draw_text {
                    continue;
                }
                match t.rotate {
                    Some(deg) => shaper.draw_rotated(canvas, &t.content, t.x, t.y, deg, t.size, t.color, t.anchor),
                    None => shaper.draw_anchored(canvas, &t.content, t.x, t.y, t.size, t.color, t.anchor),
                }
            }
        }
    }
}

fn draw_tooltip(canvas: &skia::Canvas, tooltip: &Tooltip, shaper: &TextShaper, theme: &Theme) {
    let pad = 10.0;
    let line_h = TOOLTIP_SIZE + 6.0;
    let width = tooltip
        .lines
        .iter()
        .map(|l| shaper.measure_width(l, TOOLTIP_SIZE))
        .fold(0.0f32, f32::max)
        + pad * 2.0;
    let height = line_h * tooltip.lines.len() as f32 + pad * 2.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_bg);
    let rect = skia::Rect::from_xywh(tooltip.x, tooltip.y, width, height);
    canvas.draw_rrect(skia::RRect::new_rect_xy(rect, 6.0, 6.0), &bg);

    for (i, line) in tooltip.lines.iter().enumerate() {
        shaper.draw_anchored(
            canvas,
            line,
            tooltip.x + pad,
            tooltip.y + pad + line_h * (i as f32 + 1.0) - 6.0,
            TOOLTIP_SIZE,
            theme.tooltip_text,
            Anchor::Start,
        );
    }
}
