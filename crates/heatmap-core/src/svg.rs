// File: crates/heatmap-core/src/svg.rs
// Summary: SVG document writer; mirrors the node ids/classes and data-* cell
// attributes of the rendered chart so the output is a self-describing document.

use std::fmt::Write as _;

use anyhow::Result;
use skia_safe as skia;

use crate::chart::{HeatMap, RenderOptions};
use crate::scene::{Anchor, Node, Scene};

fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Serialize a scene to a standalone SVG document. The hover tooltip is a
/// raster-only overlay and never appears here.
pub fn write_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"svg\" class=\"svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" style=\"border: solid 1px {}\">",
        scene.width, scene.height, scene.width, scene.height, hex(scene.frame)
    );
    let _ = writeln!(
        svg,
        "  <rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        scene.width, scene.height, hex(scene.background)
    );
    write_nodes(&mut svg, &scene.nodes, 1);
    svg.push_str("</svg>\n");
    svg
}

fn write_nodes(svg: &mut String, nodes: &[Node], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            Node::Group(g) => {
                let _ = write!(svg, "{}<g", indent);
                if let Some(id) = g.id {
                    let _ = write!(svg, " id=\"{}\"", id);
                }
                if let Some(class) = g.class {
                    let _ = write!(svg, " class=\"{}\"", class);
                }
                svg.push_str(">\n");
                write_nodes(svg, &g.children, depth + 1);
                let _ = writeln!(svg, "{}</g>", indent);
            }
            Node::Rect(r) => {
                let _ = write!(svg, "{}<rect", indent);
                if let Some(class) = r.class {
                    let _ = write!(svg, " class=\"{}\"", class);
                }
                if let Some(cell) = &r.cell {
                    let _ = write!(
                        svg,
                        " data-year=\"{}\" data-month=\"{}\" data-temp=\"{}\"",
                        cell.year, cell.month_index, cell.temperature
                    );
                }
                let _ = writeln!(
                    svg,
                    " x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                    r.x, r.y, r.width, r.height, hex(r.fill)
                );
            }
            Node::Line(l) => {
                let _ = writeln!(
                    svg,
                    "{}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    indent, l.x1, l.y1, l.x2, l.y2, hex(l.color), l.stroke_width
                );
            }
            Node::Text(t) => {
                let _ = write!(svg, "{}<text", indent);
                if let Some(id) = t.id {
                    let _ = write!(svg, " id=\"{}\"", id);
                }
                if let Some(class) = t.class {
                    let _ = write!(svg, " class=\"{}\"", class);
                }
                let _ = write!(
                    svg,
                    " x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
                    t.x, t.y, t.size, hex(t.color), anchor_attr(t.anchor)
                );
                if let Some(deg) = t.rotate {
                    let _ = write!(svg, " transform=\"rotate({}, {}, {})\"", deg, t.x, t.y);
                }
                let _ = writeln!(svg, ">{}</text>", escape(&t.content));
            }
        }
    }
}

impl HeatMap {
    /// Serialize the chart as an SVG document string.
    pub fn svg_string(&self, opts: &RenderOptions) -> String {
        write_svg(&self.scene(opts))
    }

    /// Write the SVG document to `output_svg_path`.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let svg = self.svg_string(opts);
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, svg)?;
        Ok(())
    }
}
