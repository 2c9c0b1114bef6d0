// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming plus the fixed cold-to-hot cell palette.

use skia_safe as skia;

/// Number of discrete colors in the cell palette, and therefore the number
/// of quantize buckets and legend tiles.
pub const PALETTE_LEN: usize = 9;

/// Fixed cold-blue to hot-brown palette, in bucket order.
pub fn heat_palette() -> [skia::Color; PALETTE_LEN] {
    [
        skia::Color::from_argb(255, 0x1d, 0x17, 0xd1),
        skia::Color::from_argb(255, 0x2f, 0x8b, 0xf5),
        skia::Color::from_argb(255, 0x1e, 0xab, 0xe3),
        skia::Color::from_argb(255, 0xb4, 0xde, 0xf0),
        skia::Color::from_argb(255, 0xeb, 0xe9, 0x81),
        skia::Color::from_argb(255, 0xed, 0x87, 0x1a),
        skia::Color::from_argb(255, 0xed, 0x1a, 0x1a),
        skia::Color::from_argb(255, 0x91, 0x16, 0x16),
        skia::Color::from_argb(255, 0x2e, 0x02, 0x24),
    ]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// One-pixel border around the whole surface.
    pub frame: skia::Color,
    pub title: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 255),
            title: skia::Color::from_argb(255, 20, 20, 30),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_bg: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_text: skia::Color::from_argb(255, 245, 245, 250),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 80, 120, 255),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            tooltip_bg: skia::Color::from_argb(230, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
