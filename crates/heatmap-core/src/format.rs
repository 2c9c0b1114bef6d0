// File: crates/heatmap-core/src/format.rs
// Summary: Text formatting for axis ticks, the subtitle, and tooltip lines.

use chrono::Month;

/// English month name for a one-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// The twelve canonical month names in calendar order.
pub fn month_names() -> [&'static str; 12] {
    let mut names = [""; 12];
    for (i, slot) in names.iter_mut().enumerate() {
        // months 1..=12 always resolve
        *slot = month_name(i as u32 + 1).unwrap_or("");
    }
    names
}

/// Signed variance string: explicit `+` for positive values, the bare
/// numeric rendering otherwise (`-0.5` stays `-0.5`, `0` stays `0`).
pub fn format_variance(v: f64) -> String {
    if v > 0.0 {
        format!("+{}", v)
    } else {
        format!("{}", v)
    }
}

/// One-decimal variance used by the tooltip. Rounds first, then applies
/// the sign rule, so `+0.04` renders as `0.0` rather than `+0.0`.
pub fn format_variance_fixed(v: f64) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded > 0.0 {
        format!("+{:.1}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
