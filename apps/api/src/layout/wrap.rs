//! Greedy word wrap against the Document Surface's text measurement.
#![allow(dead_code)]

use crate::layout::blocks::TextStyle;
use crate::layout::geometry::PageGeometry;
use crate::surface::{DocumentSurface, SurfaceError};

/// Word-wraps `text` to fit `max_width`. A word wider than the full line
/// gets a line of its own (the surface clips horizontally in that pathological
/// case; vertical bounds are what the pager guarantees). An empty or
/// whitespace-only string produces no lines.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    style: &TextStyle,
    surface: &dyn DocumentSurface,
) -> Result<Vec<String>, SurfaceError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let space_width = surface.measure_text_width(" ", style)?;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_width = surface.measure_text_width(word, style)?;
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        }
    }
    lines.push(current);
    Ok(lines)
}

/// Height of `line_count` wrapped lines at a style's size.
pub fn wrapped_height(line_count: usize, style: &TextStyle, geometry: &PageGeometry) -> f32 {
    line_count as f32 * style.size * geometry.line_height_factor
}
