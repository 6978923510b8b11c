//! Page geometry for the report surface.
#![allow(dead_code)]
//!
//! All Y coordinates in the layout engine run top-down (0 at the top edge,
//! increasing toward the bottom), in PDF points. The PDF backend flips them
//! at draw time. A block may be placed at `y` only while
//! `y + height <= bottom_limit()`.

use serde::{Deserialize, Serialize};

/// Layout parameters for a single report page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Height of the full-bleed header band, when drawn.
    pub header_band_height: f32,
    /// Gap between the header band and the first content line.
    pub header_gap: f32,
    /// Vertical space above the bottom margin reserved for the footer bar.
    pub footer_reserve: f32,
    /// Multiplier applied to font size for line advance.
    pub line_height_factor: f32,
}

/// Default geometry: A4 portrait with 40pt side margins.
pub fn default_geometry() -> PageGeometry {
    PageGeometry {
        page_width: 595.28,
        page_height: 841.89,
        margin_left: 40.0,
        margin_right: 40.0,
        margin_top: 48.0,
        margin_bottom: 40.0,
        header_band_height: 56.0,
        header_gap: 16.0,
        footer_reserve: 28.0,
        line_height_factor: 1.3,
    }
}

impl PageGeometry {
    /// Usable column width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Lowest Y (top-down) a block may extend to.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin_bottom - self.footer_reserve
    }

    /// First content Y on a fresh page.
    pub fn content_top(&self, header_drawn: bool) -> f32 {
        if header_drawn {
            self.header_band_height + self.header_gap
        } else {
            self.margin_top
        }
    }

    pub fn content_right(&self) -> f32 {
        self.page_width - self.margin_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_sanity() {
        let g = default_geometry();
        assert!(g.content_width() > 400.0 && g.content_width() < g.page_width);
        assert!(g.bottom_limit() < g.page_height);
        assert!(g.content_top(true) > g.content_top(false) - g.margin_top + 0.0);
        assert!(g.content_top(true) > g.margin_top);
    }

    #[test]
    fn test_bottom_limit_reserves_footer() {
        let g = default_geometry();
        assert!(
            (g.page_height - g.bottom_limit() - g.margin_bottom - g.footer_reserve).abs() < 1e-6
        );
    }
}
