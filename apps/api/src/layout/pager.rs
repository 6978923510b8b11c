//! Pager — the page/cursor state machine that places blocks without ever
//! crossing the bottom limit.
#![allow(dead_code)]
//!
//! Cursor state is owned by the `Pager` value and threaded through every
//! call; there is no ambient/module-level position. Overflow is precluded by
//! pre-measurement: every placement measures first, breaks the page if the
//! block does not fit, then draws.

use tracing::warn;

use crate::layout::blocks::{Color, LayoutBlock, TableSpec, TextStyle};
use crate::layout::chrome::PageChrome;
use crate::layout::geometry::PageGeometry;
use crate::layout::wrap::{wrap_text, wrapped_height};
use crate::surface::{DocumentSurface, PageBreakObserver, SurfaceError};

/// Vertical gap after a placed table.
const TABLE_GAP: f32 = 12.0;
/// Vertical gap after an image block.
const IMAGE_GAP: f32 = 8.0;
/// Minimum room (head + one row) required before starting a table.
const MIN_TABLE_START: f32 = 48.0;

const TAG_PAD_X: f32 = 5.0;
const TAG_PAD_Y: f32 = 2.5;
const TAG_GAP: f32 = 6.0;
const TAG_ROW_GAP: f32 = 4.0;

pub struct Pager<'s> {
    surface: &'s mut dyn DocumentSurface,
    geometry: PageGeometry,
    chrome: PageChrome,
    cursor_y: f32,
    page_number: u32,
    header_drawn: bool,
    /// Whether implicit breaks (a block not fitting) redraw the header band.
    /// Explicit `new_page` calls pass their own choice.
    pub header_on_break: bool,
}

impl<'s> Pager<'s> {
    /// Starts the document on page 1. Title-page convention: footer bar but
    /// no header band and no page number.
    pub fn new(
        surface: &'s mut dyn DocumentSurface,
        geometry: PageGeometry,
        chrome: PageChrome,
    ) -> Self {
        surface.add_page();
        chrome.paint_footer(surface, &geometry, 1, false);
        let cursor_y = geometry.content_top(false);
        Pager {
            surface,
            geometry,
            chrome,
            cursor_y,
            page_number: 1,
            header_drawn: false,
            header_on_break: true,
        }
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Physical pages started on the underlying surface.
    pub fn physical_pages(&self) -> usize {
        self.surface.page_count()
    }

    /// Vertical space left on the current page.
    pub fn remaining(&self) -> f32 {
        self.geometry.bottom_limit() - self.cursor_y
    }

    /// Moves the cursor down without drawing. Never triggers a page break;
    /// the next placement will break if the gap consumed the page.
    pub fn add_gap(&mut self, gap: f32) {
        self.cursor_y += gap;
    }

    /// Starts a fresh page: footer always, header band only on request.
    pub fn new_page(&mut self, with_header: bool) {
        self.surface.add_page();
        self.page_number += 1;
        self.chrome
            .paint_footer(self.surface, &self.geometry, self.page_number, true);
        if with_header {
            self.chrome.paint_header(self.surface, &self.geometry);
        }
        self.header_drawn = with_header;
        self.cursor_y = self.geometry.content_top(with_header);
    }

    /// Breaks the page first if `height` does not fit below the cursor.
    pub fn ensure_space(&mut self, height: f32) {
        if self.cursor_y + height > self.geometry.bottom_limit() {
            self.new_page(self.header_on_break);
        }
    }

    /// Places one block, consuming it. A block whose text the surface cannot
    /// measure is skipped with a warning; the rest of the document proceeds.
    pub fn place_block(&mut self, block: LayoutBlock) -> Result<(), SurfaceError> {
        match block {
            LayoutBlock::Paragraph { text, style } => {
                let lines = match wrap_text(
                    &text,
                    self.geometry.content_width(),
                    &style,
                    &*self.surface,
                ) {
                    Ok(lines) => lines,
                    Err(SurfaceError::Unmeasurable(run)) => {
                        warn!(text = %run, "skipping unmeasurable paragraph");
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                };
                self.place_lines(&lines, &style);
                Ok(())
            }
            LayoutBlock::WrappedText { lines, style } => {
                self.place_lines(&lines, &style);
                Ok(())
            }
            LayoutBlock::Table(spec) => self.place_table(&spec),
            LayoutBlock::Image {
                image,
                width,
                height,
            } => {
                self.ensure_space(height + IMAGE_GAP);
                self.surface
                    .draw_image(image, self.geometry.margin_left, self.cursor_y, width, height);
                self.cursor_y += height + IMAGE_GAP;
                Ok(())
            }
            LayoutBlock::HorizontalTagList { items, style } => {
                self.place_tags(&items, &style);
                Ok(())
            }
        }
    }

    /// One line with an optional right-aligned tag (used for entry headings
    /// with bracketed dates). Skipped whole if unmeasurable.
    pub fn place_split_line(
        &mut self,
        left: &str,
        left_style: &TextStyle,
        right: Option<&str>,
        right_style: &TextStyle,
    ) {
        let line_h = left_style.size * self.geometry.line_height_factor;
        self.ensure_space(line_h);
        let baseline = self.cursor_y + left_style.size * 0.72;
        self.surface
            .draw_text(left, self.geometry.margin_left, baseline, left_style);
        if let Some(tag) = right {
            match self.surface.measure_text_width(tag, right_style) {
                Ok(width) => {
                    let x = self.geometry.content_right() - width;
                    self.surface.draw_text(tag, x, baseline, right_style);
                }
                Err(_) => warn!(tag, "skipping unmeasurable heading tag"),
            }
        }
        self.cursor_y += line_h;
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn place_lines(&mut self, lines: &[String], style: &TextStyle) {
        if lines.is_empty() {
            return;
        }
        let line_h = style.size * self.geometry.line_height_factor;
        // Whole-block fit first; taller-than-a-page blocks re-flow line by
        // line below.
        self.ensure_space(wrapped_height(lines.len(), style, &self.geometry));
        for line in lines {
            if self.cursor_y + line_h > self.geometry.bottom_limit() {
                self.new_page(self.header_on_break);
            }
            let baseline = self.cursor_y + style.size * 0.72;
            self.surface
                .draw_text(line, self.geometry.margin_left, baseline, style);
            self.cursor_y += line_h;
        }
    }

    fn place_table(&mut self, spec: &TableSpec) -> Result<(), SurfaceError> {
        if self.remaining() < MIN_TABLE_START {
            self.new_page(self.header_on_break);
        }
        let pages_before = self.surface.page_count();
        let mut observer = TableContinuation {
            chrome: &self.chrome,
            geometry: self.geometry,
            page_number: &mut self.page_number,
        };
        let final_y = self
            .surface
            .draw_table(spec, self.cursor_y, &mut observer)?;
        if self.surface.page_count() > pages_before {
            // Table continuation pages suppress the header band.
            self.header_drawn = false;
        }
        self.cursor_y = final_y + TABLE_GAP;
        Ok(())
    }

    fn place_tags(&mut self, items: &[String], style: &TextStyle) {
        let pill_h = style.size + 2.0 * TAG_PAD_Y;
        let row_h = pill_h + TAG_ROW_GAP;
        let max_width = self.geometry.content_width();

        // Greedy row layout; unmeasurable tags are dropped with a warning.
        let mut rows: Vec<Vec<(&str, f32)>> = Vec::new();
        let mut current: Vec<(&str, f32)> = Vec::new();
        let mut current_width = 0.0_f32;
        for item in items {
            let text_w = match self.surface.measure_text_width(item, style) {
                Ok(w) => w,
                Err(_) => {
                    warn!(tag = %item, "skipping unmeasurable tag");
                    continue;
                }
            };
            let pill_w = text_w + 2.0 * TAG_PAD_X;
            let needed = if current.is_empty() {
                pill_w
            } else {
                current_width + TAG_GAP + pill_w
            };
            if !current.is_empty() && needed > max_width {
                rows.push(std::mem::take(&mut current));
                current.push((item.as_str(), pill_w));
                current_width = pill_w;
            } else {
                current.push((item.as_str(), pill_w));
                current_width = needed;
            }
        }
        if !current.is_empty() {
            rows.push(current);
        }
        if rows.is_empty() {
            return;
        }

        self.ensure_space(rows.len() as f32 * row_h);
        for row in rows {
            if self.cursor_y + row_h > self.geometry.bottom_limit() {
                self.new_page(self.header_on_break);
            }
            let mut x = self.geometry.margin_left;
            for (text, pill_w) in row {
                self.surface
                    .draw_rect(x, self.cursor_y, pill_w, pill_h, Color::TINT);
                let baseline = self.cursor_y + TAG_PAD_Y + style.size * 0.72;
                self.surface.draw_text(text, x + TAG_PAD_X, baseline, style);
                x += pill_w + TAG_GAP;
            }
            self.cursor_y += row_h;
        }
    }
}

/// Chrome redraw for physical pages the surface starts mid-table. The header
/// band is suppressed on continuation pages so rows keep the vertical space.
struct TableContinuation<'a> {
    chrome: &'a PageChrome,
    geometry: PageGeometry,
    page_number: &'a mut u32,
}

impl PageBreakObserver for TableContinuation<'_> {
    fn on_physical_page_started(
        &mut self,
        surface: &mut dyn DocumentSurface,
        _physical_page: u32,
    ) -> f32 {
        *self.page_number += 1;
        self.chrome
            .paint_footer(surface, &self.geometry, *self.page_number, true);
        self.geometry.content_top(false)
    }
}
