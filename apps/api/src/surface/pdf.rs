//! `pdf-writer` backend for the Document Surface.
#![allow(dead_code)]
//!
//! One `Content` stream per page, base-14 Helvetica (no font embedding,
//! WinAnsi encoding), logo embedding as an image XObject (JPEG passthrough,
//! PNG decoded + Flate-compressed, alpha as an SMask), page tree assembled
//! at `finish()` with compressed streams.
//!
//! The table primitive owns row pagination: rows are pre-wrapped and
//! pre-measured, continuation pages repeat the column header, and the
//! caller's `PageBreakObserver` paints chrome and supplies the resume Y.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use tracing::warn;

use crate::layout::blocks::{
    Cell, CellAlign, Color, ColumnWidth, FontVariant, HeaderCell, TableLayout, TableSpec,
    TextStyle,
};
use crate::layout::geometry::PageGeometry;
use crate::layout::wrap::wrap_text;
use crate::surface::metrics::{base_font_name, resource_name, width_table};
use crate::surface::{
    DocumentSurface, ImageRef, PageBreakObserver, RasterFormat, ReportImage, SurfaceError,
};

const TABLE_FONT_SIZE: f32 = 9.0;
const TABLE_LINE_HEIGHT: f32 = TABLE_FONT_SIZE * 1.25;
const CELL_PAD_X: f32 = 4.0;
const CELL_PAD_Y: f32 = 3.0;
const HEAD_ROW_HEIGHT: f32 = TABLE_LINE_HEIGHT + 2.0 * CELL_PAD_Y;
const MIN_COLUMN_WIDTH: f32 = 26.0;
const RULE_HEIGHT: f32 = 0.5;
/// Ascent fraction used to place baselines inside line boxes.
const BASELINE_FACTOR: f32 = 0.72;

struct EmbeddedImage {
    pdf_name: String,
    xobject: Ref,
}

pub struct PdfSurface {
    geometry: PageGeometry,
    pdf: Pdf,
    next_ref: i32,
    pages: Vec<Content>,
    images: Vec<EmbeddedImage>,
}

impl PdfSurface {
    pub fn new(geometry: PageGeometry) -> Self {
        PdfSurface {
            geometry,
            pdf: Pdf::new(),
            next_ref: 1,
            pages: Vec::new(),
            images: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_ref);
        self.next_ref += 1;
        r
    }

    /// PDF user-space Y for a top-down layout Y.
    fn flip(&self, y: f32) -> f32 {
        self.geometry.page_height - y
    }

    /// Assembles the document. Fails if no page was ever started.
    pub fn finish(mut self) -> Result<Vec<u8>, SurfaceError> {
        let n = self.pages.len();
        if n == 0 {
            return Err(SurfaceError::Assembly("document has no pages".to_string()));
        }

        let catalog_id = self.alloc();
        let pages_id = self.alloc();
        let page_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();

        let contents = std::mem::take(&mut self.pages);
        for (i, content) in contents.into_iter().enumerate() {
            let raw = content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
            self.pdf
                .stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        let variants = [FontVariant::Regular, FontVariant::Bold, FontVariant::Oblique];
        let mut font_refs: Vec<(&'static str, Ref)> = Vec::new();
        for variant in variants {
            let font_id = self.alloc();
            self.pdf
                .type1_font(font_id)
                .base_font(Name(base_font_name(variant).as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            font_refs.push((resource_name(variant), font_id));
        }

        self.pdf.catalog(catalog_id).pages(pages_id);
        self.pdf
            .pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for i in 0..n {
            let mut page = self.pdf.page(page_ids[i]);
            page.media_box(Rect::new(
                0.0,
                0.0,
                self.geometry.page_width,
                self.geometry.page_height,
            ))
            .parent(pages_id)
            .contents(content_ids[i]);
            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                for (name, font_ref) in &font_refs {
                    fonts.pair(Name(name.as_bytes()), *font_ref);
                }
            }
            if !self.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for image in &self.images {
                    xobjects.pair(Name(image.pdf_name.as_bytes()), image.xobject);
                }
            }
        }

        Ok(self.pdf.finish())
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn content(&mut self) -> Option<&mut Content> {
        self.pages.last_mut()
    }

    fn set_fill(content: &mut Content, color: Color) {
        content.set_fill_rgb(color.r, color.g, color.b);
    }

    /// Column widths after auto-measurement and layout scaling.
    fn resolve_column_widths(&self, spec: &TableSpec) -> Vec<f32> {
        let ncols = spec.columns.len();
        let mut widths = vec![MIN_COLUMN_WIDTH; ncols];

        for (i, column) in spec.columns.iter().enumerate() {
            if let ColumnWidth::Fixed(w) = column.width {
                widths[i] = w;
            }
        }

        // Auto columns grow to their widest cell (headers included for
        // unspanned cells).
        let bold = TextStyle::new(FontVariant::Bold, TABLE_FONT_SIZE, Color::BLACK);
        let regular = TextStyle::new(FontVariant::Regular, TABLE_FONT_SIZE, Color::BLACK);
        for placements in layout_head(&spec.head, ncols) {
            for (c, cell) in &placements {
                if cell.col_span == 1 && matches!(spec.columns[*c].width, ColumnWidth::Auto) {
                    if let Ok(w) = self.measure_text_width(&cell.text, &bold) {
                        widths[*c] = widths[*c].max(w + 2.0 * CELL_PAD_X);
                    }
                }
            }
        }
        for row in &spec.body {
            for (i, cell) in row.iter().enumerate().take(ncols) {
                if !matches!(spec.columns[i].width, ColumnWidth::Auto) {
                    continue;
                }
                let style = if cell.bold { &bold } else { &regular };
                if let Ok(w) = self.measure_text_width(&cell.text, style) {
                    // Cap the natural width; long narrative cells wrap.
                    let capped = (w + 2.0 * CELL_PAD_X).min(self.geometry.content_width() * 0.5);
                    widths[i] = widths[i].max(capped);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let content_width = self.geometry.content_width();
        match spec.layout {
            TableLayout::FullWidth => {
                // Stretch or shrink everything proportionally to fill the column.
                let scale = content_width / total;
                for w in &mut widths {
                    *w *= scale;
                }
            }
            TableLayout::ShrinkRight => {
                if total > content_width {
                    let scale = content_width / total;
                    for w in &mut widths {
                        *w *= scale;
                    }
                }
            }
        }
        widths
    }

    /// Wraps every body cell to its column width. A cell the font cannot
    /// measure is rendered empty (the rest of the table still draws).
    fn prepare_rows(&self, spec: &TableSpec, widths: &[f32]) -> Vec<PreparedRow> {
        let mut prepared = Vec::with_capacity(spec.body.len());
        for row in &spec.body {
            let mut cells: Vec<PreparedCell> = Vec::with_capacity(row.len());
            let mut max_lines = 1usize;
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let style = cell_style(cell);
                let available = (widths[i] - 2.0 * CELL_PAD_X).max(1.0);
                let lines = match wrap_text(&cell.text, available, &style, self) {
                    Ok(lines) => lines,
                    Err(_) => {
                        warn!(cell = %cell.text, "skipping unmeasurable table cell");
                        Vec::new()
                    }
                };
                max_lines = max_lines.max(lines.len());
                cells.push(PreparedCell {
                    lines,
                    bold: cell.bold,
                });
            }
            prepared.push(PreparedRow {
                height: max_lines as f32 * TABLE_LINE_HEIGHT + 2.0 * CELL_PAD_Y,
                cells,
            });
        }
        prepared
    }

    fn draw_table_head(
        &mut self,
        spec: &TableSpec,
        widths: &[f32],
        x0: f32,
        y: f32,
    ) {
        let total_w: f32 = widths.iter().sum();
        let head_rows = spec.head.len();
        if head_rows == 0 {
            return;
        }
        let head_h = head_rows as f32 * HEAD_ROW_HEIGHT;
        self.draw_rect(x0, y, total_w, head_h, Color::BAND);

        let style = TextStyle::new(FontVariant::Bold, TABLE_FONT_SIZE, Color::WHITE);
        let placements = layout_head(&spec.head, widths.len());
        for (r, row) in placements.iter().enumerate() {
            for (c, cell) in row {
                let span = (cell.col_span as usize).min(widths.len() - c);
                let cell_w: f32 = widths[*c..*c + span].iter().sum();
                let cell_h = cell.row_span as f32 * HEAD_ROW_HEIGHT;
                let cell_x: f32 = x0 + widths[..*c].iter().sum::<f32>();
                let cell_y = y + r as f32 * HEAD_ROW_HEIGHT;

                let text_w = self
                    .measure_text_width(&cell.text, &style)
                    .unwrap_or(0.0);
                let tx = cell_x + ((cell_w - text_w) / 2.0).max(CELL_PAD_X);
                let baseline = cell_y + cell_h / 2.0 + style.size * 0.35;
                self.draw_text(&cell.text, tx, baseline, &style);
            }
        }
    }

    fn draw_prepared_row(
        &mut self,
        row: &PreparedRow,
        columns: &[crate::layout::blocks::ColumnStyle],
        widths: &[f32],
        x0: f32,
        y: f32,
        zebra: bool,
    ) {
        let total_w: f32 = widths.iter().sum();
        if zebra {
            self.draw_rect(x0, y, total_w, row.height, Color::TINT);
        }
        for (i, cell) in row.cells.iter().enumerate() {
            let style = if cell.bold {
                TextStyle::new(FontVariant::Bold, TABLE_FONT_SIZE, Color::BLACK)
            } else {
                TextStyle::new(FontVariant::Regular, TABLE_FONT_SIZE, Color::BLACK)
            };
            let cell_x: f32 = x0 + widths[..i].iter().sum::<f32>();
            let mut baseline = y + CELL_PAD_Y + TABLE_FONT_SIZE * BASELINE_FACTOR;
            for line in &cell.lines {
                let text_w = self.measure_text_width(line, &style).unwrap_or(0.0);
                let tx = match columns[i].align {
                    CellAlign::Left => cell_x + CELL_PAD_X,
                    CellAlign::Center => cell_x + ((widths[i] - text_w) / 2.0).max(CELL_PAD_X),
                    CellAlign::Right => cell_x + (widths[i] - CELL_PAD_X - text_w).max(CELL_PAD_X),
                };
                self.draw_text(line, tx, baseline, &style);
                baseline += TABLE_LINE_HEIGHT;
            }
        }
        // Bottom rule under the row.
        self.draw_rect(
            x0,
            y + row.height - RULE_HEIGHT,
            total_w,
            RULE_HEIGHT,
            Color::MUTED,
        );
    }
}

struct PreparedCell {
    lines: Vec<String>,
    bold: bool,
}

struct PreparedRow {
    height: f32,
    cells: Vec<PreparedCell>,
}

fn cell_style(cell: &Cell) -> TextStyle {
    let variant = if cell.bold {
        FontVariant::Bold
    } else {
        FontVariant::Regular
    };
    TextStyle::new(variant, TABLE_FONT_SIZE, Color::BLACK)
}

/// Expands spanned header cells onto the column grid: for each head row,
/// the grid column every cell starts at, skipping positions covered by
/// spans from earlier rows.
fn layout_head<'a>(
    head: &'a [Vec<HeaderCell>],
    ncols: usize,
) -> Vec<Vec<(usize, &'a HeaderCell)>> {
    let nrows = head.len();
    let mut occupied = vec![vec![false; ncols]; nrows];
    let mut placements = Vec::with_capacity(nrows);
    for (r, row) in head.iter().enumerate() {
        let mut placed = Vec::new();
        let mut c = 0usize;
        for cell in row {
            while c < ncols && occupied[r][c] {
                c += 1;
            }
            if c >= ncols {
                break;
            }
            placed.push((c, cell));
            let row_end = (r + cell.row_span as usize).min(nrows);
            let col_end = (c + cell.col_span as usize).min(ncols);
            for occupied_row in occupied.iter_mut().take(row_end).skip(r) {
                for slot in occupied_row.iter_mut().take(col_end).skip(c) {
                    *slot = true;
                }
            }
            c = col_end;
        }
        placements.push(placed);
    }
    placements
}

/// WinAnsi bytes for a string: printable ASCII passes through, the Latin-1
/// range maps directly, everything else becomes `?`.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match code {
                0x20..=0x7E | 0xA0..=0xFF => code as u8,
                _ => b'?',
            }
        })
        .collect()
}

impl DocumentSurface for PdfSurface {
    fn add_page(&mut self) {
        self.pages.push(Content::new());
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let encoded = to_winansi(text);
        let font = resource_name(style.variant);
        let size = style.size;
        let color = style.color;
        let pdf_y = self.flip(y);
        let Some(content) = self.content() else {
            return;
        };
        Self::set_fill(content, color);
        content
            .begin_text()
            .set_font(Name(font.as_bytes()), size)
            .next_line(x, pdf_y)
            .show(Str(&encoded))
            .end_text();
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let pdf_y = self.flip(y + height);
        let Some(content) = self.content() else {
            return;
        };
        Self::set_fill(content, color);
        content.rect(x, pdf_y, width, height);
        content.fill_nonzero();
    }

    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Result<f32, SurfaceError> {
        width_table(style.variant)
            .measure(text, style.size)
            .ok_or_else(|| SurfaceError::Unmeasurable(text.to_string()))
    }

    fn draw_table(
        &mut self,
        table: &TableSpec,
        start_y: f32,
        observer: &mut dyn PageBreakObserver,
    ) -> Result<f32, SurfaceError> {
        if table.columns.is_empty() || table.body.is_empty() {
            return Ok(start_y);
        }
        let widths = self.resolve_column_widths(table);
        let x0 = match table.layout {
            TableLayout::FullWidth => self.geometry.margin_left,
            TableLayout::ShrinkRight => {
                self.geometry.content_right() - widths.iter().sum::<f32>()
            }
        };
        let head_h = table.head.len() as f32 * HEAD_ROW_HEIGHT;
        let prepared = self.prepare_rows(table, &widths);
        let limit = self.geometry.bottom_limit();

        let mut y = start_y;
        self.draw_table_head(table, &widths, x0, y);
        y += head_h;

        for (i, row) in prepared.iter().enumerate() {
            if y + row.height > limit {
                self.add_page();
                let page_number = self.page_count() as u32;
                y = observer.on_physical_page_started(&mut *self, page_number);
                self.draw_table_head(table, &widths, x0, y);
                y += head_h;
            }
            self.draw_prepared_row(row, &table.columns, &widths, x0, y, i % 2 == 1);
            y += row.height;
        }
        Ok(y)
    }

    fn register_image(&mut self, image: &ReportImage) -> Result<ImageRef, SurfaceError> {
        let xobject = self.alloc();
        let pdf_name = format!("Im{}", self.images.len() + 1);

        match image.format {
            RasterFormat::Jpeg => {
                let mut xobj = self.pdf.image_xobject(xobject, &image.data);
                xobj.filter(Filter::DctDecode);
                xobj.width(image.pixel_width as i32);
                xobj.height(image.pixel_height as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
            }
            RasterFormat::Png => {
                let decoded = image::load_from_memory_with_format(
                    &image.data,
                    image::ImageFormat::Png,
                )
                .map_err(|e| SurfaceError::Image(format!("png decode failed: {e}")))?;
                let rgba = decoded.to_rgba8();
                let (w, h) = (rgba.width(), rgba.height());
                let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

                let rgb_data: Vec<u8> =
                    rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
                let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

                let smask_ref = if has_alpha {
                    let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                    let compressed_alpha =
                        miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
                    let mask_ref = self.alloc();
                    let mut mask = self.pdf.image_xobject(mask_ref, &compressed_alpha);
                    mask.filter(Filter::FlateDecode);
                    mask.width(w as i32);
                    mask.height(h as i32);
                    mask.color_space().device_gray();
                    mask.bits_per_component(8);
                    Some(mask_ref)
                } else {
                    None
                };

                let mut xobj = self.pdf.image_xobject(xobject, &compressed_rgb);
                xobj.filter(Filter::FlateDecode);
                xobj.width(w as i32);
                xobj.height(h as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
                if let Some(mask_ref) = smask_ref {
                    xobj.s_mask(mask_ref);
                }
            }
        }

        self.images.push(EmbeddedImage {
            pdf_name,
            xobject,
        });
        Ok(ImageRef(self.images.len() - 1))
    }

    fn draw_image(&mut self, image: ImageRef, x: f32, y: f32, width: f32, height: f32) {
        let Some(embedded) = self.images.get(image.0) else {
            warn!(index = image.0, "draw_image with unregistered image");
            return;
        };
        let name = embedded.pdf_name.clone();
        let pdf_y = self.flip(y + height);
        let Some(content) = self.content() else {
            return;
        };
        content.save_state();
        content.transform([width, 0.0, 0.0, height, x, pdf_y]);
        content.x_object(Name(name.as_bytes()));
        content.restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::ColumnStyle;
    use crate::layout::geometry::default_geometry;

    struct PlainContinuation {
        geometry: PageGeometry,
        breaks: u32,
    }

    impl PageBreakObserver for PlainContinuation {
        fn on_physical_page_started(
            &mut self,
            _surface: &mut dyn DocumentSurface,
            _page_number: u32,
        ) -> f32 {
            self.breaks += 1;
            self.geometry.content_top(false)
        }
    }

    fn make_table(rows: usize) -> TableSpec {
        TableSpec {
            head: vec![vec![
                HeaderCell::plain("Candidate"),
                HeaderCell::plain("Score"),
            ]],
            body: (0..rows)
                .map(|i| vec![Cell::plain(format!("C-{i:03}")), Cell::bold("0.76")])
                .collect(),
            columns: vec![
                ColumnStyle::auto(CellAlign::Left),
                ColumnStyle::auto(CellAlign::Right),
            ],
            layout: TableLayout::FullWidth,
        }
    }

    #[test]
    fn test_finish_without_pages_fails() {
        let surface = PdfSurface::new(default_geometry());
        assert!(matches!(
            surface.finish(),
            Err(SurfaceError::Assembly(_))
        ));
    }

    #[test]
    fn test_finish_produces_pdf_bytes() {
        let mut surface = PdfSurface::new(default_geometry());
        surface.add_page();
        surface.draw_text("Hello report", 40.0, 60.0, &TextStyle::body());
        let bytes = surface.finish().expect("assembly");
        assert!(bytes.starts_with(b"%PDF-"), "not a PDF header");
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("Helvetica"));
    }

    #[test]
    fn test_short_table_stays_on_page() {
        let geometry = default_geometry();
        let mut surface = PdfSurface::new(geometry);
        surface.add_page();
        let mut observer = PlainContinuation { geometry, breaks: 0 };
        let final_y = surface
            .draw_table(&make_table(5), geometry.content_top(false), &mut observer)
            .expect("table");
        assert_eq!(observer.breaks, 0);
        assert_eq!(surface.page_count(), 1);
        assert!(final_y > geometry.content_top(false));
        assert!(final_y <= geometry.bottom_limit() + 1e-3);
    }

    #[test]
    fn test_long_table_breaks_and_notifies_observer() {
        let geometry = default_geometry();
        let mut surface = PdfSurface::new(geometry);
        surface.add_page();
        let mut observer = PlainContinuation { geometry, breaks: 0 };
        let final_y = surface
            .draw_table(&make_table(200), geometry.content_top(false), &mut observer)
            .expect("table");
        assert!(observer.breaks >= 1, "200 rows must spill at least once");
        assert_eq!(surface.page_count(), 1 + observer.breaks as usize);
        assert!(final_y <= geometry.bottom_limit() + 1e-3);
    }

    #[test]
    fn test_two_row_header_spans_resolve() {
        // Candidate spans both rows; one sub-criterion group spans two
        // columns; the second head row only labels the grouped columns.
        let head = vec![
            vec![
                HeaderCell::spanning("Candidate", 1, 2),
                HeaderCell::spanning("Relevance", 2, 1),
                HeaderCell::spanning("Total Score", 1, 2),
            ],
            vec![HeaderCell::plain("Raw"), HeaderCell::plain("Weighted")],
        ];
        let placements = layout_head(&head, 4);
        assert_eq!(placements[0].len(), 3);
        assert_eq!(placements[0][0].0, 0);
        assert_eq!(placements[0][1].0, 1);
        assert_eq!(placements[0][2].0, 3);
        // Second row fills the two grouped grid columns only.
        let cols: Vec<usize> = placements[1].iter().map(|(c, _)| *c).collect();
        assert_eq!(cols, vec![1, 2]);
    }

    #[test]
    fn test_to_winansi_replaces_unsupported() {
        assert_eq!(to_winansi("abc"), b"abc".to_vec());
        assert_eq!(to_winansi("日本"), b"??".to_vec());
        // Latin-1 passes through.
        assert_eq!(to_winansi("é"), vec![0xE9]);
    }

    #[test]
    fn test_register_jpeg_passthrough() {
        let mut surface = PdfSurface::new(default_geometry());
        surface.add_page();
        let image = ReportImage {
            format: RasterFormat::Jpeg,
            data: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
            pixel_width: 2,
            pixel_height: 2,
        };
        let r = surface.register_image(&image).expect("jpeg passthrough");
        surface.draw_image(r, 40.0, 40.0, 32.0, 32.0);
        let bytes = surface.finish().expect("assembly");
        assert!(String::from_utf8_lossy(&bytes).contains("DCTDecode"));
    }
}
