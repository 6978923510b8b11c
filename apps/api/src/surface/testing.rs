//! Recording surface for layout tests.
//!
//! Measures text with the real Helvetica width tables but records draw calls
//! instead of producing bytes, so tests can assert on placement; in
//! particular that nothing is ever drawn past the page bottom limit.

use crate::layout::blocks::{Color, TableSpec, TextStyle};
use crate::layout::geometry::PageGeometry;
use crate::surface::metrics::width_table;
use crate::surface::{
    DocumentSurface, ImageRef, PageBreakObserver, RasterFormat, ReportImage, SurfaceError,
};

const CELL_PAD_X: f32 = 4.0;
const CELL_PAD_Y: f32 = 3.0;
const TABLE_FONT_SIZE: f32 = 9.0;
const TABLE_LINE_HEIGHT: f32 = TABLE_FONT_SIZE * 1.25;

/// One recorded draw call. `top` and `bottom` are the op's vertical extent in
/// top-down layout coordinates.
#[derive(Debug, Clone)]
pub struct RecordedOp {
    pub page: usize,
    pub kind: &'static str,
    pub top: f32,
    pub bottom: f32,
}

pub struct RecordingSurface {
    geometry: PageGeometry,
    page_count: usize,
    images: usize,
    pub ops: Vec<RecordedOp>,
}

impl RecordingSurface {
    pub fn new(geometry: PageGeometry) -> Self {
        RecordingSurface {
            geometry,
            page_count: 0,
            images: 0,
            ops: Vec::new(),
        }
    }

    pub fn sample_image() -> ReportImage {
        ReportImage {
            format: RasterFormat::Png,
            data: vec![0u8; 8],
            pixel_width: 64,
            pixel_height: 64,
        }
    }

    fn record(&mut self, kind: &'static str, top: f32, bottom: f32) {
        self.ops.push(RecordedOp {
            page: self.page_count,
            kind,
            top,
            bottom,
        });
    }
}

impl DocumentSurface for RecordingSurface {
    fn add_page(&mut self) {
        self.page_count += 1;
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn draw_text(&mut self, _text: &str, _x: f32, y: f32, style: &TextStyle) {
        // Baseline at y; glyphs extend roughly one ascent above it.
        self.record("text", y - style.size, y + style.size * 0.25);
    }

    fn draw_rect(&mut self, _x: f32, y: f32, _width: f32, height: f32, _color: Color) {
        self.record("rect", y, y + height);
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
        // Equal column widths are enough here; the pdf backend owns the real
        // sizing. Pagination behaviour is what the tests care about.
        let columns = table.columns.len().max(1);
        let col_width = self.geometry.content_width() / columns as f32;
        let head_height = table.head.len() as f32 * (TABLE_LINE_HEIGHT + 2.0 * CELL_PAD_Y);
        let limit = self.geometry.bottom_limit();

        let mut y = start_y;
        self.record("table-head", y, y + head_height);
        y += head_height;

        for row in &table.body {
            let mut lines_max = 1usize;
            for cell in row {
                let style = TextStyle::body();
                let width = self
                    .measure_text_width(&cell.text, &style)
                    .unwrap_or(col_width);
                let lines = (width / (col_width - 2.0 * CELL_PAD_X)).ceil().max(1.0) as usize;
                lines_max = lines_max.max(lines);
            }
            let row_height = lines_max as f32 * TABLE_LINE_HEIGHT + 2.0 * CELL_PAD_Y;

            if y + row_height > limit {
                self.add_page();
                let page_number = self.page_count as u32;
                y = observer.on_physical_page_started(self, page_number);
                self.record("table-head", y, y + head_height);
                y += head_height;
            }
            self.record("table-row", y, y + row_height);
            y += row_height;
        }
        Ok(y)
    }

    fn register_image(&mut self, _image: &ReportImage) -> Result<ImageRef, SurfaceError> {
        let r = ImageRef(self.images);
        self.images += 1;
        Ok(r)
    }

    fn draw_image(&mut self, _image: ImageRef, _x: f32, y: f32, _width: f32, height: f32) {
        self.record("image", y, y + height);
    }
}
