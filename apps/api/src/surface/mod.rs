//! Document Surface — the primitive drawing/measurement boundary the layout
//! engine drives.
#![allow(dead_code)]
//!
//! The trait mirrors the rendering library's capabilities: pages, text,
//! rectangles, images, and a table primitive that owns its own row
//! pagination. Everything above this boundary is backend-agnostic; tests use
//! a recording surface, production uses [`pdf::PdfSurface`].

pub mod metrics;
pub mod pdf;
#[cfg(test)]
pub mod testing;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::blocks::{Color, TableSpec, TextStyle};

/// Failures at the rendering boundary.
///
/// `Unmeasurable` is recoverable: the caller skips the sub-block and the
/// document completes. Everything else is fatal to the report run.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("text cannot be measured by this surface: {0:?}")]
    Unmeasurable(String),
    #[error("image rejected: {0}")]
    Image(String),
    #[error("document assembly failed: {0}")]
    Assembly(String),
}

/// Raster format of an image handed to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

/// A decoded-enough image: raw container bytes plus pixel dimensions.
#[derive(Debug, Clone)]
pub struct ReportImage {
    pub format: RasterFormat,
    pub data: Vec<u8>,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Handle to an image previously registered with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub(crate) usize);

/// Callback invoked by the surface's table primitive each time table content
/// spills onto a new physical page. The implementation draws page chrome and
/// returns the Y (top-down) where table rows may resume.
pub trait PageBreakObserver {
    fn on_physical_page_started(&mut self, surface: &mut dyn DocumentSurface, page_number: u32)
        -> f32;
}

/// The drawing/measurement primitive API. All Y coordinates are top-down
/// layout coordinates; backends convert as needed.
pub trait DocumentSurface {
    /// Starts a new physical page. Drawing calls target the latest page.
    fn add_page(&mut self);

    /// Number of physical pages started so far.
    fn page_count(&self) -> usize;

    /// Draws a single run of text with its baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Filled rectangle with its top edge at `y`.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Advance width of `text` at the style's size, in points.
    /// Fails when the backing font cannot measure the run.
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Result<f32, SurfaceError>;

    /// Draws a table starting at `start_y`, breaking onto new physical pages
    /// as needed (column headers repeat on each continuation page). The
    /// observer is consulted on every page break for chrome redraw and the
    /// continuation Y. Returns the Y just below the last drawn row.
    fn draw_table(
        &mut self,
        table: &TableSpec,
        start_y: f32,
        observer: &mut dyn PageBreakObserver,
    ) -> Result<f32, SurfaceError>;

    /// Registers an image for later drawing. May be called at most a handful
    /// of times per document (the report only carries the logo).
    fn register_image(&mut self, image: &ReportImage) -> Result<ImageRef, SurfaceError>;

    /// Draws a registered image into the given box (top-down `y`).
    fn draw_image(&mut self, image: ImageRef, x: f32, y: f32, width: f32, height: f32);
}
