//! Layout block types consumed by the Pager.
#![allow(dead_code)]
//!
//! A `LayoutBlock` is built by exactly one composer, placed once, and
//! discarded. The set is intentionally small: single-column top-to-bottom
//! flow only.

use crate::surface::ImageRef;

// ────────────────────────────────────────────────────────────────────────────
// Text styling
// ────────────────────────────────────────────────────────────────────────────

/// Font variant within the report's single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Oblique,
}

/// RGB fill color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    /// Brand navy used for header/footer bands and table heads.
    pub const BAND: Color = Color {
        r: 0.16,
        g: 0.24,
        b: 0.42,
    };
    /// Light fill behind tag pills and alternating table rows.
    pub const TINT: Color = Color {
        r: 0.93,
        g: 0.94,
        b: 0.97,
    };
    pub const MUTED: Color = Color {
        r: 0.45,
        g: 0.45,
        b: 0.45,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub variant: FontVariant,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(variant: FontVariant, size: f32, color: Color) -> Self {
        TextStyle {
            variant,
            size,
            color,
        }
    }

    pub fn body() -> Self {
        TextStyle::new(FontVariant::Regular, 10.0, Color::BLACK)
    }

    pub fn bold(size: f32) -> Self {
        TextStyle::new(FontVariant::Bold, size, Color::BLACK)
    }

    pub fn muted(size: f32) -> Self {
        TextStyle::new(FontVariant::Oblique, size, Color::MUTED)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

/// Column sizing: `Auto` measures the widest cell; fixed widths are points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Auto,
    Fixed(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStyle {
    pub width: ColumnWidth,
    pub align: CellAlign,
}

impl ColumnStyle {
    pub const fn auto(align: CellAlign) -> Self {
        ColumnStyle {
            width: ColumnWidth::Auto,
            align,
        }
    }
}

/// A header cell; spans cover the grid positions to the right (`col_span`)
/// and below (`row_span`).
#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub text: String,
    pub col_span: u32,
    pub row_span: u32,
}

impl HeaderCell {
    pub fn plain(text: impl Into<String>) -> Self {
        HeaderCell {
            text: text.into(),
            col_span: 1,
            row_span: 1,
        }
    }

    pub fn spanning(text: impl Into<String>, col_span: u32, row_span: u32) -> Self {
        HeaderCell {
            text: text.into(),
            col_span,
            row_span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            bold: true,
        }
    }
}

/// Horizontal placement of a table that does not span the full column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Stretch columns to fill the content width.
    FullWidth,
    /// Natural column widths, flushed against the right margin.
    ShrinkRight,
}

/// The table shape handed to the Document Surface. The surface owns row
/// pagination; the Pager only supplies the start Y and the page-break
/// observer.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// One or two header rows; cells may span columns and rows.
    pub head: Vec<Vec<HeaderCell>>,
    pub body: Vec<Vec<Cell>>,
    pub columns: Vec<ColumnStyle>,
    pub layout: TableLayout,
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

/// The tagged union of everything the Pager can place.
#[derive(Debug, Clone)]
pub enum LayoutBlock {
    /// Free text, wrapped by the Pager at placement time.
    Paragraph { text: String, style: TextStyle },
    /// Pre-wrapped lines, drawn verbatim.
    WrappedText { lines: Vec<String>, style: TextStyle },
    Table(TableSpec),
    Image {
        image: ImageRef,
        width: f32,
        height: f32,
    },
    /// Inline tag pills, wrapping mid-line when the row is full.
    HorizontalTagList { items: Vec<String>, style: TextStyle },
}
