//! Static width tables for the base-14 Helvetica family.
#![allow(dead_code)]
//!
//! Widths are AFM advance widths in 1/1000 em, covering ASCII 0x20..=0x7E
//! (95 printable characters, index = char - 32). The report never embeds a
//! font program; base-14 metrics are exact for these glyphs, and non-ASCII
//! characters fall back to an average width (they render as `?` in WinAnsi
//! anyway).

use crate::layout::blocks::FontVariant;

/// Advance-width table for one font variant.
pub struct WidthTable {
    widths: [u16; 95],
    /// Fallback for codepoints outside 0x20..=0x7E.
    pub average_width: u16,
}

impl WidthTable {
    /// Measures a string at `size` points. Fails only for control
    /// characters, which the surface has no glyph for at all.
    pub fn measure(&self, text: &str, size: f32) -> Option<f32> {
        let mut total = 0u32;
        for c in text.chars() {
            if c.is_control() {
                return None;
            }
            let code = c as usize;
            total += if (32..=126).contains(&code) {
                u32::from(self.widths[code - 32])
            } else {
                u32::from(self.average_width)
            };
        }
        Some(total as f32 / 1000.0 * size)
    }
}

/// Helvetica (regular and oblique share advance widths).
static HELVETICA: WidthTable = WidthTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0     1     2     3     4     5     6     7     8     9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         278,  278,  584,  584,  584,  556, 1015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         278,  278,  278,  469,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         556,  556,  556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,
        // {     |     }     ~
         334,  260,  334,  584,
    ],
    average_width: 556,
};

/// Helvetica-Bold.
static HELVETICA_BOLD: WidthTable = WidthTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
         278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
        // 0     1     2     3     4     5     6     7     8     9
         556,  556,  556,  556,  556,  556,  556,  556,  556,  556,
        // :     ;     <     =     >     ?     @
         333,  333,  584,  584,  584,  611,  975,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
         722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
         722,  778,  667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,
        // [     \     ]     ^     _     `
         333,  278,  333,  584,  556,  333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
         556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
         611,  611,  611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,
        // {     |     }     ~
         389,  280,  389,  584,
    ],
    average_width: 556,
};

/// Returns the width table for a font variant.
pub fn width_table(variant: FontVariant) -> &'static WidthTable {
    match variant {
        FontVariant::Regular | FontVariant::Oblique => &HELVETICA,
        FontVariant::Bold => &HELVETICA_BOLD,
    }
}

/// PDF base font name for a variant.
pub fn base_font_name(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "Helvetica",
        FontVariant::Bold => "Helvetica-Bold",
        FontVariant::Oblique => "Helvetica-Oblique",
    }
}

/// Resource name under which the variant is registered on every page.
pub fn resource_name(variant: FontVariant) -> &'static str {
    match variant {
        FontVariant::Regular => "F1",
        FontVariant::Bold => "F2",
        FontVariant::Oblique => "F3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        let w = width_table(FontVariant::Regular).measure("", 10.0);
        assert_eq!(w, Some(0.0));
    }

    #[test]
    fn test_measure_space_width() {
        let w = width_table(FontVariant::Regular)
            .measure(" ", 10.0)
            .expect("measurable");
        assert!((w - 2.78).abs() < 1e-4, "space at 10pt should be 2.78, got {w}");
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Final Balanced Score";
        let regular = width_table(FontVariant::Regular)
            .measure(text, 10.0)
            .unwrap();
        let bold = width_table(FontVariant::Bold).measure(text, 10.0).unwrap();
        assert!(bold > regular);
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let table = width_table(FontVariant::Regular);
        let w = table.measure("é", 10.0).unwrap();
        assert!((w - f32::from(table.average_width) / 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_control_character_unmeasurable() {
        assert!(width_table(FontVariant::Regular)
            .measure("a\u{0007}b", 10.0)
            .is_none());
    }
}
