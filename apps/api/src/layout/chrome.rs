//! Header/footer painting for report pages.
#![allow(dead_code)]
//!
//! The chrome is decided once per report (logo resolved before any drawing
//! begins) and painted many times: by the Pager on every explicit page break
//! and by the table continuation observer on every physical break the
//! surface performs mid-table.

use crate::layout::blocks::{Color, FontVariant, TextStyle};
use crate::layout::geometry::PageGeometry;
use crate::surface::{DocumentSurface, ImageRef};

/// Title shown in the header band when no logo could be fetched.
const HEADER_FALLBACK_TEXT: &str = "Candidate Evaluation Report";

/// A registered logo scaled to fit the header band.
#[derive(Debug, Clone, Copy)]
pub struct LogoPlacement {
    pub image: ImageRef,
    pub width: f32,
    pub height: f32,
}

impl LogoPlacement {
    /// Scales pixel dimensions to a target band height, preserving aspect.
    pub fn fit_band(image: ImageRef, pixel_width: u32, pixel_height: u32, band: f32) -> Self {
        let h = band;
        let w = if pixel_height == 0 {
            band
        } else {
            band * pixel_width as f32 / pixel_height as f32
        };
        LogoPlacement {
            image,
            width: w,
            height: h,
        }
    }
}

/// Per-report page chrome: header band with logo-or-text, footer bar with
/// generation date and page number.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub job_title: String,
    pub generated_on: String,
    pub logo: Option<LogoPlacement>,
}

impl PageChrome {
    pub fn new(job_title: String, generated_on: String, logo: Option<LogoPlacement>) -> Self {
        PageChrome {
            job_title,
            generated_on,
            logo,
        }
    }

    /// Paints the full-bleed header band with the logo (or the text
    /// fallback) on the left and the job title on the right.
    pub fn paint_header(&self, surface: &mut dyn DocumentSurface, geometry: &PageGeometry) {
        let band = geometry.header_band_height;
        surface.draw_rect(0.0, 0.0, geometry.page_width, band, Color::BAND);

        match &self.logo {
            Some(logo) => {
                let y = (band - logo.height) / 2.0;
                surface.draw_image(logo.image, geometry.margin_left, y, logo.width, logo.height);
            }
            None => {
                let style = TextStyle::new(FontVariant::Bold, 13.0, Color::WHITE);
                let baseline = band / 2.0 + style.size * 0.35;
                surface.draw_text(HEADER_FALLBACK_TEXT, geometry.margin_left, baseline, &style);
            }
        }

        let title_style = TextStyle::new(FontVariant::Regular, 10.0, Color::WHITE);
        let width = text_width(surface, &self.job_title, &title_style);
        let x = (geometry.content_right() - width).max(geometry.margin_left);
        let baseline = band / 2.0 + title_style.size * 0.35;
        surface.draw_text(&self.job_title, x, baseline, &title_style);
    }

    /// Paints the footer bar inside the reserved band. The page number is
    /// suppressed on the title page.
    pub fn paint_footer(
        &self,
        surface: &mut dyn DocumentSurface,
        geometry: &PageGeometry,
        page_number: u32,
        show_page_number: bool,
    ) {
        let rule_y = geometry.bottom_limit() + 6.0;
        surface.draw_rect(
            geometry.margin_left,
            rule_y,
            geometry.content_width(),
            0.75,
            Color::BAND,
        );

        let style = TextStyle::new(FontVariant::Regular, 8.0, Color::MUTED);
        let baseline = rule_y + 4.0 + style.size;
        let note = format!("Generated {}", self.generated_on);
        surface.draw_text(&note, geometry.margin_left, baseline, &style);

        if show_page_number {
            let label = format!("Page {page_number}");
            let width = text_width(surface, &label, &style);
            surface.draw_text(&label, geometry.content_right() - width, baseline, &style);
        }
    }
}

/// Width of a chrome string. Chrome text is fixed ASCII, so measurement
/// cannot realistically fail; the estimate keeps right-alignment sane if a
/// surface still refuses.
fn text_width(surface: &dyn DocumentSurface, text: &str, style: &TextStyle) -> f32 {
    surface
        .measure_text_width(text, style)
        .unwrap_or_else(|_| text.len() as f32 * style.size * 0.5)
}
