//! Report compiler: one linear pass from aggregated candidate data to a
//! paginated PDF artifact.

pub mod chunk;
pub mod detail;
pub mod handlers;
pub mod tables;

use bytes::Bytes;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::layout::blocks::{Color, FontVariant, TextStyle};
use crate::layout::chrome::{LogoPlacement, PageChrome};
use crate::layout::{default_geometry, LayoutBlock, Pager};
use crate::models::candidate::{CandidateRecord, SkillKind};
use crate::models::job::JobRecord;
use crate::report::chunk::{chunk, SCORE_TABLE_CHUNK_SIZE, SKILL_MATRIX_CHUNK_SIZE};
use crate::report::detail::{education_sections, experience_sections, tag_sections, INFERRED_NOTE};
use crate::report::tables::{
    category_score_table, skill_matrix_table, total_score_table, weight_legend_table,
    ComposedTable,
};
use crate::scoring::select_categories;
use crate::surface::pdf::PdfSurface;
use crate::surface::{DocumentSurface, ReportImage, SurfaceError};

/// Logo height inside the header band.
const LOGO_BAND_HEIGHT: f32 = 32.0;

const TITLE_STYLE: TextStyle = TextStyle::new(FontVariant::Bold, 22.0, Color::BAND);
const SECTION_TITLE_STYLE: TextStyle = TextStyle::new(FontVariant::Bold, 12.0, Color::BLACK);
const SUBSECTION_STYLE: TextStyle = TextStyle::new(FontVariant::Bold, 11.0, Color::BLACK);
const ENTRY_HEADING_STYLE: TextStyle = TextStyle::new(FontVariant::Bold, 10.0, Color::BLACK);
const DATE_STYLE: TextStyle = TextStyle::new(FontVariant::Oblique, 9.0, Color::MUTED);
const BODY_STYLE: TextStyle = TextStyle::new(FontVariant::Regular, 10.0, Color::BLACK);
const TAG_STYLE: TextStyle = TextStyle::new(FontVariant::Regular, 9.0, Color::BLACK);
const NOTE_STYLE: TextStyle = TextStyle::new(FontVariant::Oblique, 8.0, Color::MUTED);

/// Report generation failures. `NothingToExport` is a caller signal, not a
/// layout defect; surface failures are fatal and yield no artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no candidates to export")]
    NothingToExport,
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// The finished document plus its suggested filename.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub bytes: Bytes,
    pub filename: String,
    pub page_count: usize,
}

/// Compiles the full report: title page, skill comparison matrices, per-
/// category score tables with the weight legend, the final balanced score
/// table, and one detail section per candidate.
///
/// The logo (if any) must already be fetched; page chrome is painted
/// synchronously many times from here on.
pub fn generate_report(
    candidates: &[CandidateRecord],
    job: &JobRecord,
    skill_kind: Option<SkillKind>,
    logo: Option<ReportImage>,
) -> Result<ReportArtifact, ReportError> {
    if candidates.is_empty() {
        return Err(ReportError::NothingToExport);
    }

    let geometry = default_geometry();
    let mut surface = PdfSurface::new(geometry);

    let logo_placement = logo.and_then(|img| match surface.register_image(&img) {
        Ok(image) => Some(LogoPlacement::fit_band(
            image,
            img.pixel_width,
            img.pixel_height,
            LOGO_BAND_HEIGHT,
        )),
        Err(e) => {
            warn!(error = %e, "logo rejected by surface; using text header");
            None
        }
    });

    let generated_on = Utc::now().format("%d %b %Y, %H:%M UTC").to_string();
    let chrome = PageChrome::new(job.job_title.clone(), generated_on.clone(), logo_placement);
    let selected = select_categories(&job.prompt);

    let page_count;
    {
        let mut pager = Pager::new(&mut surface, geometry, chrome);

        render_title_page(&mut pager, job, candidates.len(), &generated_on)?;

        // Skill comparison matrices: every chunk gets its own page set since
        // the table is one column per candidate.
        let kinds = match skill_kind {
            Some(kind) => vec![kind],
            None => vec![SkillKind::Soft, SkillKind::Technical],
        };
        for kind in kinds {
            for slice in chunk(candidates, SKILL_MATRIX_CHUNK_SIZE) {
                let composed = skill_matrix_table(&slice, kind);
                if composed.table.body.is_empty() {
                    continue;
                }
                pager.new_page(true);
                place_composed(&mut pager, composed)?;
            }
        }

        // Per-category raw/weighted tables over the selected categories.
        for &category in &selected {
            pager.new_page(true);
            for slice in chunk(candidates, SCORE_TABLE_CHUNK_SIZE) {
                place_composed(&mut pager, category_score_table(&slice, category))?;
            }
        }
        // Weight legend after the final category: reuses remaining space if
        // it fits, otherwise the pager pushes it to a fresh page.
        pager.place_block(LayoutBlock::Table(weight_legend_table(&selected)))?;

        // Final balanced score summary.
        pager.new_page(true);
        for slice in chunk(candidates, SCORE_TABLE_CHUNK_SIZE) {
            place_composed(&mut pager, total_score_table(&slice, &selected))?;
        }

        // One detail section per candidate, each on its own page boundary.
        for candidate in candidates {
            render_candidate_detail(&mut pager, candidate)?;
        }

        page_count = pager.physical_pages();
    }

    let bytes = surface.finish()?;
    info!(
        pages = page_count,
        candidates = candidates.len(),
        bytes = bytes.len(),
        "report compiled"
    );

    Ok(ReportArtifact {
        bytes: Bytes::from(bytes),
        filename: job.report_filename(),
        page_count,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_title_page(
    pager: &mut Pager<'_>,
    job: &JobRecord,
    candidate_count: usize,
    generated_on: &str,
) -> Result<(), ReportError> {
    pager.add_gap(110.0);
    pager.place_block(LayoutBlock::Paragraph {
        text: "Candidate Evaluation Report".to_string(),
        style: TITLE_STYLE,
    })?;
    pager.add_gap(14.0);
    pager.place_block(LayoutBlock::Paragraph {
        text: job.job_title.clone(),
        style: TextStyle::new(FontVariant::Bold, 14.0, Color::BLACK),
    })?;
    if !job.departments.is_empty() {
        pager.add_gap(4.0);
        pager.place_block(LayoutBlock::Paragraph {
            text: job.departments.join(" / "),
            style: TextStyle::muted(11.0),
        })?;
    }
    pager.add_gap(28.0);
    let selected = select_categories(&job.prompt);
    let labels: Vec<&str> = selected.iter().map(|c| c.label()).collect();
    pager.place_block(LayoutBlock::Paragraph {
        text: format!("Ranking criteria: {}", labels.join(", ")),
        style: BODY_STYLE,
    })?;
    pager.add_gap(4.0);
    pager.place_block(LayoutBlock::Paragraph {
        text: format!("Candidates evaluated: {candidate_count}"),
        style: BODY_STYLE,
    })?;
    pager.add_gap(4.0);
    pager.place_block(LayoutBlock::Paragraph {
        text: format!("Generated {generated_on}"),
        style: TextStyle::muted(9.0),
    })?;
    Ok(())
}

/// Places a composed table: title, optional legend note, then the table.
fn place_composed(pager: &mut Pager<'_>, composed: ComposedTable) -> Result<(), ReportError> {
    pager.place_block(LayoutBlock::Paragraph {
        text: composed.title,
        style: SECTION_TITLE_STYLE,
    })?;
    if let Some(note) = composed.legend_note {
        pager.place_block(LayoutBlock::Paragraph {
            text: note,
            style: NOTE_STYLE,
        })?;
    }
    pager.add_gap(4.0);
    pager.place_block(LayoutBlock::Table(composed.table))?;
    Ok(())
}

/// One candidate's narrative section. Forced onto a fresh page; every
/// sub-block re-checks remaining space on its own, so the section
/// self-paginates.
fn render_candidate_detail(
    pager: &mut Pager<'_>,
    candidate: &CandidateRecord,
) -> Result<(), ReportError> {
    pager.new_page(true);
    pager.place_block(LayoutBlock::Paragraph {
        text: format!("Candidate {}", candidate.candidate_id),
        style: TextStyle::new(FontVariant::Bold, 14.0, Color::BAND),
    })?;
    pager.add_gap(8.0);

    let profile = &candidate.detailed_profile;

    for section in tag_sections(profile) {
        pager.place_block(LayoutBlock::Paragraph {
            text: section.title.to_string(),
            style: SUBSECTION_STYLE,
        })?;
        pager.add_gap(2.0);
        pager.place_block(LayoutBlock::HorizontalTagList {
            items: section.tags,
            style: TAG_STYLE,
        })?;
        if section.has_inferred {
            pager.place_block(LayoutBlock::Paragraph {
                text: INFERRED_NOTE.to_string(),
                style: NOTE_STYLE,
            })?;
        }
        pager.add_gap(8.0);
    }

    let groups = experience_sections(profile)
        .into_iter()
        .chain(education_sections(profile));
    for group in groups {
        pager.place_block(LayoutBlock::Paragraph {
            text: group.title.to_string(),
            style: SUBSECTION_STYLE,
        })?;
        pager.add_gap(2.0);
        for entry in group.entries {
            pager.place_split_line(
                &entry.heading,
                &ENTRY_HEADING_STYLE,
                entry.date.as_deref(),
                &DATE_STYLE,
            );
            for line in entry.body {
                pager.place_block(LayoutBlock::Paragraph {
                    text: line,
                    style: BODY_STYLE,
                })?;
            }
            pager.add_gap(5.0);
        }
        pager.add_gap(6.0);
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
