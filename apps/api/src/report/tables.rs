//! Table Composers — pure functions from aggregated data to table blocks.
#![allow(dead_code)]
//!
//! All composers are invariant to chunking: the same candidate slice always
//! yields identical table content; only the title text distinguishes a first
//! chunk from a continuation.

use std::collections::BTreeSet;

use crate::layout::blocks::{
    Cell, CellAlign, ColumnStyle, HeaderCell, TableLayout, TableSpec,
};
use crate::models::candidate::{CandidateRecord, SkillKind};
use crate::report::chunk::Chunk;
use crate::scoring::aggregate::{category_total, weighted_subscores};
use crate::scoring::{final_balanced_score, Category};

/// A composed table plus its presentation strings.
#[derive(Debug, Clone)]
pub struct ComposedTable {
    pub title: String,
    /// Legend note shown above the table, first chunk only.
    pub legend_note: Option<String>,
    pub table: TableSpec,
}

/// Cell marker: skill listed directly by the candidate.
const MARK_DIRECT: &str = "/";
/// Cell marker: skill only inferred from the profile.
const MARK_INFERRED: &str = "*";

const SKILL_LEGEND: &str = "/ = listed by candidate     * = inferred from profile";

// ────────────────────────────────────────────────────────────────────────────
// Skill-presence matrix
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal skill matrix for one chunk of candidates: one row per distinct
/// skill across the chunk, one column per candidate.
pub fn skill_matrix_table(
    chunk: &Chunk<'_, CandidateRecord>,
    kind: SkillKind,
) -> ComposedTable {
    let mut skills: BTreeSet<String> = BTreeSet::new();
    for candidate in chunk.items {
        let profile = &candidate.detailed_profile;
        skills.extend(profile.direct_skills(kind).iter().cloned());
        skills.extend(profile.inferred_skills(kind).iter().cloned());
    }

    let mut head_row = vec![HeaderCell::plain("Skill")];
    head_row.extend(
        chunk
            .items
            .iter()
            .map(|c| HeaderCell::plain(c.candidate_id.clone())),
    );

    let body: Vec<Vec<Cell>> = skills
        .iter()
        .map(|skill| {
            let mut row = vec![Cell::plain(skill.clone())];
            for candidate in chunk.items {
                let profile = &candidate.detailed_profile;
                let mark = if profile.direct_skills(kind).iter().any(|s| s == skill) {
                    MARK_DIRECT
                } else if profile.inferred_skills(kind).iter().any(|s| s == skill) {
                    MARK_INFERRED
                } else {
                    ""
                };
                row.push(Cell::plain(mark));
            }
            row
        })
        .collect();

    let mut columns = vec![ColumnStyle::auto(CellAlign::Left)];
    columns.extend(std::iter::repeat(ColumnStyle::auto(CellAlign::Center)).take(chunk.items.len()));

    let title = if chunk.is_first() {
        format!("{} Comparison Matrix", kind.label())
    } else {
        format!("{} Comparison Matrix (continued)", kind.label())
    };
    let legend_note = chunk.is_first().then(|| SKILL_LEGEND.to_string());

    ComposedTable {
        title,
        legend_note,
        table: TableSpec {
            head: vec![head_row],
            body,
            columns,
            layout: TableLayout::FullWidth,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-category score table
// ────────────────────────────────────────────────────────────────────────────

/// Raw/weighted score table for one category: two-row header with a grouped
/// Raw/Weighted pair per sub-criterion, bold category total per candidate.
pub fn category_score_table(
    chunk: &Chunk<'_, CandidateRecord>,
    category: Category,
) -> ComposedTable {
    let subs = category.sub_criteria();

    let mut head_top = vec![HeaderCell::spanning("Candidate", 1, 2)];
    for sub in subs {
        head_top.push(HeaderCell::spanning(sub.label, 2, 1));
    }
    head_top.push(HeaderCell::spanning("Total Score", 1, 2));

    let mut head_labels = Vec::with_capacity(subs.len() * 2);
    for _ in subs {
        head_labels.push(HeaderCell::plain("Raw"));
        head_labels.push(HeaderCell::plain("Weighted"));
    }

    let body: Vec<Vec<Cell>> = chunk
        .items
        .iter()
        .map(|candidate| {
            let mut row = vec![Cell::plain(candidate.candidate_id.clone())];
            for sub_score in weighted_subscores(candidate, category) {
                row.push(Cell::plain(format!("{:.1}", sub_score.raw)));
                row.push(Cell::plain(format!("{:.2}", sub_score.weighted)));
            }
            row.push(Cell::bold(format!(
                "{:.2}",
                category_total(candidate, category)
            )));
            row
        })
        .collect();

    let mut columns = vec![ColumnStyle::auto(CellAlign::Left)];
    columns.extend(
        std::iter::repeat(ColumnStyle::auto(CellAlign::Center)).take(subs.len() * 2),
    );
    columns.push(ColumnStyle::auto(CellAlign::Right));

    let title = if chunk.is_first() {
        format!("{} - Score Breakdown", category.label())
    } else {
        format!("{} - Score Breakdown (continued)", category.label())
    };

    ComposedTable {
        title,
        legend_note: None,
        table: TableSpec {
            head: vec![head_top, head_labels],
            body,
            columns,
            layout: TableLayout::FullWidth,
        },
    }
}

/// Sub-criterion → weight legend appended after the final category table.
/// Rendered at natural width against the right margin.
pub fn weight_legend_table(selected: &[Category]) -> TableSpec {
    let body: Vec<Vec<Cell>> = selected
        .iter()
        .flat_map(|category| {
            category.sub_criteria().iter().map(|sub| {
                vec![
                    Cell::plain(format!("{} - {}", category.label(), sub.label)),
                    Cell::plain(format!("{:.2}", sub.weight)),
                ]
            })
        })
        .collect();

    TableSpec {
        head: vec![vec![
            HeaderCell::plain("Sub-criterion"),
            HeaderCell::plain("Weight"),
        ]],
        body,
        columns: vec![
            ColumnStyle::auto(CellAlign::Left),
            ColumnStyle::auto(CellAlign::Right),
        ],
        layout: TableLayout::ShrinkRight,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Total balanced score table
// ────────────────────────────────────────────────────────────────────────────

/// Summary table: per-category totals over the selected categories and the
/// bold final balanced score.
pub fn total_score_table(
    chunk: &Chunk<'_, CandidateRecord>,
    selected: &[Category],
) -> ComposedTable {
    let mut head_row = vec![HeaderCell::plain("Candidate")];
    for category in selected {
        head_row.push(HeaderCell::plain(format!("{} Total", category.label())));
    }
    head_row.push(HeaderCell::plain("Final Balanced Score"));

    let body: Vec<Vec<Cell>> = chunk
        .items
        .iter()
        .map(|candidate| {
            let mut row = vec![Cell::plain(candidate.candidate_id.clone())];
            for &category in selected {
                row.push(Cell::plain(format!(
                    "{:.2}",
                    category_total(candidate, category)
                )));
            }
            row.push(Cell::bold(format!(
                "{:.2}",
                final_balanced_score(candidate, selected)
            )));
            row
        })
        .collect();

    let mut columns = vec![ColumnStyle::auto(CellAlign::Left)];
    columns
        .extend(std::iter::repeat(ColumnStyle::auto(CellAlign::Center)).take(selected.len()));
    columns.push(ColumnStyle::auto(CellAlign::Right));

    let title = if chunk.is_first() {
        "Final Balanced Scores".to_string()
    } else {
        "Final Balanced Scores (continued)".to_string()
    };

    ComposedTable {
        title,
        legend_note: None,
        table: TableSpec {
            head: vec![head_row],
            body,
            columns,
            layout: TableLayout::FullWidth,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{DetailedProfile, RankScore};
    use crate::report::chunk::chunk;

    fn make_candidate(id: &str, soft: &[&str], inferred_soft: &[&str]) -> CandidateRecord {
        CandidateRecord {
            candidate_id: id.to_string(),
            rank_score: RankScore::default(),
            detailed_profile: DetailedProfile {
                soft_skills: soft.iter().map(|s| s.to_string()).collect(),
                inferred_soft_skills: inferred_soft.iter().map(|s| s.to_string()).collect(),
                ..DetailedProfile::default()
            },
        }
    }

    fn make_scored(id: &str, entries: &[(&str, f64)]) -> CandidateRecord {
        let mut rank_score = RankScore::default();
        for (key, value) in entries {
            rank_score.raw.insert(key.to_string(), *value);
        }
        CandidateRecord {
            candidate_id: id.to_string(),
            rank_score,
            detailed_profile: DetailedProfile::default(),
        }
    }

    // ── skill matrix ────────────────────────────────────────────────────────

    #[test]
    fn test_skill_matrix_cell_markers() {
        let candidates = vec![
            make_candidate("C-001", &["Leadership"], &[]),
            make_candidate("C-002", &[], &["Leadership"]),
            make_candidate("C-003", &[], &[]),
        ];
        let chunks = chunk(&candidates, 15);
        let composed = skill_matrix_table(&chunks[0], SkillKind::Soft);

        assert_eq!(composed.table.body.len(), 1, "one distinct skill");
        let row = &composed.table.body[0];
        assert_eq!(row[0].text, "Leadership");
        assert_eq!(row[1].text, "/", "direct listing wins");
        assert_eq!(row[2].text, "*", "inferred only");
        assert_eq!(row[3].text, "", "absent");
    }

    #[test]
    fn test_skill_matrix_rows_sorted() {
        let candidates = vec![make_candidate("C-001", &["Writing", "Analysis", "Mentoring"], &[])];
        let chunks = chunk(&candidates, 15);
        let composed = skill_matrix_table(&chunks[0], SkillKind::Soft);
        let rows: Vec<&str> = composed.table.body.iter().map(|r| r[0].text.as_str()).collect();
        assert_eq!(rows, vec!["Analysis", "Mentoring", "Writing"]);
    }

    #[test]
    fn test_skill_matrix_legend_only_on_first_chunk() {
        let candidates: Vec<CandidateRecord> = (0..32)
            .map(|i| make_candidate(&format!("C-{i:03}"), &["Teamwork"], &[]))
            .collect();
        let chunks = chunk(&candidates, 15);
        assert_eq!(chunks.len(), 3);

        let first = skill_matrix_table(&chunks[0], SkillKind::Soft);
        let later = skill_matrix_table(&chunks[1], SkillKind::Soft);
        assert!(first.legend_note.is_some());
        assert!(later.legend_note.is_none());
        assert!(later.title.ends_with("(continued)"));
        // 15 candidate columns + the skill name column.
        assert_eq!(first.table.head[0].len(), 16);
        assert_eq!(later.table.head[0].len(), 16);
    }

    #[test]
    fn test_skill_matrix_content_invariant_to_chunk_position() {
        let candidates: Vec<CandidateRecord> = (0..2)
            .map(|i| make_candidate(&format!("C-{i:03}"), &["Teamwork"], &[]))
            .collect();
        // Same slice presented as a sole chunk and as a continuation chunk.
        let sole = Chunk { items: &candidates, index: 1, count: 1 };
        let continuation = Chunk { items: &candidates, index: 2, count: 3 };
        let a = skill_matrix_table(&sole, SkillKind::Soft);
        let b = skill_matrix_table(&continuation, SkillKind::Soft);
        assert_eq!(a.table.body.len(), b.table.body.len());
        for (ra, rb) in a.table.body.iter().zip(&b.table.body) {
            for (ca, cb) in ra.iter().zip(rb) {
                assert_eq!(ca.text, cb.text);
            }
        }
    }

    // ── category score table ────────────────────────────────────────────────

    #[test]
    fn test_category_table_worked_example() {
        let candidates = vec![make_scored(
            "C-001",
            &[("relevance", 0.8), ("proficiency", 0.6), ("additional_skill", 1.0)],
        )];
        let chunks = chunk(&candidates, 30);
        let composed = category_score_table(&chunks[0], Category::Skills);

        let row = &composed.table.body[0];
        assert_eq!(row[0].text, "C-001");
        assert_eq!(row[1].text, "0.8");
        assert_eq!(row[2].text, "0.40");
        assert_eq!(row[3].text, "0.6");
        assert_eq!(row[4].text, "0.21");
        assert_eq!(row[5].text, "1.0");
        assert_eq!(row[6].text, "0.15");
        assert_eq!(row[7].text, "0.76");
        assert!(row[7].bold, "category total column is bold");
    }

    #[test]
    fn test_category_table_two_row_header_shape() {
        let candidates = vec![make_scored("C-001", &[])];
        let chunks = chunk(&candidates, 30);
        let composed = category_score_table(&chunks[0], Category::Skills);

        assert_eq!(composed.table.head.len(), 2);
        // Candidate + 3 grouped sub-criteria + Total Score.
        assert_eq!(composed.table.head[0].len(), 5);
        assert_eq!(composed.table.head[0][0].row_span, 2);
        assert_eq!(composed.table.head[0][1].col_span, 2);
        assert_eq!(composed.table.head[1].len(), 6);
        // Grid is 1 + 6 + 1 columns.
        assert_eq!(composed.table.columns.len(), 8);
    }

    // ── weight legend ───────────────────────────────────────────────────────

    #[test]
    fn test_weight_legend_lists_selected_sub_criteria() {
        let spec = weight_legend_table(&[Category::Skills, Category::Education]);
        assert_eq!(spec.body.len(), 6);
        assert_eq!(spec.layout, TableLayout::ShrinkRight);
        assert_eq!(spec.body[0][0].text, "Skills - Relevance");
        assert_eq!(spec.body[0][1].text, "0.50");
    }

    // ── totals table ────────────────────────────────────────────────────────

    #[test]
    fn test_total_table_balanced_score_bold_last() {
        let candidates = vec![make_scored(
            "C-001",
            &[("relevance", 0.84), ("degree_relevance", 0.6)],
        )];
        let selected = [Category::Skills, Category::Education];
        let chunks = chunk(&candidates, 30);
        let composed = total_score_table(&chunks[0], &selected);

        let head: Vec<&str> = composed.table.head[0].iter().map(|h| h.text.as_str()).collect();
        assert_eq!(
            head,
            vec!["Candidate", "Skills Total", "Education Total", "Final Balanced Score"]
        );
        let row = &composed.table.body[0];
        assert_eq!(row[1].text, "0.42");
        assert_eq!(row[2].text, "0.30");
        assert_eq!(row[3].text, "0.36");
        assert!(row[3].bold);
    }
}
