//! Score Aggregator — pure functions over the static weight tables.
#![allow(dead_code)]
//!
//! All functions are total over well-typed input: absent or NaN raw scores
//! are coerced to 0 before aggregation and never propagated.

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRecord;
use crate::scoring::weights::{Category, SubCriterionId};

/// Below this, a contribution denominator is treated as zero and the vector
/// falls back to uniform proportions.
const CONTRIBUTION_EPSILON: f64 = 1e-9;

// ────────────────────────────────────────────────────────────────────────────
// Weighted aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Raw and weighted score of one sub-criterion for one candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubScore {
    pub id: SubCriterionId,
    pub raw: f64,
    pub weighted: f64,
}

/// Per-sub-criterion breakdown for a category: `weighted = raw * weight`.
pub fn weighted_subscores(candidate: &CandidateRecord, category: Category) -> Vec<SubScore> {
    category
        .sub_criteria()
        .iter()
        .map(|sub| {
            let raw = candidate.rank_score.value(sub.id.key());
            SubScore {
                id: sub.id,
                raw,
                weighted: raw * sub.weight,
            }
        })
        .collect()
}

/// Sum of weighted sub-scores within a category. Missing raw scores count
/// as 0; never fails.
pub fn category_total(candidate: &CandidateRecord, category: Category) -> f64 {
    weighted_subscores(candidate, category)
        .iter()
        .map(|s| s.weighted)
        .sum()
}

/// Arithmetic mean of category totals across exactly the *selected*
/// categories, rounded to 2 decimals. Each selected category contributes
/// equally regardless of its sub-criterion count.
///
/// Returns 0.00 for an empty selection; `select_categories` never produces
/// one, but the degenerate case stays well-defined.
pub fn final_balanced_score(candidate: &CandidateRecord, selected: &[Category]) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    let sum: f64 = selected
        .iter()
        .map(|&category| category_total(candidate, category))
        .sum();
    round2(sum / selected.len() as f64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Contribution vectors
// ────────────────────────────────────────────────────────────────────────────

/// Normalized relative contributions for a stacked visualization.
///
/// `raw[i] = scores[i] * weights[i]`; proportions are `raw[i] / Σraw` when
/// the sum is meaningfully positive, otherwise uniform `1/n`. Non-finite
/// inputs count as 0. The result always sums to 1.0 (± float tolerance)
/// for non-empty input.
pub fn contribution_vector(scores: &[f64], weights: &[f64]) -> Vec<f64> {
    debug_assert_eq!(scores.len(), weights.len());
    let raw: Vec<f64> = scores
        .iter()
        .zip(weights.iter())
        .map(|(&s, &w)| {
            let product = s * w;
            if product.is_finite() {
                product
            } else {
                0.0
            }
        })
        .collect();

    let n = raw.len();
    if n == 0 {
        return Vec::new();
    }

    let sum: f64 = raw.iter().sum();
    if sum > CONTRIBUTION_EPSILON {
        raw.iter().map(|&r| r / sum).collect()
    } else {
        vec![1.0 / n as f64; n]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Grading
// ────────────────────────────────────────────────────────────────────────────

/// Letter grade over fixed score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::F => 'F',
        }
    }
}

/// Step function over band boundaries [0.8, 0.7, 0.6, 0.5, 0.4], inclusive
/// of each band's lower bound. Below 0.4 is F.
pub fn grade_of(score: f64) -> Grade {
    if score >= 0.8 {
        Grade::A
    } else if score >= 0.7 {
        Grade::B
    } else if score >= 0.6 {
        Grade::C
    } else if score >= 0.5 {
        Grade::D
    } else if score >= 0.4 {
        Grade::E
    } else {
        Grade::F
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category selection
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring match of each category's canonical label
/// against the recruiter prompt. No match ⇒ all four categories, so the
/// selection is never empty.
pub fn select_categories(prompt: &str) -> Vec<Category> {
    let prompt_lower = prompt.to_lowercase();
    let matched: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|category| prompt_lower.contains(&category.label().to_lowercase()))
        .collect();

    if matched.is_empty() {
        Category::ALL.to_vec()
    } else {
        matched
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
