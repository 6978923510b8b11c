//! Score endpoints backing the UI's tables and stacked-bar charts.

use std::collections::BTreeMap;

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRecord;
use crate::models::job::JobRecord;
use crate::scoring::aggregate::{
    category_total, contribution_vector, final_balanced_score, grade_of, select_categories,
    weighted_subscores,
};
use crate::scoring::weights::{Category, INTERVIEW_DIMENSIONS};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidates: Vec<CandidateRecord>,
    pub job: JobRecord,
}

#[derive(Debug, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub label: &'static str,
    pub total: f64,
    /// Normalized sub-criterion contributions for the stacked visualization.
    pub contributions: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct CandidateScores {
    pub candidate_id: String,
    pub categories: Vec<CategoryBreakdown>,
    pub final_balanced_score: f64,
    pub grade: char,
    /// The upstream ranking score, echoed for comparison; may legitimately
    /// differ from the locally computed balanced score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_final_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub selected_categories: Vec<&'static str>,
    pub candidates: Vec<CandidateScores>,
}

/// POST /api/v1/scores
pub async fn handle_compute_scores(Json(req): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let selected = select_categories(&req.job.prompt);

    let candidates = req
        .candidates
        .iter()
        .map(|candidate| {
            let categories = selected
                .iter()
                .map(|&category| breakdown(candidate, category))
                .collect();
            let score = final_balanced_score(candidate, &selected);
            CandidateScores {
                candidate_id: candidate.candidate_id.clone(),
                categories,
                final_balanced_score: score,
                grade: grade_of(score).letter(),
                external_final_score: candidate.rank_score.final_score,
            }
        })
        .collect();

    Json(ScoreResponse {
        selected_categories: selected.iter().map(|c| c.label()).collect(),
        candidates,
    })
}

fn breakdown(candidate: &CandidateRecord, category: Category) -> CategoryBreakdown {
    let raws: Vec<f64> = weighted_subscores(candidate, category)
        .iter()
        .map(|s| s.raw)
        .collect();
    let weights: Vec<f64> = category.sub_criteria().iter().map(|s| s.weight).collect();
    CategoryBreakdown {
        category,
        label: category.label(),
        total: category_total(candidate, category),
        contributions: contribution_vector(&raws, &weights),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview instance
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InterviewScoreRequest {
    /// Raw dimension scores keyed by dimension id; missing dimensions are 0.
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
pub struct InterviewDimensionScore {
    pub dimension: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub raw: f64,
    pub weighted: f64,
    pub proportion: f64,
}

/// POST /api/v1/scores/interview
///
/// The flat 6-dimension instance of the aggregation contract.
pub async fn handle_interview_scores(
    Json(req): Json<InterviewScoreRequest>,
) -> Json<Vec<InterviewDimensionScore>> {
    let raws: Vec<f64> = INTERVIEW_DIMENSIONS
        .iter()
        .map(|d| {
            req.scores
                .get(d.dimension.key())
                .copied()
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        })
        .collect();
    let weights: Vec<f64> = INTERVIEW_DIMENSIONS.iter().map(|d| d.weight).collect();
    let proportions = contribution_vector(&raws, &weights);

    let response = INTERVIEW_DIMENSIONS
        .iter()
        .zip(raws.iter().zip(proportions.iter()))
        .map(|(dim, (&raw, &proportion))| InterviewDimensionScore {
            dimension: dim.dimension.key(),
            label: dim.dimension.label(),
            weight: dim.weight,
            raw,
            weighted: raw * dim.weight,
            proportion,
        })
        .collect();
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{DetailedProfile, RankScore};

    fn make_request() -> ScoreRequest {
        let mut rank_score = RankScore {
            final_score: Some(0.81),
            ..RankScore::default()
        };
        rank_score.raw.insert("relevance".to_string(), 0.84);
        rank_score.raw.insert("degree_relevance".to_string(), 0.6);
        ScoreRequest {
            candidates: vec![CandidateRecord {
                candidate_id: "C-001".to_string(),
                rank_score,
                detailed_profile: DetailedProfile::default(),
            }],
            job: JobRecord {
                job_title: "Data Engineer".to_string(),
                departments: vec![],
                prompt: "rank on Skills and Education".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_scores_endpoint_selected_subset() {
        let Json(response) = handle_compute_scores(Json(make_request())).await;
        assert_eq!(response.selected_categories, vec!["Skills", "Education"]);
        let candidate = &response.candidates[0];
        assert_eq!(candidate.candidate_id, "C-001");
        assert!((candidate.final_balanced_score - 0.36).abs() < 1e-9);
        assert_eq!(candidate.grade, 'F');
        assert_eq!(candidate.external_final_score, Some(0.81));
        for breakdown in &candidate.categories {
            let sum: f64 = breakdown.contributions.iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "contributions must normalize");
        }
    }

    #[tokio::test]
    async fn test_interview_scores_normalize() {
        let mut scores = BTreeMap::new();
        scores.insert("clarity".to_string(), 0.9);
        scores.insert("confidence".to_string(), 0.7);
        let Json(response) =
            handle_interview_scores(Json(InterviewScoreRequest { scores })).await;
        assert_eq!(response.len(), 6);
        let sum: f64 = response.iter().map(|d| d.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-6);
        let clarity = response.iter().find(|d| d.dimension == "clarity").unwrap();
        assert!((clarity.weighted - 0.18).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_interview_scores_all_missing_uniform() {
        let Json(response) = handle_interview_scores(Json(InterviewScoreRequest {
            scores: BTreeMap::new(),
        }))
        .await;
        for d in &response {
            assert!((d.proportion - 1.0 / 6.0).abs() < 1e-9);
        }
    }
}
