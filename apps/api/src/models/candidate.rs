#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A candidate as supplied by the external ranking/profiling service.
/// This core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(default)]
    pub rank_score: RankScore,
    #[serde(default)]
    pub detailed_profile: DetailedProfile,
}

/// Raw per-sub-criterion scores keyed by sub-criterion identifier.
///
/// The map is string-keyed only at the serde boundary; all lookups go through
/// `RankScore::value` with a key taken from the closed `SubCriterionId` enum,
/// so a missing or non-finite entry is always coerced to 0 in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankScore {
    /// Ranking score computed upstream. Preserved verbatim; the report's
    /// final balanced score is computed locally over the selected categories
    /// and may legitimately diverge from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
    #[serde(flatten)]
    pub raw: BTreeMap<String, f64>,
}

impl RankScore {
    /// Raw score for a sub-criterion key. Missing or NaN entries are 0.
    pub fn value(&self, key: &str) -> f64 {
        self.raw
            .get(key)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Skill kind rendered in the comparison matrices and detail sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Soft,
    Technical,
}

impl SkillKind {
    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Soft => "Soft Skills",
            SkillKind::Technical => "Technical Skills",
        }
    }
}

/// The narrative profile extracted upstream. All fields default to empty so
/// partial payloads deserialize cleanly; empty sections are simply skipped
/// by the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedProfile {
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub inferred_soft_skills: Vec<String>,
    #[serde(default)]
    pub inferred_technical_skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub co_curricular_activities: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
}

impl DetailedProfile {
    /// Directly listed skills for a kind.
    pub fn direct_skills(&self, kind: SkillKind) -> &[String] {
        match kind {
            SkillKind::Soft => &self.soft_skills,
            SkillKind::Technical => &self.technical_skills,
        }
    }

    /// AI-inferred skills for a kind.
    pub fn inferred_skills(&self, kind: SkillKind) -> &[String] {
        match kind {
            SkillKind::Soft => &self.inferred_soft_skills,
            SkillKind::Technical => &self.inferred_technical_skills,
        }
    }
}
