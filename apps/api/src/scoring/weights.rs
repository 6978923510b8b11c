//! Static scoring weight tables.
#![allow(dead_code)]
//!
//! Two instances of the same aggregation contract:
//! - four résumé categories, each with exactly 3 weighted sub-criteria
//!   (weights sum to 1.0 per category);
//! - a flat 6-dimension vector for interview analysis (weights sum to 1.0).
//!
//! Not user-editable at runtime. Raw scores are looked up by the closed
//! `SubCriterionId` enum only, never by ad-hoc strings.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

/// One of the four top-level scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Skills,
    Experience,
    Education,
    CulturalFit,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 4] = [
        Category::Skills,
        Category::Experience,
        Category::Education,
        Category::CulturalFit,
    ];

    /// Canonical display label, matched against the recruiter prompt.
    pub fn label(self) -> &'static str {
        match self {
            Category::Skills => "Skills",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::CulturalFit => "Cultural Fit",
        }
    }

    /// The category's three weighted sub-criteria.
    pub fn sub_criteria(self) -> &'static [SubCriterion; 3] {
        match self {
            Category::Skills => &SKILLS_SUB_CRITERIA,
            Category::Experience => &EXPERIENCE_SUB_CRITERIA,
            Category::Education => &EDUCATION_SUB_CRITERIA,
            Category::CulturalFit => &CULTURAL_FIT_SUB_CRITERIA,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-criteria
// ────────────────────────────────────────────────────────────────────────────

/// Closed set of sub-criterion identifiers. `key()` is the wire key the
/// external ranking service uses in `rank_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubCriterionId {
    Relevance,
    Proficiency,
    AdditionalSkill,
    JobExperience,
    ProjectExperience,
    CoCurricular,
    DegreeRelevance,
    Institution,
    Achievements,
    Communication,
    Teamwork,
    Adaptability,
}

impl SubCriterionId {
    pub fn key(self) -> &'static str {
        match self {
            SubCriterionId::Relevance => "relevance",
            SubCriterionId::Proficiency => "proficiency",
            SubCriterionId::AdditionalSkill => "additional_skill",
            SubCriterionId::JobExperience => "job_experience",
            SubCriterionId::ProjectExperience => "project_experience",
            SubCriterionId::CoCurricular => "co_curricular",
            SubCriterionId::DegreeRelevance => "degree_relevance",
            SubCriterionId::Institution => "institution",
            SubCriterionId::Achievements => "achievements",
            SubCriterionId::Communication => "communication",
            SubCriterionId::Teamwork => "teamwork",
            SubCriterionId::Adaptability => "adaptability",
        }
    }
}

/// A weighted component within a category.
#[derive(Debug, Clone, Copy)]
pub struct SubCriterion {
    pub id: SubCriterionId,
    pub label: &'static str,
    pub weight: f64,
}

pub const SKILLS_SUB_CRITERIA: [SubCriterion; 3] = [
    SubCriterion {
        id: SubCriterionId::Relevance,
        label: "Relevance",
        weight: 0.50,
    },
    SubCriterion {
        id: SubCriterionId::Proficiency,
        label: "Proficiency",
        weight: 0.35,
    },
    SubCriterion {
        id: SubCriterionId::AdditionalSkill,
        label: "Additional Skill",
        weight: 0.15,
    },
];

pub const EXPERIENCE_SUB_CRITERIA: [SubCriterion; 3] = [
    SubCriterion {
        id: SubCriterionId::JobExperience,
        label: "Job Experience",
        weight: 0.50,
    },
    SubCriterion {
        id: SubCriterionId::ProjectExperience,
        label: "Projects",
        weight: 0.30,
    },
    SubCriterion {
        id: SubCriterionId::CoCurricular,
        label: "Co-curricular",
        weight: 0.20,
    },
];

pub const EDUCATION_SUB_CRITERIA: [SubCriterion; 3] = [
    SubCriterion {
        id: SubCriterionId::DegreeRelevance,
        label: "Degree Relevance",
        weight: 0.50,
    },
    SubCriterion {
        id: SubCriterionId::Institution,
        label: "Institution",
        weight: 0.25,
    },
    SubCriterion {
        id: SubCriterionId::Achievements,
        label: "Achievements",
        weight: 0.25,
    },
];

pub const CULTURAL_FIT_SUB_CRITERIA: [SubCriterion; 3] = [
    SubCriterion {
        id: SubCriterionId::Communication,
        label: "Communication",
        weight: 0.40,
    },
    SubCriterion {
        id: SubCriterionId::Teamwork,
        label: "Teamwork",
        weight: 0.35,
    },
    SubCriterion {
        id: SubCriterionId::Adaptability,
        label: "Adaptability",
        weight: 0.25,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Interview dimensions (flat instance of the same contract)
// ────────────────────────────────────────────────────────────────────────────

/// One of the six flat interview-analysis dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewDimension {
    Relevance,
    Clarity,
    Confidence,
    Engagement,
    Substance,
    JobFit,
}

impl InterviewDimension {
    pub fn key(self) -> &'static str {
        match self {
            InterviewDimension::Relevance => "relevance",
            InterviewDimension::Clarity => "clarity",
            InterviewDimension::Confidence => "confidence",
            InterviewDimension::Engagement => "engagement",
            InterviewDimension::Substance => "substance",
            InterviewDimension::JobFit => "job_fit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterviewDimension::Relevance => "Relevance",
            InterviewDimension::Clarity => "Clarity",
            InterviewDimension::Confidence => "Confidence",
            InterviewDimension::Engagement => "Engagement",
            InterviewDimension::Substance => "Substance",
            InterviewDimension::JobFit => "Job Fit",
        }
    }
}

/// A weighted interview dimension.
#[derive(Debug, Clone, Copy)]
pub struct InterviewWeight {
    pub dimension: InterviewDimension,
    pub weight: f64,
}

pub const INTERVIEW_DIMENSIONS: [InterviewWeight; 6] = [
    InterviewWeight {
        dimension: InterviewDimension::Relevance,
        weight: 0.15,
    },
    InterviewWeight {
        dimension: InterviewDimension::Clarity,
        weight: 0.20,
    },
    InterviewWeight {
        dimension: InterviewDimension::Confidence,
        weight: 0.20,
    },
    InterviewWeight {
        dimension: InterviewDimension::Engagement,
        weight: 0.15,
    },
    InterviewWeight {
        dimension: InterviewDimension::Substance,
        weight: 0.15,
    },
    InterviewWeight {
        dimension: InterviewDimension::JobFit,
        weight: 0.15,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_weights_sum_to_one() {
        for category in Category::ALL {
            let sum: f64 = category.sub_criteria().iter().map(|s| s.weight).sum();
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "{} weights sum to {sum}, expected 1.0",
                category.label()
            );
        }
    }

    #[test]
    fn test_interview_weights_sum_to_one() {
        let sum: f64 = INTERVIEW_DIMENSIONS.iter().map(|d| d.weight).sum();
        assert!((sum - 1.0).abs() < 1e-6, "interview weights sum to {sum}");
    }

    #[test]
    fn test_every_weight_in_unit_interval() {
        for category in Category::ALL {
            for sub in category.sub_criteria() {
                assert!(
                    sub.weight > 0.0 && sub.weight <= 1.0,
                    "{:?} weight {} out of (0, 1]",
                    sub.id,
                    sub.weight
                );
            }
        }
    }

    #[test]
    fn test_each_category_has_three_sub_criteria() {
        for category in Category::ALL {
            assert_eq!(category.sub_criteria().len(), 3);
        }
    }
}
