//! Per-candidate detail sections: tag lists and structured content entries.
#![allow(dead_code)]
//!
//! This module only shapes the data; placement (and the per-sub-block space
//! re-checks) happens in the report renderer via the Pager.

use crate::models::candidate::{DetailedProfile, SkillKind};

/// Marks an inferred skill inside a tag list.
const INFERRED_SUFFIX: &str = " *";

/// Note rendered under a tag section containing inferred skills.
pub const INFERRED_NOTE: &str = "* inferred from profile";

/// A titled tag list for the skills part of a detail section.
#[derive(Debug, Clone)]
pub struct TagSection {
    pub title: &'static str,
    pub tags: Vec<String>,
    pub has_inferred: bool,
}

/// Skills tag sections for one candidate: soft, technical, languages.
/// Empty sections are omitted entirely.
pub fn tag_sections(profile: &DetailedProfile) -> Vec<TagSection> {
    let mut sections = Vec::new();

    for kind in [SkillKind::Soft, SkillKind::Technical] {
        let direct = profile.direct_skills(kind);
        let inferred = profile.inferred_skills(kind);
        if direct.is_empty() && inferred.is_empty() {
            continue;
        }
        let mut tags: Vec<String> = direct.to_vec();
        tags.extend(inferred.iter().map(|s| format!("{s}{INFERRED_SUFFIX}")));
        sections.push(TagSection {
            title: kind.label(),
            tags,
            has_inferred: !inferred.is_empty(),
        });
    }

    if !profile.languages.is_empty() {
        sections.push(TagSection {
            title: "Languages",
            tags: profile.languages.clone(),
            has_inferred: false,
        });
    }

    sections
}

/// One structured content entry: a heading line with an optional bracketed
/// date (right-aligned at render time) and the remaining detail lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredEntry {
    pub heading: String,
    pub date: Option<String>,
    pub body: Vec<String>,
}

/// Splits a raw profile entry. The date, when present, is the bracketed
/// suffix of the first line: `"Backend Intern at Acme [Jun 2023 - Aug 2023]"`.
pub fn parse_entry(raw: &str) -> StructuredEntry {
    let mut lines = raw.lines();
    let first = lines.next().unwrap_or("").trim();

    let (heading, date) = match (first.rfind('['), first.ends_with(']')) {
        (Some(open), true) if open + 1 < first.len() - 1 => {
            let date = first[open + 1..first.len() - 1].trim().to_string();
            let heading = first[..open].trim_end().to_string();
            if date.is_empty() || heading.is_empty() {
                (first.to_string(), None)
            } else {
                (heading, Some(date))
            }
        }
        _ => (first.to_string(), None),
    };

    let body: Vec<String> = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    StructuredEntry {
        heading,
        date,
        body,
    }
}

/// A titled group of structured entries.
#[derive(Debug, Clone)]
pub struct ContentSection {
    pub title: &'static str,
    pub entries: Vec<StructuredEntry>,
}

fn content_section(title: &'static str, raw: &[String]) -> Option<ContentSection> {
    if raw.is_empty() {
        return None;
    }
    Some(ContentSection {
        title,
        entries: raw.iter().map(|e| parse_entry(e)).collect(),
    })
}

/// Experience groups: work, projects, co-curricular. Empty groups omitted.
pub fn experience_sections(profile: &DetailedProfile) -> Vec<ContentSection> {
    [
        content_section("Work Experience", &profile.work_experience),
        content_section("Projects", &profile.projects),
        content_section("Co-curricular Activities", &profile.co_curricular_activities),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Education groups: education, certifications, awards. Empty groups omitted.
pub fn education_sections(profile: &DetailedProfile) -> Vec<ContentSection> {
    [
        content_section("Education", &profile.education),
        content_section("Certifications", &profile.certifications),
        content_section("Awards", &profile.awards),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_with_bracketed_date() {
        let entry = parse_entry("Backend Intern at Acme [Jun 2023 - Aug 2023]\nBuilt the billing service.\nOwned deploys.");
        assert_eq!(entry.heading, "Backend Intern at Acme");
        assert_eq!(entry.date.as_deref(), Some("Jun 2023 - Aug 2023"));
        assert_eq!(entry.body, vec!["Built the billing service.", "Owned deploys."]);
    }

    #[test]
    fn test_parse_entry_without_date() {
        let entry = parse_entry("BSc Computer Science, State University");
        assert_eq!(entry.heading, "BSc Computer Science, State University");
        assert_eq!(entry.date, None);
        assert!(entry.body.is_empty());
    }

    #[test]
    fn test_parse_entry_brackets_mid_line_not_a_date() {
        let entry = parse_entry("Built [redacted] integrations for partners");
        assert_eq!(entry.heading, "Built [redacted] integrations for partners");
        assert_eq!(entry.date, None);
    }

    #[test]
    fn test_parse_entry_empty_string() {
        let entry = parse_entry("");
        assert_eq!(entry.heading, "");
        assert_eq!(entry.date, None);
        assert!(entry.body.is_empty());
    }

    #[test]
    fn test_tag_sections_skip_empty_and_mark_inferred() {
        let profile = DetailedProfile {
            soft_skills: vec!["Communication".to_string()],
            inferred_soft_skills: vec!["Leadership".to_string()],
            ..DetailedProfile::default()
        };
        let sections = tag_sections(&profile);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Soft Skills");
        assert!(sections[0].has_inferred);
        assert_eq!(sections[0].tags, vec!["Communication", "Leadership *"]);
    }

    #[test]
    fn test_experience_sections_only_non_empty() {
        let profile = DetailedProfile {
            projects: vec!["Compiler side project".to_string()],
            ..DetailedProfile::default()
        };
        let sections = experience_sections(&profile);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Projects");
    }
}
