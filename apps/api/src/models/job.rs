#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The job a report is generated for. `prompt` is the recruiter's free-text
/// ranking instruction; it drives category selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub prompt: String,
}

impl JobRecord {
    /// Suggested artifact filename derived from the job title.
    /// Non-alphanumeric characters are replaced with underscores.
    pub fn report_filename(&self) -> String {
        let sanitized: String = self
            .job_title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("candidate_report_{sanitized}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename_replaces_non_alphanumeric() {
        let job = JobRecord {
            job_title: "Sr. Backend Engineer (Rust)".to_string(),
            departments: vec![],
            prompt: String::new(),
        };
        assert_eq!(
            job.report_filename(),
            "candidate_report_Sr__Backend_Engineer__Rust_.pdf"
        );
    }
}
