//! Report generation endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, SkillKind};
use crate::models::job::JobRecord;
use crate::report::generate_report;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub candidates: Vec<CandidateRecord>,
    pub job: JobRecord,
    /// Restrict the comparison matrices to one skill kind; both when absent.
    #[serde(default)]
    pub skill_kind: Option<SkillKind>,
}

/// POST /api/v1/reports/generate
///
/// Returns the compiled PDF. The logo is resolved (with its timeout) before
/// any page is drawn; compilation itself is CPU-bound and runs on the
/// blocking pool.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(req): Json<GenerateReportRequest>,
) -> Result<Response, AppError> {
    let report_id = Uuid::new_v4();
    info!(
        %report_id,
        candidates = req.candidates.len(),
        job = %req.job.job_title,
        "generating candidate report"
    );

    let logo = state.logo.fetch().await;

    let artifact = tokio::task::spawn_blocking(move || {
        generate_report(&req.candidates, &req.job, req.skill_kind, logo)
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report generation: {e}"))
    })??;

    info!(
        %report_id,
        pages = artifact.page_count,
        bytes = artifact.bytes.len(),
        filename = %artifact.filename,
        "report generated"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ),
    ];
    Ok((headers, artifact.bytes).into_response())
}
