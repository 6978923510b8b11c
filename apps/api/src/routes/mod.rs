pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::report::handlers as report_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API: JSON aggregates for the UI's tables and charts
        .route("/api/v1/scores", post(scoring_handlers::handle_compute_scores))
        .route(
            "/api/v1/scores/interview",
            post(scoring_handlers::handle_interview_scores),
        )
        // Report API: compiled PDF artifact
        .route(
            "/api/v1/reports/generate",
            post(report_handlers::handle_generate_report),
        )
        .with_state(state)
}
