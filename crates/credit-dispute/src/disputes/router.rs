use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::analysis::{DisputeAnalysis, DisputeAnalyzer};
use super::report::CreditReport;
use super::scoring::{scoring_rubric, RubricEntry};
use crate::error::AppError;

/// Shared settings for the dispute endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisputeRouterState {
    /// Evaluation date used when a request does not name one.
    pub pinned_date: Option<NaiveDate>,
}

impl DisputeRouterState {
    fn resolve_today(&self, requested: Option<NaiveDate>) -> NaiveDate {
        requested
            .or(self.pinned_date)
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeParams {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

/// Router builder exposing report analysis and the published rubric.
pub fn dispute_router(state: DisputeRouterState) -> Router {
    Router::new()
        .route("/api/v1/disputes/analyze", post(analyze_handler))
        .route("/api/v1/disputes/rubric", get(rubric_handler))
        .with_state(state)
}

pub(crate) async fn analyze_handler(
    State(state): State<DisputeRouterState>,
    Query(params): Query<AnalyzeParams>,
    body: Bytes,
) -> Result<Json<DisputeAnalysis>, AppError> {
    let report = CreditReport::from_slice(&body)?;
    let analyzer = DisputeAnalyzer::new(state.resolve_today(params.today));
    Ok(Json(analyzer.analyze(&report)?))
}

pub(crate) async fn rubric_handler() -> Json<Vec<RubricEntry>> {
    Json(scoring_rubric())
}
