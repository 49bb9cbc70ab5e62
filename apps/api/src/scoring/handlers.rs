use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::ResponseWithQuestion;
use crate::models::score::ScoreRow;
use crate::scoring::dimensions::module_dimensions;
use crate::scoring::interpretations::{
    interpret_dimensions, module_profile, InterpretedDimension, ModuleProfile,
};
use crate::scoring::{calculate_assessment_scores, prepare_score_rows, ModuleScoringResult};
use crate::state::AppState;

/// Scores plus the recruiter-facing reading of each dimension.
#[derive(Debug, Serialize)]
pub struct ScoringReport {
    pub result: ModuleScoringResult,
    pub interpretations: Vec<InterpretedDimension>,
}

impl ScoringReport {
    fn from_result(result: ModuleScoringResult) -> Self {
        let interpretations = interpret_dimensions(&result.module_code, &result.dimensions);
        Self {
            result,
            interpretations,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub assessment_id: Uuid,
    pub module_code: String,
    pub responses: Vec<ResponseWithQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreSessionRequest {
    pub user_id: Uuid,
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ScoreSessionResponse {
    pub report: ScoringReport,
    pub rows_written: u64,
}

#[derive(Debug, Deserialize)]
pub struct ScoresQuery {
    pub user_id: Uuid,
    pub assessment_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct ModuleDimensionsResponse {
    pub module_code: String,
    pub dimensions: Vec<String>,
    pub profile: Option<ModuleProfile>,
}

/// POST /api/v1/scoring/preview
pub async fn handle_preview(
    Json(req): Json<PreviewRequest>,
) -> Result<Json<ScoringReport>, AppError> {
    let module_code = req.module_code.trim();
    if module_code.is_empty() {
        return Err(AppError::Validation("module_code must not be empty".to_string()));
    }

    let result = calculate_assessment_scores(req.assessment_id, module_code, &req.responses);
    Ok(Json(ScoringReport::from_result(result)))
}

/// POST /api/v1/assessments/:id/score
pub async fn handle_score_session(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
    Json(req): Json<ScoreSessionRequest>,
) -> Result<Json<ScoreSessionResponse>, AppError> {
    let assessment = state
        .score_store
        .find_assessment(assessment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assessment {assessment_id} not found")))?;

    let responses = state
        .score_store
        .load_session_responses(req.session_id, req.user_id, assessment_id)
        .await?;
    if responses.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "Session {} has no responses for assessment {}",
            req.session_id, assessment.code
        )));
    }

    let result = calculate_assessment_scores(assessment_id, &assessment.code, &responses);
    let rows = prepare_score_rows(req.user_id, assessment_id, &result);
    let rows_written = state.score_store.upsert_scores(&rows).await?;

    info!(
        "Scored session {} ({} responses, {} dimensions): total {} ({})",
        req.session_id,
        responses.len(),
        result.dimensions.len(),
        result.total_normalized,
        result.total_category
    );

    Ok(Json(ScoreSessionResponse {
        report: ScoringReport::from_result(result),
        rows_written,
    }))
}

/// GET /api/v1/scores
pub async fn handle_list_scores(
    State(state): State<AppState>,
    Query(params): Query<ScoresQuery>,
) -> Result<Json<Vec<ScoreRow>>, AppError> {
    let scores = state
        .score_store
        .list_scores(params.user_id, params.assessment_id)
        .await?;
    Ok(Json(scores))
}

/// GET /api/v1/modules/:code/dimensions
pub async fn handle_module_dimensions(
    Path(code): Path<String>,
) -> Json<ModuleDimensionsResponse> {
    Json(ModuleDimensionsResponse {
        dimensions: module_dimensions(&code)
            .iter()
            .map(|d| d.to_string())
            .collect(),
        profile: module_profile(&code),
        module_code: code,
    })
}
