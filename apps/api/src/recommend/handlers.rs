//! Axum route handlers for the recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Recommendation;
use crate::recommend::requester::get_intelligent_matches;
use crate::recommend::summary::normalize_summary;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub count: usize,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeSummaryRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeSummaryResponse {
    pub summary: String,
}

/// POST /api/v1/recommendations
///
/// Always 200: a blank query or a failed upstream call yields an empty list.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let recommendations =
        get_intelligent_matches(state.matcher.as_ref(), &request.query, &state.profiles).await;

    Json(RecommendResponse {
        query: request.query,
        count: recommendations.len(),
        recommendations,
    })
}

/// Upper bound on bio length accepted for normalization.
const MAX_BIO_CHARS: usize = 4000;

/// POST /api/v1/summaries/normalize
pub async fn handle_normalize_summary(
    State(state): State<AppState>,
    Json(request): Json<NormalizeSummaryRequest>,
) -> Result<Json<NormalizeSummaryResponse>, AppError> {
    if request.raw_text.chars().count() > MAX_BIO_CHARS {
        return Err(AppError::Validation(format!(
            "raw_text exceeds {MAX_BIO_CHARS} characters"
        )));
    }

    let summary = normalize_summary(&state.llm, &request.raw_text).await;
    Ok(Json(NormalizeSummaryResponse { summary }))
}
