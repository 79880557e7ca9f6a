use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::directory::catalog::{TOP_SKILL_QUERIES, UNIVERSITY_LIST};
use crate::directory::filter::filter_profiles;
use crate::errors::AppError;
use crate::models::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub query: String,
    pub count: usize,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub universities: &'static [&'static str],
    pub top_skill_queries: &'static [&'static str],
}

/// GET /api/v1/profiles?q=
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQuery>,
) -> Json<DirectoryResponse> {
    let profiles = filter_profiles(&state.profiles, &params.q);
    Json(DirectoryResponse {
        query: params.q,
        count: profiles.len(),
        profiles,
    })
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    state
        .profiles
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
}

/// GET /api/v1/universities
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        universities: UNIVERSITY_LIST,
        top_skill_queries: TOP_SKILL_QUERIES,
    })
}
