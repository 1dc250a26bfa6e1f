//! Axum route handlers for the career catalog.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::models::{CareerDetail, PathDetail};
use crate::errors::AppError;
use crate::extractors::{AppJson, AppQuery};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub programming_language: String,
    // Accepted for client compatibility; every response carries all three levels.
    #[allow(dead_code)]
    #[serde(default)]
    pub experience_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
    pub details: Vec<CareerDetail>,
}

#[derive(Debug, Deserialize)]
pub struct CareerQuery {
    pub career: String,
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub career: String,
    pub language: String,
    pub level: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareersResponse {
    pub careers: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /career-recommendation
///
/// Every career reachable with the requested language, with courses,
/// certifications and projects for all three levels.
pub async fn handle_recommendation(
    State(state): State<AppState>,
    AppJson(request): AppJson<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let details = state.catalog.by_language(&request.programming_language)?;

    Ok(Json(RecommendationResponse {
        recommendation: format!("{} careers found.", details.len()),
        details,
    }))
}

/// GET /career-to-languages?career=
pub async fn handle_languages_for_career(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CareerQuery>,
) -> Result<Json<LanguagesResponse>, AppError> {
    let languages = state.catalog.languages_for_career(&params.career)?;
    Ok(Json(LanguagesResponse { languages }))
}

/// GET /career-details?career=&language=&level=
pub async fn handle_career_details(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PathQuery>,
) -> Result<Json<PathDetail>, AppError> {
    let detail = state
        .catalog
        .detail(&params.career, &params.language, &params.level)?;
    Ok(Json(detail))
}

/// GET /all-career-paths
pub async fn handle_all_careers(State(state): State<AppState>) -> Json<CareersResponse> {
    Json(CareersResponse {
        careers: state.catalog.all_careers(),
    })
}
