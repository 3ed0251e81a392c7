//! Axum route handlers for the ATS scoring API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{ResumeDocument, ScoreResult};
use crate::scoring::engine::{score_label, score_with_rubric, SUGGESTED_ACTION_VERBS};
use crate::scoring::keywords::extract_keywords;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: ResumeDocument,
    /// Empty or missing means "skip keyword analysis".
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub result: ScoreResult,
    /// Display band: Excellent / Good / Fair / Needs Improvement.
    pub score_label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ActionVerbsResponse {
    pub verbs: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores a resume against the rubric, optionally matching keywords
/// against a job description. Never fails: missing resume fields score
/// as empty.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let result = score_with_rubric(&request.resume, &request.job_description, &state.rubric);
    let label = score_label(result.score);
    Json(ScoreResponse {
        result,
        score_label: label,
    })
}

/// POST /api/v1/ats/keywords
///
/// Previews keyword extraction for arbitrary text, so a caller can see
/// what the matcher will look for before scoring against it.
pub async fn handle_keywords(
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let keywords = extract_keywords(&request.text);
    let count = keywords.len();
    Ok(Json(KeywordsResponse { keywords, count }))
}

/// GET /api/v1/ats/action-verbs
///
/// Returns the curated action-verb list for experience bullets.
pub async fn handle_action_verbs() -> Json<ActionVerbsResponse> {
    Json(ActionVerbsResponse {
        verbs: SUGGESTED_ACTION_VERBS,
    })
}
