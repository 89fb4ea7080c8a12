use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, Relation, ScoreBreakdown};

/// Response for the suggestions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub request_id: String,
    pub suggestions: Vec<MatchResult>,
    pub total_candidates: usize,
    pub total_results: usize,
}

/// Response for the classify endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub relation: Relation,
    pub label: &'static str,
}

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
