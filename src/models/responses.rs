use crate::core::registry::CriterionDefinition;
use crate::models::domain::{LenderMatch, ProgramType};
use serde::{Deserialize, Serialize};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub request_id: uuid::Uuid,
    pub matches: Vec<LenderMatch>,
    pub total_lenders: usize,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub lenders: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Criterion vocabulary listing
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse {
    pub criteria: Vec<CriterionDefinition>,
    pub default_weight: f64,
}

/// Lender entry in the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderSummary {
    pub id: String,
    pub name: String,
    pub program_type: ProgramType,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
