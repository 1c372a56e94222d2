use crate::models::domain::{ClientProfile, ProgramType};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to rank the lender catalog for a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(custom(function = "validate_client"))]
    pub client: ClientProfile,
    #[serde(default)]
    pub program_type: Option<ProgramType>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<usize>,
}

fn validate_client(client: &ClientProfile) -> Result<(), ValidationError> {
    if client.is_blank() {
        return Err(ValidationError::new("empty_client_profile"));
    }
    Ok(())
}
