// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ClientProfile, LenderMatch, LenderRecord, MatchDetail, MatchOptions, MatchOutcome, ProgramType};
pub use requests::FindMatchesRequest;
pub use responses::{CriteriaResponse, ErrorResponse, FindMatchesResponse, HealthResponse, LenderSummary};
