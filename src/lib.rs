//! Lender Match - explainable criteria matching for equipment-finance lenders
//!
//! This library scores a borrower profile against a catalog of lenders whose
//! eligibility rules are free text, and ranks the lenders by weighted match
//! percentage with a per-criterion explanation.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{score_lender, CriterionRegistry, Matcher, MatchResult};
pub use crate::models::{ClientProfile, LenderMatch, LenderRecord, MatchDetail, MatchOutcome, ProgramType};
pub use crate::services::LenderCatalog;
