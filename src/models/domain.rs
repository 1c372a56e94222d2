use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Lender program family, as tagged by the catalog import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "App Only")]
    AppOnly,
    #[serde(rename = "Full Financials")]
    FullFinancials,
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramType::AppOnly => f.write_str("App Only"),
            ProgramType::FullFinancials => f.write_str("Full Financials"),
        }
    }
}

/// A lender and its free-text eligibility criteria
///
/// Criteria are kept in a `BTreeMap` so that evaluation order (and therefore
/// the order of match details) is deterministic across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderRecord {
    pub id: String,
    pub name: String,
    pub program_type: ProgramType,
    #[serde(default)]
    pub criteria: BTreeMap<String, Option<String>>,
}

impl LenderRecord {
    /// Trimmed criterion value, or `None` when absent, null or blank
    pub fn criterion(&self, name: &str) -> Option<&str> {
        self.criteria
            .get(name)
            .and_then(|value| value.as_deref())
            .and_then(non_blank)
    }
}

/// Borrower answers keyed by criterion name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientProfile {
    values: HashMap<String, String>,
}

impl ClientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures
    pub fn with(mut self, criterion: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(criterion, value);
        self
    }

    pub fn insert(&mut self, criterion: impl Into<String>, value: impl Into<String>) {
        self.values.insert(criterion.into(), value.into());
    }

    /// Trimmed client value, or `None` when missing or blank
    pub fn value(&self, criterion: &str) -> Option<&str> {
        self.values.get(criterion).map(String::as_str).and_then(non_blank)
    }

    /// True when no criterion carries a non-blank answer
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Outcome of a single criterion comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "Match")]
    Match,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl From<bool> for MatchOutcome {
    fn from(matched: bool) -> Self {
        if matched {
            MatchOutcome::Match
        } else {
            MatchOutcome::NoMatch
        }
    }
}

/// Explanation for one evaluated (lender, criterion) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub criterion: String,
    pub result: MatchOutcome,
    pub reason: String,
    pub weight: f64,
}

/// Scored lender returned by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderMatch {
    pub lender_id: String,
    pub lender_name: String,
    pub program_type: ProgramType,
    pub match_score: f64,
    pub match_details: Vec<MatchDetail>,
}

/// Ranking knobs layered on top of the plain ranker
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub program_type: Option<ProgramType>,
    pub limit: Option<usize>,
}
