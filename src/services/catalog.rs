use crate::models::{LenderRecord, LenderSummary};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the lender catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate lender id: {0}")]
    DuplicateId(String),
}

/// Accepted on-disk shapes: a bare array or `{ "lenders": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { lenders: Vec<LenderRecord> },
    Bare(Vec<LenderRecord>),
}

/// Read-only snapshot of lender records
///
/// Lenders keep the order they were loaded in; the ranker relies on it to
/// break ties.
#[derive(Debug, Clone, Default)]
pub struct LenderCatalog {
    lenders: Vec<LenderRecord>,
    by_id: HashMap<String, usize>,
}

impl LenderCatalog {
    /// Build a catalog, rejecting duplicate lender ids
    pub fn from_lenders(lenders: Vec<LenderRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(lenders.len());
        for lender in &lenders {
            if !seen.insert(lender.id.as_str()) {
                return Err(CatalogError::DuplicateId(lender.id.clone()));
            }
        }

        let by_id = lenders
            .iter()
            .enumerate()
            .map(|(i, lender)| (lender.id.clone(), i))
            .collect();

        Ok(Self { lenders, by_id })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let lenders = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Wrapped { lenders } => lenders,
            CatalogFile::Bare(lenders) => lenders,
        };
        Self::from_lenders(lenders)
    }

    /// Load a catalog snapshot from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::IoError {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} lenders from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn lenders(&self) -> &[LenderRecord] {
        &self.lenders
    }

    pub fn get(&self, id: &str) -> Option<&LenderRecord> {
        self.by_id.get(id).map(|&i| &self.lenders[i])
    }

    pub fn summaries(&self) -> Vec<LenderSummary> {
        self.lenders
            .iter()
            .map(|lender| LenderSummary {
                id: lender.id.clone(),
                name: lender.name.clone(),
                program_type: lender.program_type,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }
}
