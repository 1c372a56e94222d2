use crate::core::{registry::CriterionRegistry, scoring::score_lender};
use crate::models::{ClientProfile, LenderMatch, LenderRecord, MatchOptions};
use std::cmp::Ordering;
use std::sync::Arc;

/// Result of ranking a catalog for one client
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<LenderMatch>,
    /// Lenders that were scored (after the program type filter)
    pub total_lenders: usize,
}

/// Ranks lenders for a client profile
///
/// # Pipeline Stages
/// 1. Program type filter (optional)
/// 2. Per-lender weighted scoring
/// 3. Drop lenders without a positive score
/// 4. Stable descending sort, then limit
#[derive(Debug, Clone)]
pub struct Matcher {
    registry: Arc<CriterionRegistry>,
}

impl Matcher {
    pub fn new(registry: CriterionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn with_builtin_registry() -> Self {
        Self::new(CriterionRegistry::builtin())
    }

    pub fn registry(&self) -> &CriterionRegistry {
        &self.registry
    }

    /// Rank every lender in the catalog; ties keep catalog order
    pub fn rank(&self, lenders: &[LenderRecord], client: &ClientProfile) -> Vec<LenderMatch> {
        self.find_matches(lenders, client, &MatchOptions::default())
            .matches
    }

    /// Rank lenders with an optional program type filter and result limit
    pub fn find_matches(
        &self,
        lenders: &[LenderRecord],
        client: &ClientProfile,
        options: &MatchOptions,
    ) -> MatchResult {
        let candidates: Vec<&LenderRecord> = lenders
            .iter()
            .filter(|lender| {
                options
                    .program_type
                    .map_or(true, |program| lender.program_type == program)
            })
            .collect();
        let total_lenders = candidates.len();

        let mut matches: Vec<LenderMatch> = candidates
            .into_iter()
            .filter_map(|lender| {
                let scored = score_lender(lender, client, &self.registry);
                let match_score = scored.percentage();

                tracing::trace!(
                    lender_id = %lender.id,
                    evaluated = scored.details.len(),
                    "Scored lender at {:.2}",
                    match_score
                );

                if match_score > 0.0 {
                    Some(LenderMatch {
                        lender_id: lender.id.clone(),
                        lender_name: lender.name.clone(),
                        program_type: lender.program_type,
                        match_score,
                        match_details: scored.details,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        tracing::debug!(
            "Ranked {} of {} lenders with a positive score",
            matches.len(),
            total_lenders
        );

        MatchResult {
            matches,
            total_lenders,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_builtin_registry()
    }
}
