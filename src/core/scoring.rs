use crate::core::registry::CriterionRegistry;
use crate::models::{ClientProfile, LenderRecord, MatchDetail, MatchOutcome};

/// Weighted outcome of matching one client against one lender
#[derive(Debug, Clone, PartialEq)]
pub struct LenderScore {
    /// Sum of weights of matched criteria
    pub score: f64,
    /// Sum of weights of every evaluated criterion
    pub max_possible: f64,
    pub details: Vec<MatchDetail>,
}

impl LenderScore {
    /// Percentage score (0-100); zero when nothing was comparable
    pub fn percentage(&self) -> f64 {
        if self.max_possible > 0.0 {
            self.score / self.max_possible * 100.0
        } else {
            0.0
        }
    }
}

/// Score a lender's criteria against a client profile
///
/// A criterion is evaluated only when both the lender and the client supply a
/// non-blank value; otherwise it adds nothing to either total. Once evaluated,
/// its weight always counts toward `max_possible`, including when one side
/// could not be parsed.
pub fn score_lender(
    lender: &LenderRecord,
    client: &ClientProfile,
    registry: &CriterionRegistry,
) -> LenderScore {
    let mut score = 0.0;
    let mut max_possible = 0.0;
    let mut details = Vec::new();

    for name in lender.criteria.keys() {
        let Some(lender_value) = lender.criterion(name) else {
            continue;
        };
        let Some(client_value) = client.value(name) else {
            continue;
        };

        let rule = registry.resolve(name);
        let comparison = rule.kind.compare(client_value, lender_value);

        if let Some(err) = &comparison.failure {
            tracing::debug!(
                lender_id = %lender.id,
                criterion = %name,
                "Unparsable criterion value: {}",
                err
            );
        }

        max_possible += rule.weight;
        if comparison.matched {
            score += rule.weight;
        }

        details.push(MatchDetail {
            criterion: name.clone(),
            result: MatchOutcome::from(comparison.matched),
            reason: comparison.reason,
            weight: rule.weight,
        });
    }

    LenderScore {
        score,
        max_possible,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramType;
    use std::collections::BTreeMap;

    fn create_lender(criteria: &[(&str, &str)]) -> LenderRecord {
        LenderRecord {
            id: "lender-1".to_string(),
            name: "Test Lender".to_string(),
            program_type: ProgramType::AppOnly,
            criteria: criteria
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_all_criteria_match() {
        let lender = create_lender(&[
            ("amount_considered", "$10k-$150k"),
            ("time_in_business", "2 years"),
            ("personal_credit", "650+"),
        ]);
        let client = ClientProfile::new()
            .with("amount_considered", "$50,000")
            .with("time_in_business", "3 years")
            .with("personal_credit", "680");

        let result = score_lender(&lender, &client, &CriterionRegistry::builtin());

        assert_eq!(result.percentage(), 100.0);
        assert_eq!(result.max_possible, 5.0);
        assert_eq!(result.details.len(), 3);
        assert!(result.details.iter().all(|d| d.result == MatchOutcome::Match));
    }

    #[test]
    fn test_weighted_partial_match() {
        // amount (2.0) matches, bank_statements (1.0) does not
        let lender = create_lender(&[
            ("amount_considered", "$10k-$150k"),
            ("bank_statements", "6 months"),
        ]);
        let client = ClientProfile::new()
            .with("amount_considered", "$50,000")
            .with("bank_statements", "none available");

        let result = score_lender(&lender, &client, &CriterionRegistry::builtin());

        assert!((result.percentage() - 200.0 / 3.0).abs() < 1e-9);
        assert!((result.percentage() - 66.67).abs() < 0.01);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let mut lender = create_lender(&[("personal_credit", "650+"), ("paynet", "")]);
        lender.criteria.insert("startups".to_string(), None);
        let client = ClientProfile::new()
            .with("paynet", "yes")
            .with("startups", "yes")
            .with("amount_considered", "$10,000");

        let result = score_lender(&lender, &client, &CriterionRegistry::builtin());

        assert!(result.details.is_empty());
        assert_eq!(result.max_possible, 0.0);
        assert_eq!(result.percentage(), 0.0);
    }

    #[test]
    fn test_unparsable_value_counts_toward_max() {
        let lender = create_lender(&[("amount_considered", "call us")]);
        let client = ClientProfile::new().with("amount_considered", "$50,000");

        let result = score_lender(&lender, &client, &CriterionRegistry::builtin());

        assert_eq!(result.details.len(), 1);
        assert_eq!(result.details[0].result, MatchOutcome::NoMatch);
        assert!(result.details[0].reason.contains("call us"));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.max_possible, 2.0);
    }

    #[test]
    fn test_unknown_criterion_uses_generic_rule() {
        let lender = create_lender(&[("equipment_type", "Construction, Medical")]);
        let client = ClientProfile::new().with("equipment_type", "medical");

        let result = score_lender(&lender, &client, &CriterionRegistry::builtin());

        assert_eq!(result.details[0].weight, 1.0);
        assert_eq!(result.percentage(), 100.0);
    }
}
