use crate::core::comparators::{
    compare_amount, compare_collateral_age, compare_credit_score, compare_generic,
    compare_not_restricted, compare_time_in_business, Comparison,
};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Weight applied to criteria without an explicit entry
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Signature shared by every comparator in the dispatch table
pub type ComparatorFn = fn(&str, &str) -> Comparison;

/// Which comparator a criterion is evaluated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorKind {
    Amount,
    TimeInBusiness,
    CollateralAge,
    CreditScore,
    Restriction,
    Generic,
}

impl ComparatorKind {
    pub fn comparator(self) -> ComparatorFn {
        match self {
            ComparatorKind::Amount => compare_amount,
            ComparatorKind::TimeInBusiness => compare_time_in_business,
            ComparatorKind::CollateralAge => compare_collateral_age,
            ComparatorKind::CreditScore => compare_credit_score,
            ComparatorKind::Restriction => compare_not_restricted,
            ComparatorKind::Generic => compare_generic,
        }
    }

    pub fn compare(self, client: &str, lender: &str) -> Comparison {
        (self.comparator())(client, lender)
    }
}

/// How one named criterion is evaluated and weighted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionDefinition {
    pub name: String,
    pub kind: ComparatorKind,
    pub weight: f64,
    pub description: String,
    /// Follows the registry default weight until given its own
    #[serde(skip)]
    inherits_default: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("weight for {criterion:?} must be positive and finite, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },
}

/// Built-in criterion vocabulary: (name, kind, weight, description)
///
/// `None` weights take the registry default.
const BUILTIN_CRITERIA: &[(&str, ComparatorKind, Option<f64>, &str)] = &[
    ("amount_considered", ComparatorKind::Amount, Some(2.0), "Amount range considered by the lender"),
    ("time_in_business", ComparatorKind::TimeInBusiness, Some(1.5), "Minimum time in business required"),
    ("personal_credit", ComparatorKind::CreditScore, Some(1.5), "Personal credit score requirements"),
    ("bank_statements", ComparatorKind::Generic, Some(1.0), "Bank statement requirements"),
    ("collateral_age", ComparatorKind::CollateralAge, Some(1.0), "Age restrictions for equipment collateral"),
    ("titled_vehicles", ComparatorKind::Generic, Some(0.8), "Requirements for titled vehicles"),
    ("restricted_industries", ComparatorKind::Restriction, Some(1.2), "Industries not accepted by the lender"),
    ("restricted_equipment", ComparatorKind::Restriction, Some(1.2), "Equipment types not accepted by the lender"),
    ("state_restrictions", ComparatorKind::Restriction, Some(1.5), "States where the lender does not operate"),
    ("cost_of_funds", ComparatorKind::Generic, None, "Cost of funds ranges"),
    ("max_commission", ComparatorKind::Generic, None, "Maximum commission allowed"),
    ("syndicator_notes", ComparatorKind::Generic, None, "Additional notes from the syndicator"),
    ("disclosure_requirements", ComparatorKind::Generic, None, "Required disclosures"),
    ("startups", ComparatorKind::Generic, Some(0.8), "Requirements for startup businesses"),
    ("special_products", ComparatorKind::Generic, Some(0.5), "Special product offerings"),
    ("paynet", ComparatorKind::Generic, Some(0.8), "Paynet requirements"),
    ("business_credit", ComparatorKind::CreditScore, Some(1.0), "Business credit requirements"),
    ("special_deals", ComparatorKind::Generic, Some(0.5), "Special deal offerings"),
];

/// Lookup table from criterion name to comparator and weight
///
/// Unknown names are not an error: they resolve to the generic comparator
/// with the default weight.
#[derive(Debug, Clone)]
pub struct CriterionRegistry {
    definitions: Vec<CriterionDefinition>,
    index: HashMap<String, usize>,
    default_weight: f64,
}

/// Resolved evaluation rule for one criterion name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub kind: ComparatorKind,
    pub weight: f64,
}

impl CriterionRegistry {
    /// Registry with the built-in vocabulary and weights
    pub fn builtin() -> Self {
        let definitions: Vec<CriterionDefinition> = BUILTIN_CRITERIA
            .iter()
            .map(|&(name, kind, weight, description)| CriterionDefinition {
                name: name.to_string(),
                kind,
                weight: weight.unwrap_or(DEFAULT_WEIGHT),
                description: description.to_string(),
                inherits_default: weight.is_none(),
            })
            .collect();

        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), i))
            .collect();

        Self {
            definitions,
            index,
            default_weight: DEFAULT_WEIGHT,
        }
    }

    /// Apply configured weights on top of the built-in table
    ///
    /// A new default weight also applies to built-in criteria without a weight
    /// of their own. Names outside the vocabulary are added as generic
    /// criteria so their weight still takes effect.
    pub fn with_overrides(
        mut self,
        default_weight: Option<f64>,
        weights: &HashMap<String, f64>,
    ) -> Result<Self, RegistryError> {
        if let Some(weight) = default_weight {
            validate_weight("default", weight)?;
            self.default_weight = weight;
            for def in self.definitions.iter_mut().filter(|def| def.inherits_default) {
                def.weight = weight;
            }
        }

        // Sorted so that added criteria land in a stable order
        let mut overrides: Vec<(&String, &f64)> = weights.iter().collect();
        overrides.sort_by(|a, b| a.0.cmp(b.0));

        for (name, &weight) in overrides {
            validate_weight(name, weight)?;
            match self.index.get(name.as_str()) {
                Some(&i) => {
                    let def = &mut self.definitions[i];
                    def.weight = weight;
                    def.inherits_default = false;
                }
                None => {
                    self.index.insert(name.clone(), self.definitions.len());
                    self.definitions.push(CriterionDefinition {
                        name: name.clone(),
                        kind: ComparatorKind::Generic,
                        weight,
                        description: String::new(),
                        inherits_default: false,
                    });
                }
            }
        }

        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&CriterionDefinition> {
        self.index.get(name).map(|&i| &self.definitions[i])
    }

    /// Comparator and weight for `name`, falling back to the generic rule
    pub fn resolve(&self, name: &str) -> Rule {
        match self.get(name) {
            Some(def) => Rule {
                kind: def.kind,
                weight: def.weight,
            },
            None => Rule {
                kind: ComparatorKind::Generic,
                weight: self.default_weight,
            },
        }
    }

    pub fn definitions(&self) -> &[CriterionDefinition] {
        &self.definitions
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }
}

impl Default for CriterionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_weight(criterion: &str, weight: f64) -> Result<(), RegistryError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidWeight {
            criterion: criterion.to_string(),
            weight,
        })
    }
}
