// Unit tests for Lender Match

use lender_match::core::{
    comparators::{
        compare_amount, compare_credit_score, compare_generic, compare_not_restricted,
        compare_time_in_business,
    },
    parsers::{parse_amount_range, parse_months, parse_restrictions, RestrictionList},
    registry::{ComparatorKind, CriterionRegistry},
};

#[test]
fn test_amount_range_boundaries() {
    let pairs = [(10.0, 150.0), (5.0, 75.0), (150.0, 2000.0)];

    for (low_k, high_k) in pairs {
        let range = format!("${}k-${}k", low_k, high_k);
        let low = low_k * 1000.0;
        let high = high_k * 1000.0;

        assert!(compare_amount(&format!("${}", low), &range).matched, "{} at min", range);
        assert!(compare_amount(&format!("${}", high), &range).matched, "{} at max", range);
        assert!(!compare_amount(&format!("${}", low - 1.0), &range).matched, "{} below min", range);
        assert!(!compare_amount(&format!("${}", high + 1.0), &range).matched, "{} above max", range);
    }
}

#[test]
fn test_amount_without_upper_bound() {
    let range = parse_amount_range("$25,000").unwrap();
    assert!(range.max.is_infinite());
    assert!(compare_amount("$5M", "$25,000").matched);
    assert!(!compare_amount("$24,999", "$25,000").matched);
}

#[test]
fn test_duration_normalization() {
    assert_eq!(parse_months("2 years").unwrap(), parse_months("24 months").unwrap());
    assert_eq!(parse_months("2 years").unwrap(), 24.0);
    assert_eq!(parse_months("3+ Full Years").unwrap(), 36.0);
}

#[test]
fn test_full_years_is_a_minimum() {
    assert!(compare_time_in_business("36 months", "3+ Full Years").matched);
    assert!(compare_time_in_business("4 years", "3+ Full Years").matched);
    assert!(!compare_time_in_business("35 months", "3+ Full Years").matched);
}

#[test]
fn test_duration_range_takes_first_number() {
    // "2-3 years" is read as 2 years
    assert_eq!(parse_months("2-3 years").unwrap(), 24.0);
    assert!(compare_time_in_business("2 years", "2-3 years").matched);
}

#[test]
fn test_credit_minimum() {
    assert!(compare_credit_score("650", "650+").matched);
    assert!(compare_credit_score("800", "650+").matched);
    assert!(!compare_credit_score("649", "650+").matched);
}

#[test]
fn test_credit_band_is_closed_interval() {
    for score in 640..=710 {
        let result = compare_credit_score(&score.to_string(), "650-700");
        assert_eq!(result.matched, (650..=700).contains(&score), "score {}", score);
    }
}

#[test]
fn test_restrictions_none_never_restricts() {
    for value in ["Trucking", "Cannabis", "CA", "anything at all"] {
        assert!(compare_not_restricted(value, "None").matched);
    }
    assert_eq!(parse_restrictions("none"), RestrictionList::Unrestricted);
}

#[test]
fn test_restricted_industry() {
    let list = "Trucking, Cannabis";
    assert!(!compare_not_restricted("Trucking", list).matched);
    assert!(!compare_not_restricted("TRUCKING", list).matched);
    assert!(compare_not_restricted("Retail", list).matched);
}

#[test]
fn test_generic_case_insensitive() {
    assert!(compare_generic("YES", "yes").matched);
    assert!(compare_generic("medical", "Medical and dental only").matched);
}

#[test]
fn test_registry_dispatch_by_name() {
    let registry = CriterionRegistry::builtin();

    assert_eq!(registry.resolve("amount_considered").kind, ComparatorKind::Amount);
    assert_eq!(registry.resolve("time_in_business").kind, ComparatorKind::TimeInBusiness);
    assert_eq!(registry.resolve("personal_credit").kind, ComparatorKind::CreditScore);
    assert_eq!(registry.resolve("business_credit").kind, ComparatorKind::CreditScore);
    assert_eq!(registry.resolve("collateral_age").kind, ComparatorKind::CollateralAge);
    assert_eq!(registry.resolve("state_restrictions").kind, ComparatorKind::Restriction);
    assert_eq!(registry.resolve("paynet").kind, ComparatorKind::Generic);
    assert_eq!(registry.resolve("not_a_criterion").kind, ComparatorKind::Generic);
}
