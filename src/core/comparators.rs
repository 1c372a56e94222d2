//! Per-criterion comparators
//!
//! Every comparator takes the raw client text and the raw lender text and
//! returns a [`Comparison`]. Parse failures stop here: they become a no-match
//! whose reason names both raw values.

use crate::core::parsers::{
    parse_amount, parse_amount_range, parse_credit_requirement, parse_credit_score, parse_months,
    parse_restrictions, ParseError, RestrictionList,
};

/// Result of comparing one client value with one lender value
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub matched: bool,
    pub reason: String,
    /// Set when either side could not be parsed
    pub failure: Option<ParseError>,
}

impl Comparison {
    fn new(matched: bool, reason: String) -> Self {
        Self {
            matched,
            reason,
            failure: None,
        }
    }

    fn parse_failure(what: &str, client: &str, lender: &str, error: ParseError) -> Self {
        Self {
            matched: false,
            reason: format!(
                "Could not parse {}: Client: {}, Lender: {}. Error: {}",
                what, client, lender, error
            ),
            failure: Some(error),
        }
    }
}

/// Client amount must fall inside the lender's inclusive range
pub fn compare_amount(client: &str, lender: &str) -> Comparison {
    amount(client, lender)
        .unwrap_or_else(|e| Comparison::parse_failure("amount", client, lender, e))
}

fn amount(client: &str, lender: &str) -> Result<Comparison, ParseError> {
    let amount = parse_amount(client)?;
    let range = parse_amount_range(lender)?;
    Ok(Comparison::new(
        range.contains(amount),
        format!("Client: ${:.2}, Lender: {}", amount, lender),
    ))
}

/// Client time in business must meet the lender's minimum
pub fn compare_time_in_business(client: &str, lender: &str) -> Comparison {
    time_in_business(client, lender)
        .unwrap_or_else(|e| Comparison::parse_failure("time", client, lender, e))
}

fn time_in_business(client: &str, lender: &str) -> Result<Comparison, ParseError> {
    let client_months = parse_months(client)?;
    let lender_months = parse_months(lender)?;
    Ok(Comparison::new(
        client_months >= lender_months,
        format!(
            "Client: {} ({} months), Lender requires: {} ({} months)",
            client, client_months, lender, lender_months
        ),
    ))
}

/// Client equipment age must not exceed the lender's maximum
pub fn compare_collateral_age(client: &str, lender: &str) -> Comparison {
    collateral_age(client, lender)
        .unwrap_or_else(|e| Comparison::parse_failure("collateral age", client, lender, e))
}

fn collateral_age(client: &str, lender: &str) -> Result<Comparison, ParseError> {
    let client_months = parse_months(client)?;
    let max_months = parse_months(lender)?;
    Ok(Comparison::new(
        client_months <= max_months,
        format!(
            "Client: {} ({} months), Lender allows up to: {} ({} months)",
            client, client_months, lender, max_months
        ),
    ))
}

/// Client credit score must fall inside the lender's band
pub fn compare_credit_score(client: &str, lender: &str) -> Comparison {
    credit_score(client, lender)
        .unwrap_or_else(|e| Comparison::parse_failure("credit score", client, lender, e))
}

fn credit_score(client: &str, lender: &str) -> Result<Comparison, ParseError> {
    let score = parse_credit_score(client)?;
    let band = parse_credit_requirement(lender)?;
    Ok(Comparison::new(
        band.contains(score),
        format!("Client: {}, Lender requires: {}", score, band),
    ))
}

/// Whether the client value appears on the restricted list
///
/// Containment is checked both ways, so `"Long haul trucking"` is caught by a
/// `"trucking"` entry and `"CA"` by `"ca, ny"`.
pub fn is_restricted(client: &str, restricted: &str) -> (bool, String) {
    match parse_restrictions(restricted) {
        RestrictionList::Unrestricted => (false, "No restrictions".to_string()),
        RestrictionList::Restricted(items) => {
            let needle = client.trim().to_lowercase();
            let hit = items
                .iter()
                .any(|item| needle.contains(item.as_str()) || item.contains(needle.as_str()));
            (hit, format!("Client: {}, Restricted: {}", client, restricted))
        }
    }
}

/// Match when the client is NOT on the lender's restricted list
pub fn compare_not_restricted(client: &str, restricted: &str) -> Comparison {
    let (restricted_hit, reason) = is_restricted(client, restricted);
    Comparison::new(!restricted_hit, reason)
}

/// Case-insensitive containment in either direction
pub fn compare_generic(client: &str, lender: &str) -> Comparison {
    let client_lower = client.to_lowercase();
    let lender_lower = lender.to_lowercase();
    let matched =
        client_lower.contains(&lender_lower) || lender_lower.contains(&client_lower);
    Comparison::new(matched, format!("Client: {}, Lender: {}", client, lender))
}
