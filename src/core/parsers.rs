//! Free-text criterion parsers
//!
//! Lender criteria come straight out of a spreadsheet, so every parser here
//! accepts loosely formatted text and reports a [`ParseError`] instead of
//! panicking when the text cannot be interpreted.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;

static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("valid number pattern"));

static FIRST_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)").expect("valid integer pattern"));

// Must not start inside a decimal: "1.5 full years" goes to the generic rule
static FULL_YEARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^\d.])(\d+)\+?\s+full\s+years?").expect("valid full years pattern")
});

static SCORE_MINIMUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*\+").expect("valid score minimum pattern"));

static SCORE_BAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid score band pattern"));

/// Why a criterion value could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,

    #[error("no number found in {0:?}")]
    NoDigits(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("invalid range {0:?}")]
    InvalidRange(String),
}

/// Inclusive dollar range; `max` is infinite when the lender gave no cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Parse a single dollar amount such as `$50,000`, `150k` or `1.5M`
pub fn parse_amount(text: &str) -> Result<f64, ParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    let (digits, multiplier) = if let Some(rest) = cleaned.strip_suffix('k') {
        (rest, 1_000.0)
    } else if let Some(rest) = cleaned.strip_suffix('m') {
        (rest, 1_000_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let value: f64 = digits
        .parse()
        .map_err(|_| ParseError::InvalidNumber(text.trim().to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::InvalidNumber(text.trim().to_string()));
    }

    Ok(value * multiplier)
}

/// Parse a lender amount range such as `$10k-$150k` or `$25k+`
///
/// Without a `-` separator the single bound is a minimum with no maximum.
pub fn parse_amount_range(text: &str) -> Result<AmountRange, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split('-').collect();
    match parts.as_slice() {
        [single] => {
            let bound = single.trim().trim_end_matches('+');
            Ok(AmountRange {
                min: parse_amount(bound)?,
                max: f64::INFINITY,
            })
        }
        [low, high] => {
            let high = high.trim().trim_end_matches('+');
            if low.trim().is_empty() || high.is_empty() {
                return Err(ParseError::InvalidRange(trimmed.to_string()));
            }
            Ok(AmountRange {
                min: parse_amount(low)?,
                max: parse_amount(high)?,
            })
        }
        _ => Err(ParseError::InvalidRange(trimmed.to_string())),
    }
}

/// Parse a duration into months
///
/// `"3+ Full Years"` is read as whole years before the generic rule. The
/// generic rule takes the first number in the text and scales it by the unit
/// word: years (`year`/`yr`), months (`month`/`mo`), or years when no unit
/// is given. Ranges such as `"2-3 years"` therefore resolve to their first
/// number.
pub fn parse_months(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(caps) = FULL_YEARS.captures(trimmed) {
        let years = parse_capture(&caps[1])?;
        return Ok(years * 12.0);
    }

    let number = FIRST_NUMBER
        .captures(trimmed)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ParseError::NoDigits(trimmed.to_string()))?;
    let value = parse_capture(&number)?;

    let lower = trimmed.to_lowercase();
    if lower.contains("year") || lower.contains("yr") {
        Ok(value * 12.0)
    } else if lower.contains("month") || lower.contains("mo") {
        Ok(value)
    } else {
        Ok(value * 12.0)
    }
}

/// Acceptable credit score band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditBand {
    pub min: u32,
    pub max: Option<u32>,
}

impl CreditBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && self.max.map_or(true, |max| score <= max)
    }
}

impl std::fmt::Display for CreditBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Client credit score: the first run of digits
pub fn parse_credit_score(text: &str) -> Result<u32, ParseError> {
    first_integer(text)
}

/// Lender credit requirement: `650+`, `650-700`, or a bare minimum
pub fn parse_credit_requirement(text: &str) -> Result<CreditBand, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if trimmed.contains('+') {
        if let Some(caps) = SCORE_MINIMUM.captures(trimmed) {
            return Ok(CreditBand {
                min: parse_integer(&caps[1])?,
                max: None,
            });
        }
    }

    let starts_with_no = trimmed
        .get(..2)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("no"));

    if trimmed.contains('-') && !starts_with_no {
        if let Some(caps) = SCORE_BAND.captures(trimmed) {
            let a = parse_integer(&caps[1])?;
            let b = parse_integer(&caps[2])?;
            return Ok(CreditBand {
                min: a.min(b),
                max: Some(a.max(b)),
            });
        }
    }

    Ok(CreditBand {
        min: first_integer(trimmed)?,
        max: None,
    })
}

/// Lender restriction list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionList {
    Unrestricted,
    Restricted(BTreeSet<String>),
}

/// Parse a comma separated restriction list; `None`/`No`/`N/A` restrict nothing
pub fn parse_restrictions(text: &str) -> RestrictionList {
    let trimmed = text.trim().to_lowercase();
    if matches!(trimmed.as_str(), "" | "none" | "no" | "n/a") {
        return RestrictionList::Unrestricted;
    }

    let items: BTreeSet<String> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        RestrictionList::Unrestricted
    } else {
        RestrictionList::Restricted(items)
    }
}

fn first_integer(text: &str) -> Result<u32, ParseError> {
    let caps = FIRST_INTEGER
        .captures(text)
        .ok_or_else(|| ParseError::NoDigits(text.trim().to_string()))?;
    parse_integer(&caps[1])
}

fn parse_integer(digits: &str) -> Result<u32, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidNumber(digits.to_string()))
}

fn parse_capture(number: &str) -> Result<f64, ParseError> {
    number
        .parse()
        .map_err(|_| ParseError::InvalidNumber(number.to_string()))
}
