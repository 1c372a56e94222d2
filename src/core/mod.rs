// Core algorithm exports
pub mod comparators;
pub mod matcher;
pub mod parsers;
pub mod registry;
pub mod scoring;

pub use comparators::{compare_generic, compare_not_restricted, is_restricted, Comparison};
pub use matcher::{MatchResult, Matcher};
pub use parsers::ParseError;
pub use registry::{ComparatorKind, CriterionDefinition, CriterionRegistry, RegistryError, DEFAULT_WEIGHT};
pub use scoring::{score_lender, LenderScore};
