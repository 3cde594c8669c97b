// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// What an increment does when the count is already at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Roll over to zero.
    #[default]
    Wrap,
    /// Stay at the limit.
    Saturate,
    /// Refuse with `DomainError::CountOverflow`.
    Fail,
}

/// Character set the batch transform upper-cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMapping {
    /// Full Unicode mapping, independent of the process locale.
    #[default]
    Unicode,
    /// Only `a-z`; every other character is copied unchanged.
    Ascii,
}
