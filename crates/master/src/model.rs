use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Working record
// ---------------------------------------------------------------------------

/// The flat working record for one Form 15CB submission.
///
/// Keys draw from the fixed schema vocabulary (see `remitcert-xml::tags`),
/// plus `_`-prefixed scratch keys that never reach a generated document.
pub type FieldDict = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Reference records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndianCompany {
    pub name: String,
    pub pan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignCompany {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankRow {
    pub bank_name: String,
    #[serde(default)]
    pub bsr_code: String,
    #[serde(default)]
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatureMapping {
    pub invoice_nature: String,
    pub agreement_nature: String,
    #[serde(default)]
    pub service_category: String,
    #[serde(default)]
    pub purpose_code: String,
}

/// Treaty rate row. `rate` is a fraction in `0..=1`, not a percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtaaRate {
    pub country: String,
    #[serde(default)]
    pub article: String,
    pub rate: f64,
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupDomain {
    Indian,
    Foreign,
    Party,
    Nature,
    Country,
}

impl std::fmt::Display for LookupDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indian => write!(f, "indian"),
            Self::Foreign => write!(f, "foreign"),
            Self::Party => write!(f, "party"),
            Self::Nature => write!(f, "nature"),
            Self::Country => write!(f, "country"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Canonical key hit the index directly.
    Matched,
    /// An alias entry rewrote the key before the hit.
    AliasMatched,
    /// No index entry for the resolved key.
    NotFound,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::AliasMatched => write!(f, "alias_matched"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// One suggestion-chain lookup, immutable once recorded.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationEvent {
    pub lookup_domain: LookupDomain,
    pub input: String,
    pub resolved: String,
    pub match_type: MatchType,
    /// Reference dataset section the lookup consulted.
    pub source: &'static str,
}
