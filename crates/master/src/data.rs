use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::MasterError;
use crate::model::{BankRow, DtaaRate, ForeignCompany, IndianCompany, LookupDomain, NatureMapping};

// ---------------------------------------------------------------------------
// Reference dataset
// ---------------------------------------------------------------------------

/// The reference dataset as shipped on disk. Sections may be absent in a
/// partial file; each defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MasterData {
    pub indian_companies: Vec<IndianCompany>,
    pub foreign_companies: Vec<ForeignCompany>,
    pub banks_by_party: BTreeMap<String, Vec<BankRow>>,
    pub nature_map: Vec<NatureMapping>,
    pub dtaa_rates: Vec<DtaaRate>,
}

impl MasterData {
    pub fn from_json(input: &str) -> Result<Self, MasterError> {
        serde_json::from_str(input).map_err(|e| MasterError::DataParse(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, MasterError> {
        let raw = fs::read_to_string(path).map_err(|e| MasterError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw)
    }
}

// ---------------------------------------------------------------------------
// Alias tables
// ---------------------------------------------------------------------------

/// Five domain-scoped raw-text → canonical-text override maps.
///
/// Keys and values are free text; both sides are normalized at resolution
/// time, and an alias target is never re-resolved through the table again.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AliasSet {
    #[serde(rename = "indian_company_aliases")]
    pub indian: BTreeMap<String, String>,
    #[serde(rename = "foreign_party_aliases")]
    pub foreign: BTreeMap<String, String>,
    #[serde(rename = "party_bank_aliases")]
    pub party: BTreeMap<String, String>,
    #[serde(rename = "nature_aliases")]
    pub nature: BTreeMap<String, String>,
    #[serde(rename = "country_aliases")]
    pub country: BTreeMap<String, String>,
}

impl AliasSet {
    pub fn from_json(input: &str) -> Result<Self, MasterError> {
        serde_json::from_str(input).map_err(|e| MasterError::DataParse(e.to_string()))
    }

    /// Load from disk. A missing file is an empty alias set, not an error.
    pub fn from_file(path: &Path) -> Result<Self, MasterError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|e| MasterError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    pub fn for_domain(&self, domain: LookupDomain) -> &BTreeMap<String, String> {
        match domain {
            LookupDomain::Indian => &self.indian,
            LookupDomain::Foreign => &self.foreign,
            LookupDomain::Party => &self.party,
            LookupDomain::Nature => &self.nature,
            LookupDomain::Country => &self.country,
        }
    }
}
