use std::collections::BTreeMap;

use crate::data::MasterData;
use crate::model::{BankRow, DtaaRate, ForeignCompany, IndianCompany, NatureMapping};
use crate::normalize::normalize;

/// One party's bank rows, with the display name preserved.
#[derive(Debug, Clone)]
pub struct PartyBanks {
    pub party_name: String,
    pub rows: Vec<BankRow>,
}

/// Precomputed lookup tables over normalized keys, built exactly once and
/// read-only thereafter. Callers own the index and pass it by reference;
/// there is no process-wide cache.
///
/// BTreeMap keeps every scan deterministic. When two reference records
/// normalize to the same key, the first inserted wins.
#[derive(Debug, Default)]
pub struct MasterIndex {
    pub indian: BTreeMap<String, IndianCompany>,
    pub foreign: BTreeMap<String, ForeignCompany>,
    pub party: BTreeMap<String, PartyBanks>,
    pub nature: BTreeMap<String, NatureMapping>,
    pub country: BTreeMap<String, DtaaRate>,
}

impl MasterIndex {
    pub fn build(data: &MasterData) -> Self {
        let mut index = Self::default();

        for rec in &data.indian_companies {
            let key = normalize(&rec.name);
            if !key.is_empty() {
                index.indian.entry(key).or_insert_with(|| rec.clone());
            }
        }

        for rec in &data.foreign_companies {
            let key = normalize(&rec.name);
            if !key.is_empty() {
                index.foreign.entry(key).or_insert_with(|| rec.clone());
            }
        }

        for (party_name, rows) in &data.banks_by_party {
            let key = normalize(party_name);
            if !key.is_empty() {
                index.party.entry(key).or_insert_with(|| PartyBanks {
                    party_name: party_name.clone(),
                    rows: rows.clone(),
                });
            }
        }

        // Nature rows are reachable by either wording of the nature.
        for rec in &data.nature_map {
            for source in [&rec.invoice_nature, &rec.agreement_nature] {
                let key = normalize(source);
                if !key.is_empty() {
                    index.nature.entry(key).or_insert_with(|| rec.clone());
                }
            }
        }

        for rec in &data.dtaa_rates {
            let key = normalize(&rec.country);
            if !key.is_empty() {
                index.country.entry(key).or_insert_with(|| rec.clone());
            }
        }

        index
    }
}
