use crate::data::AliasSet;
use crate::index::{MasterIndex, PartyBanks};
use crate::model::{BankRow, DtaaRate, ForeignCompany, IndianCompany, LookupDomain, MatchType, NatureMapping};
use crate::normalize::normalize;

/// Composes the normalizer, alias tables, and master index into per-domain
/// lookups. Borrows both collaborators; cheap to construct anywhere.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a MasterIndex,
    aliases: &'a AliasSet,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a MasterIndex, aliases: &'a AliasSet) -> Self {
        Self { index, aliases }
    }

    /// Normalize `raw`, then apply at most one alias substitution.
    ///
    /// The alias target is normalized but never re-resolved through the
    /// alias table again.
    pub fn resolve(&self, raw: &str, domain: LookupDomain) -> String {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            return canonical;
        }
        match self.aliases.for_domain(domain).get(&canonical) {
            Some(target) => normalize(target),
            None => canonical,
        }
    }

    /// Classify a lookup against the raw input: `AliasMatched` when the
    /// alias table changed the key, `Matched` otherwise.
    pub fn classify_match(&self, raw: &str, resolved: &str) -> MatchType {
        if normalize(raw) != resolved {
            MatchType::AliasMatched
        } else {
            MatchType::Matched
        }
    }

    pub fn find_indian_company(&self, name: &str) -> Option<&'a IndianCompany> {
        self.index.indian.get(&self.resolve(name, LookupDomain::Indian))
    }

    pub fn find_foreign_company(&self, name: &str) -> Option<&'a ForeignCompany> {
        self.index.foreign.get(&self.resolve(name, LookupDomain::Foreign))
    }

    /// Bank rows for one resolved party; empty when the party is unknown.
    pub fn find_party_banks(&self, party_name: &str) -> &'a [BankRow] {
        self.index
            .party
            .get(&self.resolve(party_name, LookupDomain::Party))
            .map(|p| p.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_nature_row(&self, nature_text: &str) -> Option<&'a NatureMapping> {
        self.index.nature.get(&self.resolve(nature_text, LookupDomain::Nature))
    }

    pub fn find_dtaa(&self, country_text: &str) -> Option<&'a DtaaRate> {
        self.index.country.get(&self.resolve(country_text, LookupDomain::Country))
    }

    /// Two-tier bank lookup.
    ///
    /// Tier 1 searches the resolved party's own rows: exact normalized
    /// equality first, then substring containment, in row order.
    ///
    /// Tier 2 falls back to every party's rows. Exact matches win over
    /// substring matches; substring candidates are ranked by shared
    /// normalized token count, ties broken by party key then bank name.
    /// Parties are scanned in lexical key order, so the result is stable.
    pub fn find_bank_by_name(&self, bank_name: &str, party_name: &str) -> Option<&'a BankRow> {
        let wanted = normalize(bank_name);
        if wanted.is_empty() {
            return None;
        }

        let party_key = self.resolve(party_name, LookupDomain::Party);
        if let Some(party) = self.index.party.get(&party_key) {
            if let Some(row) = match_within_party(party, &wanted) {
                return Some(row);
            }
        }

        // Global fallback: exact pass over all parties.
        for party in self.index.party.values() {
            if let Some(row) = party.rows.iter().find(|r| normalize(&r.bank_name) == wanted) {
                return Some(row);
            }
        }

        // Global fallback: scored substring pass.
        let wanted_tokens: Vec<&str> = wanted.split(' ').collect();
        let mut best: Option<(usize, &str, &'a BankRow)> = None;
        for (key, party) in &self.index.party {
            for row in &party.rows {
                let candidate = normalize(&row.bank_name);
                if !candidate.contains(&wanted) {
                    continue;
                }
                let score = candidate
                    .split(' ')
                    .filter(|t| wanted_tokens.contains(t))
                    .count();
                let better = match best {
                    None => true,
                    Some((best_score, best_key, best_row)) => {
                        score > best_score
                            || (score == best_score
                                && (key.as_str(), row.bank_name.as_str())
                                    < (best_key, best_row.bank_name.as_str()))
                    }
                };
                if better {
                    best = Some((score, key, row));
                }
            }
        }
        best.map(|(_, _, row)| row)
    }
}

fn match_within_party<'a>(party: &'a PartyBanks, wanted: &str) -> Option<&'a BankRow> {
    if let Some(row) = party.rows.iter().find(|r| normalize(&r.bank_name) == wanted) {
        return Some(row);
    }
    party
        .rows
        .iter()
        .find(|r| normalize(&r.bank_name).contains(wanted))
}
