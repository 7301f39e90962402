use std::collections::BTreeMap;

use crate::model::{FieldDict, LookupDomain, MatchType, ReconciliationEvent};
use crate::normalize::normalize;
use crate::resolve::Resolver;

/// Strip everything except ASCII digits. BSR codes arrive with dashes and
/// spaces; only the digits are schema-valid.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a treaty rate fraction as a percentage string: two decimals,
/// trailing zeros and a trailing dot trimmed ("0.1" → "10", "0.125" → "12.5").
pub fn format_rate_percent(rate: f64) -> String {
    let formatted = format!("{:.2}", rate * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Run the five-step suggestion chain over extracted fields.
///
/// Steps run in a fixed order because later steps consume earlier results
/// (the bank step seeds with the canonical remitter name when available).
/// Pure: `extracted` is never mutated; the caller merges the returned
/// suggestions explicitly. Each step with a non-empty seed records exactly
/// one [`ReconciliationEvent`].
pub fn suggest_from_master(
    resolver: &Resolver<'_>,
    extracted: &FieldDict,
    bank_code_lookup: &BTreeMap<String, String>,
) -> (FieldDict, Vec<ReconciliationEvent>) {
    let mut suggestions = FieldDict::new();
    let mut events = Vec::new();

    let get = |key: &str| extracted.get(key).map(String::as_str).unwrap_or("");

    // Step 1: remitter against indian companies.
    let remitter_input = get("NameRemitter");
    if let Some(company) = resolver.find_indian_company(remitter_input) {
        let name = company.name.trim();
        let pan = company.pan.trim().to_uppercase();
        if !name.is_empty() {
            suggestions.insert("NameRemitter".into(), name.to_string());
        }
        if !pan.is_empty() {
            suggestions.insert("RemitterPAN".into(), pan);
        }
        events.push(hit_event(
            resolver,
            LookupDomain::Indian,
            remitter_input,
            name,
            "master.indian_companies",
        ));
    } else if !remitter_input.is_empty() {
        events.push(miss_event(LookupDomain::Indian, remitter_input, "master.indian_companies"));
    }

    // Step 2: remittee against foreign companies.
    let remittee_input = get("NameRemittee");
    if let Some(company) = resolver.find_foreign_company(remittee_input) {
        let name = company.name.trim();
        if !name.is_empty() {
            suggestions.insert("NameRemittee".into(), name.to_string());
        }
        events.push(hit_event(
            resolver,
            LookupDomain::Foreign,
            remittee_input,
            name,
            "master.foreign_companies",
        ));
    } else if !remittee_input.is_empty() {
        events.push(miss_event(LookupDomain::Foreign, remittee_input, "master.foreign_companies"));
    }

    // Step 3: bank rows for the party. Seed with the canonical remitter name
    // from step 1 when it produced one.
    let party_seed = suggestions
        .get("NameRemitter")
        .map(String::as_str)
        .unwrap_or(remitter_input)
        .to_string();
    let bank_rows = resolver.find_party_banks(&party_seed);
    if let Some(primary) = bank_rows.first() {
        let bank_name = primary.bank_name.trim();
        let bank_code = bank_code_lookup
            .get(&normalize(bank_name))
            .map(String::as_str)
            .unwrap_or(bank_name);
        if !bank_code.is_empty() {
            suggestions.insert("NameBankCode".into(), bank_code.to_string());
        }
        if !primary.branch.trim().is_empty() {
            suggestions.insert("BranchName".into(), primary.branch.trim().to_string());
        }
        let bsr = digits_only(&primary.bsr_code);
        if !bsr.is_empty() {
            suggestions.insert("BsrCode".into(), bsr);
        }
        events.push(hit_event(
            resolver,
            LookupDomain::Party,
            &party_seed,
            bank_name,
            "master.banks_by_party",
        ));
    } else if !party_seed.is_empty() {
        events.push(miss_event(LookupDomain::Party, &party_seed, "master.banks_by_party"));
    }

    // Step 4: nature of remittance.
    let nature_seed = get("NatureRemCategory");
    if let Some(row) = resolver.find_nature_row(nature_seed) {
        let agreement = row.agreement_nature.trim();
        if !agreement.is_empty() {
            suggestions.insert("NatureRemCategory".into(), agreement.to_string());
        }
        if !row.service_category.trim().is_empty() {
            suggestions.insert("RevPurCategory".into(), row.service_category.trim().to_string());
        }
        if !row.purpose_code.trim().is_empty() {
            suggestions.insert("RevPurCode".into(), row.purpose_code.trim().to_string());
        }
        events.push(hit_event(
            resolver,
            LookupDomain::Nature,
            nature_seed,
            agreement,
            "master.nature_map",
        ));
    } else if !nature_seed.is_empty() {
        events.push(miss_event(LookupDomain::Nature, nature_seed, "master.nature_map"));
    }

    // Step 5: treaty rate. The remittance country is the primary seed; the
    // remittee's town is the extraction-time fallback.
    let country_seed = {
        let primary = get("CountryRemMadeSecb");
        if primary.is_empty() {
            get("RemitteeTownCityDistrict")
        } else {
            primary
        }
    };
    if let Some(dtaa) = resolver.find_dtaa(country_seed) {
        let country = dtaa.country.trim();
        if !country.is_empty() {
            suggestions.insert("RelevantDtaa".into(), country.to_string());
        }
        if !dtaa.article.trim().is_empty() {
            suggestions.insert("RelevantArtDtaa".into(), dtaa.article.trim().to_string());
        }
        suggestions.insert("RateTdsADtaa".into(), format_rate_percent(dtaa.rate));
        events.push(hit_event(
            resolver,
            LookupDomain::Country,
            country_seed,
            country,
            "master.dtaa_rates",
        ));
    } else if !country_seed.is_empty() {
        events.push(miss_event(LookupDomain::Country, country_seed, "master.dtaa_rates"));
    }

    (suggestions, events)
}

fn hit_event(
    resolver: &Resolver<'_>,
    domain: LookupDomain,
    input: &str,
    resolved_display: &str,
    source: &'static str,
) -> ReconciliationEvent {
    let resolved_key = resolver.resolve(input, domain);
    ReconciliationEvent {
        lookup_domain: domain,
        input: input.to_string(),
        resolved: if resolved_display.is_empty() {
            input.to_string()
        } else {
            resolved_display.to_string()
        },
        match_type: resolver.classify_match(input, &resolved_key),
        source,
    }
}

fn miss_event(domain: LookupDomain, input: &str, source: &'static str) -> ReconciliationEvent {
    ReconciliationEvent {
        lookup_domain: domain,
        input: input.to_string(),
        resolved: String::new(),
        match_type: MatchType::NotFound,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_separators() {
        assert_eq!(digits_only("12-34-567"), "1234567");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn rate_percent_trims_trailing_zeros() {
        assert_eq!(format_rate_percent(0.10), "10");
        assert_eq!(format_rate_percent(0.125), "12.5");
        assert_eq!(format_rate_percent(0.1575), "15.75");
        assert_eq!(format_rate_percent(0.0), "0");
    }
}
