use std::collections::BTreeMap;

use remitcert_master::model::MatchType;
use remitcert_master::{
    normalize, suggest_from_master, AliasSet, FieldDict, LookupDomain, MasterData, MasterIndex,
    Resolver,
};

const MASTER_JSON: &str = r#"{
    "indian_companies": [
        {"name": "Acme India Pvt Ltd", "pan": "ABCDE1234F"},
        {"name": "Bharat Widgets Ltd", "pan": "FGHIJ5678K"}
    ],
    "foreign_companies": [
        {"name": "Acme Global GmbH"},
        {"name": "Widget Overseas Inc"}
    ],
    "banks_by_party": {
        "Acme India Pvt Ltd": [
            {"bank_name": "State Bank of India", "bsr_code": "12-34-567", "branch": "Connaught Place"},
            {"bank_name": "HDFC Bank", "bsr_code": "7654321", "branch": "Nehru Place"}
        ]
    },
    "nature_map": [
        {"invoice_nature": "Software license fees",
         "agreement_nature": "Royalty",
         "service_category": "IT Services",
         "purpose_code": "RB-08.1"}
    ],
    "dtaa_rates": [
        {"country": "Germany", "article": "12", "rate": 0.1},
        {"country": "Singapore", "article": "12A", "rate": 0.125}
    ]
}"#;

const ALIASES_JSON: &str = r#"{
    "indian_company_aliases": {"acme": "Acme India Pvt Ltd"},
    "foreign_party_aliases": {"acme gmbh": "Acme Global GmbH"},
    "nature_aliases": {"software fees": "Software license fees"},
    "country_aliases": {"deutschland": "Germany"}
}"#;

fn fields(entries: &[(&str, &str)]) -> FieldDict {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn full_chain_on_exact_names() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let extracted = fields(&[
        ("NameRemitter", "Acme India Pvt Ltd"),
        ("NameRemittee", "Acme Global GmbH"),
        ("NatureRemCategory", "Software license fees"),
        ("CountryRemMadeSecb", "Germany"),
    ]);
    let bank_codes: BTreeMap<String, String> =
        BTreeMap::from([("state bank of india".to_string(), "SBIN".to_string())]);

    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &bank_codes);

    assert_eq!(suggestions["NameRemitter"], "Acme India Pvt Ltd");
    assert_eq!(suggestions["RemitterPAN"], "ABCDE1234F");
    assert_eq!(suggestions["NameRemittee"], "Acme Global GmbH");
    assert_eq!(suggestions["NameBankCode"], "SBIN");
    assert_eq!(suggestions["BranchName"], "Connaught Place");
    assert_eq!(suggestions["BsrCode"], "1234567");
    assert_eq!(suggestions["NatureRemCategory"], "Royalty");
    assert_eq!(suggestions["RevPurCategory"], "IT Services");
    assert_eq!(suggestions["RevPurCode"], "RB-08.1");
    assert_eq!(suggestions["RelevantDtaa"], "Germany");
    assert_eq!(suggestions["RelevantArtDtaa"], "12");
    assert_eq!(suggestions["RateTdsADtaa"], "10");

    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e.match_type == MatchType::Matched));
}

#[test]
fn alias_only_remitter_is_alias_matched() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let extracted = fields(&[("NameRemitter", "ACME")]);
    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &BTreeMap::new());

    assert_eq!(suggestions["NameRemitter"], "Acme India Pvt Ltd");
    assert_eq!(suggestions["RemitterPAN"], "ABCDE1234F");

    let event = events
        .iter()
        .find(|e| e.lookup_domain == LookupDomain::Indian)
        .unwrap();
    assert_eq!(event.match_type, MatchType::AliasMatched);
    assert_ne!(normalize(&event.input), resolver.resolve(&event.input, LookupDomain::Indian));
}

#[test]
fn unknown_remitter_is_not_found_and_unsuggested() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let extracted = fields(&[("NameRemitter", "Completely Unknown Traders")]);
    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &BTreeMap::new());

    assert!(!suggestions.contains_key("NameRemitter"));
    assert!(!suggestions.contains_key("RemitterPAN"));

    let event = events
        .iter()
        .find(|e| e.lookup_domain == LookupDomain::Indian)
        .unwrap();
    assert_eq!(event.match_type, MatchType::NotFound);
    assert_eq!(event.resolved, "");
}

#[test]
fn bank_step_seeds_from_canonical_remitter() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    // The raw remitter is only reachable via alias; the bank step must still
    // find the party's rows because it seeds from the canonical suggestion.
    let extracted = fields(&[("NameRemitter", "acme")]);
    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &BTreeMap::new());

    assert_eq!(suggestions["BsrCode"], "1234567");
    // Without a configured bank-code lookup the raw bank name passes through.
    assert_eq!(suggestions["NameBankCode"], "State Bank of India");
    assert!(events.iter().any(|e| e.lookup_domain == LookupDomain::Party));
}

#[test]
fn country_falls_back_to_remittee_town() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let extracted = fields(&[("RemitteeTownCityDistrict", "Singapore")]);
    let (suggestions, events) = suggest_from_master(&resolver, &extracted, &BTreeMap::new());

    assert_eq!(suggestions["RelevantDtaa"], "Singapore");
    assert_eq!(suggestions["RateTdsADtaa"], "12.5");
    let event = events
        .iter()
        .find(|e| e.lookup_domain == LookupDomain::Country)
        .unwrap();
    assert_eq!(event.match_type, MatchType::Matched);
}

#[test]
fn empty_seeds_emit_no_events() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let (suggestions, events) = suggest_from_master(&resolver, &FieldDict::new(), &BTreeMap::new());
    assert!(suggestions.is_empty());
    assert!(events.is_empty());
}

#[test]
fn suggestion_chain_never_mutates_input() {
    let data = MasterData::from_json(MASTER_JSON).unwrap();
    let aliases = AliasSet::from_json(ALIASES_JSON).unwrap();
    let index = MasterIndex::build(&data);
    let resolver = Resolver::new(&index, &aliases);

    let extracted = fields(&[("NameRemitter", "acme"), ("NatureRemCategory", "software fees")]);
    let before = extracted.clone();
    let _ = suggest_from_master(&resolver, &extracted, &BTreeMap::new());
    assert_eq!(extracted, before);
}
