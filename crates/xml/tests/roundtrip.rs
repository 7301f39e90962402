use std::fs;

use remitcert_master::FieldDict;
use remitcert_xml::tags::TAG_MAP;
use remitcert_xml::{generate, parse_fields, XmlError, DEFAULT_TEMPLATE};

fn fields(entries: &[(&str, &str)]) -> FieldDict {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample_fields() -> FieldDict {
    fields(&[
        ("SWVersionNo", "1"),
        ("SWCreatedBy", "DIT-EFILING-JAVA"),
        ("XMLCreatedBy", "DIT-EFILING-JAVA"),
        ("XMLCreationDate", "2026-02-18"),
        ("IntermediaryCity", "Delhi"),
        ("FormName", "FORM15CB"),
        ("Description", "FORM15CB"),
        ("AssessmentYear", "2025"),
        ("SchemaVer", "Ver1.1"),
        ("FormVer", "1"),
        ("IorWe", "02"),
        ("RemitterHonorific", "03"),
        ("BeneficiaryHonorific", "03"),
        ("RemitterPAN", "ABCDE1234F"),
        ("NameRemitter", "Acme India Pvt Ltd"),
        ("NameRemittee", "Acme Global GmbH"),
        ("AmtPayIndRem", "100000"),
        ("AmtPayForgnRem", "1200"),
        ("PropDateRem", "2026-03-05"),
        ("CountryRemMadeSecb", "49"),
        ("CurrencySecbCode", "50"),
        ("NameBankCode", "41"),
        ("BsrCode", "1234567"),
        ("RateTdsSecbFlg", "1"),
        ("RateTdsSecB", "10"),
        ("NameAcctnt", "CA Jane Doe"),
    ])
}

fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
    let template_path = dir.join("form15cb_template.xml");
    fs::write(&template_path, DEFAULT_TEMPLATE).unwrap();
    template_path
}

#[test]
fn generate_then_parse_restores_supplied_fields() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(dir.path());
    let out_dir = dir.path().join("out");

    let input = sample_fields();
    let xml_path = generate(&input, &template_path, &out_dir).unwrap();
    let parsed = parse_fields(&xml_path).unwrap();

    // Every supplied key that appears in the tag table comes back verbatim.
    for (_, key) in TAG_MAP {
        match input.get(*key) {
            Some(value) => assert_eq!(parsed.get(*key), Some(value), "field {key}"),
            None => assert!(!parsed.contains_key(*key), "field {key} should be absent"),
        }
    }
}

#[test]
fn round_trip_survives_escaped_characters() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(dir.path());

    let mut input = sample_fields();
    input.insert("NameRemittee".into(), "Smith & Sons <International> \"GmbH\"".into());
    input.insert("BasisDeterTax".into(), "Rate per article 12 & 12A".into());

    let xml_path = generate(&input, &template_path, dir.path()).unwrap();
    let raw = fs::read_to_string(&xml_path).unwrap();
    assert!(raw.contains("Smith &amp; Sons &lt;International&gt; &quot;GmbH&quot;"));
    assert!(!raw.contains("{{"));

    let parsed = parse_fields(&xml_path).unwrap();
    assert_eq!(parsed["NameRemittee"], "Smith & Sons <International> \"GmbH\"");
    assert_eq!(parsed["BasisDeterTax"], "Rate per article 12 & 12A");
}

#[test]
fn scratch_keys_never_reach_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(dir.path());

    let mut input = sample_fields();
    input.insert("_purpose_group_name".into(), "Software".into());
    input.insert("_invoice_date".into(), "2026-02-20".into());

    let xml_path = generate(&input, &template_path, dir.path()).unwrap();
    let raw = fs::read_to_string(&xml_path).unwrap();
    assert!(!raw.contains("Software"));
    assert!(!raw.contains("2026-02-20"));

    let parsed = parse_fields(&xml_path).unwrap();
    assert!(parsed.keys().all(|k| !k.starts_with('_')));
}

#[test]
fn mandatory_check_blocks_generation_and_names_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = write_template(dir.path());

    let mut input = sample_fields();
    input.remove("RemitterPAN");
    input.remove("NameRemitter");
    input.insert("AssessmentYear".into(), "".into());

    let err = generate(&input, &template_path, dir.path()).unwrap_err();
    let message = err.to_string();
    for key in ["RemitterPAN", "NameRemitter", "AssessmentYear"] {
        assert!(message.contains(key), "error should name {key}: {message}");
    }
}

#[test]
fn parse_error_does_not_disturb_other_operations() {
    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("broken.xml");
    fs::write(&bad_path, "<FORM15CB><RemitterDetails></FORM15CB>").unwrap();

    let err = parse_fields(&bad_path).unwrap_err();
    assert!(matches!(err, XmlError::Parse(_)));

    // A good document still parses afterwards.
    let template_path = write_template(dir.path());
    let xml_path = generate(&sample_fields(), &template_path, dir.path()).unwrap();
    assert_eq!(parse_fields(&xml_path).unwrap()["RemitterPAN"], "ABCDE1234F");
}
