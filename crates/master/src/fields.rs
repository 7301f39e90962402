//! Helpers over the flat field dictionary: fixed defaults, Y/N mapping,
//! and the DTAA reset block applied when the treaty section is switched off.

use crate::model::FieldDict;

/// Keys prefixed with `_` are UI-local scratch state and never serialize.
pub fn is_scratch_key(key: &str) -> bool {
    key.starts_with('_')
}

/// Fixed creation-metadata defaults for a fresh submission. Existing values
/// are never overwritten.
pub fn ensure_defaults(fields: &mut FieldDict) {
    const DEFAULTS: &[(&str, &str)] = &[
        ("SWVersionNo", "1"),
        ("SWCreatedBy", "DIT-EFILING-JAVA"),
        ("XMLCreatedBy", "DIT-EFILING-JAVA"),
        ("IntermediaryCity", "Delhi"),
        ("FormName", "FORM15CB"),
        ("Description", "FORM15CB"),
        ("AssessmentYear", "2025"),
        ("SchemaVer", "Ver1.1"),
        ("FormVer", "1"),
        ("IorWe", "02"),
        ("RemitterHonorific", "03"),
        ("BeneficiaryHonorific", "03"),
    ];
    for (key, value) in DEFAULTS {
        fields
            .entry((*key).to_string())
            .or_insert_with(|| (*value).to_string());
    }
}

/// "YES"/"NO" → the schema's "Y"/"N".
pub fn yes_no_to_yn(v: &str) -> &'static str {
    if v == "YES" {
        "Y"
    } else {
        "N"
    }
}

/// "Y"/"YES" (any case) → "YES", everything else → "NO".
pub fn yn_to_yes_no(v: &str) -> &'static str {
    match v.trim().to_uppercase().as_str() {
        "Y" | "YES" => "YES",
        _ => "NO",
    }
}

/// Clear the whole DTAA section back to its disabled state. Applied when
/// the user answers that no treaty applies.
pub fn reset_dtaa_fields(fields: &mut FieldDict) {
    const RESET: &[(&str, &str)] = &[
        ("TaxResidCert", "N"),
        ("RelevantDtaa", ""),
        ("RelevantArtDtaa", ""),
        ("TaxIncDtaa", ""),
        ("TaxLiablDtaa", ""),
        ("RemForRoyFlg", "N"),
        ("ArtDtaa", ""),
        ("RateTdsADtaa", ""),
        ("RemAcctBusIncFlg", "N"),
        ("IncLiabIndiaFlg", "N"),
        ("RemOnCapGainFlg", "N"),
        ("OtherRemDtaa", "N"),
        ("RelArtDetlDDtaa", ""),
        ("_inc_liab_india_detail", ""),
    ];
    for (key, value) in RESET {
        fields.insert((*key).to_string(), (*value).to_string());
    }
}
