use std::sync::OnceLock;

use regex::Regex;

fn pan_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap())
}

fn purpose_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^RB-\d{2}\.\d(?:-S\d{4})?$").unwrap())
}

/// PAN: 10 characters, AAAAA9999A. Case-insensitive, surrounding
/// whitespace ignored.
pub fn validate_pan(pan: &str) -> bool {
    pan_re().is_match(&pan.trim().to_uppercase())
}

/// BSR code: exactly 7 digits once separators are stripped.
pub fn validate_bsr_code(bsr: &str) -> bool {
    bsr.chars().filter(char::is_ascii_digit).count() == 7
}

/// RBI purpose code: `RB-NN.N` with an optional `-SNNNN` suffix.
pub fn validate_purpose_code(purpose: &str) -> bool {
    purpose_re().is_match(&purpose.trim().to_uppercase())
}

/// Treaty rate as a percentage: numeric, `0 ..= 100`.
pub fn validate_dtaa_rate(rate: &str) -> bool {
    let s = rate.trim();
    if s.is_empty() {
        return false;
    }
    match s.parse::<f64>() {
        Ok(n) => (0.0..=100.0).contains(&n),
        Err(_) => false,
    }
}

/// Mask a PAN for log output: first 2 and last 2 characters survive.
/// Strings that are not 10 characters long pass through untouched.
pub fn mask_pan(pan: &str) -> String {
    let p = pan.trim().to_uppercase();
    if p.len() != 10 || !p.is_ascii() {
        return p;
    }
    format!("{}******{}", &p[..2], &p[8..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_accepts_valid_any_case() {
        assert!(validate_pan("ABCDE1234F"));
        assert!(validate_pan("abcde1234f"));
        assert!(validate_pan("  ABCDE1234F  "));
    }

    #[test]
    fn pan_rejects_malformed() {
        assert!(!validate_pan("1234ABCDE"));
        assert!(!validate_pan("ABCDE12345"));
        assert!(!validate_pan(""));
    }

    #[test]
    fn bsr_strips_separators() {
        assert!(validate_bsr_code("12-34-567"));
        assert!(validate_bsr_code("1234567"));
        assert!(!validate_bsr_code("123456"));
        assert!(!validate_bsr_code("12345678"));
        assert!(!validate_bsr_code(""));
    }

    #[test]
    fn purpose_code_formats() {
        assert!(validate_purpose_code("RB-08.1"));
        assert!(validate_purpose_code("rb-08.1-s0017"));
        assert!(!validate_purpose_code("RB-8.1"));
        assert!(!validate_purpose_code("08.1"));
    }

    #[test]
    fn dtaa_rate_bounds() {
        assert!(validate_dtaa_rate("0"));
        assert!(validate_dtaa_rate("10.5"));
        assert!(validate_dtaa_rate("100"));
        assert!(!validate_dtaa_rate("100.01"));
        assert!(!validate_dtaa_rate("-1"));
        assert!(!validate_dtaa_rate("ten"));
        assert!(!validate_dtaa_rate(""));
    }

    #[test]
    fn mask_pan_hides_middle() {
        assert_eq!(mask_pan("ABCDE1234F"), "AB******4F");
        assert_eq!(mask_pan("abcde1234f"), "AB******4F");
        assert_eq!(mask_pan("short"), "SHORT");
    }
}
