/// Canonicalize free text for index keys: lower-case, strip everything
/// outside `[a-z0-9 ]` to a space, collapse runs of whitespace, trim.
///
/// Total and idempotent; empty input yields `""`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        let keep = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Whitespace and punctuation both collapse to a single separator.
            pending_space = true;
        }
    }

    out
}
