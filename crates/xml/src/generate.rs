use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use remitcert_master::fields::is_scratch_key;
use remitcert_master::FieldDict;
use uuid::Uuid;

use crate::error::XmlError;
use crate::escape::escape_xml;

/// Fields a Form 15CB document cannot be generated without.
pub const MANDATORY_FIELDS: &[&str] = &[
    "SWVersionNo",
    "FormName",
    "AssessmentYear",
    "RemitterPAN",
    "NameRemitter",
];

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{[^}]+\}\}").unwrap())
}

/// Check every mandatory field is present and non-blank. The error carries
/// the full list of offenders, not just the first.
pub fn validate_required_fields(fields: &FieldDict) -> Result<(), XmlError> {
    let missing: Vec<String> = MANDATORY_FIELDS
        .iter()
        .filter(|key| {
            fields
                .get(**key)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(XmlError::MissingMandatory(missing))
    }
}

/// Substitute `fields` into the template text. Scratch keys (`_`-prefixed)
/// never reach the document; placeholders the caller did not supply are
/// removed afterwards, deliberately leaving their elements empty.
pub fn render(fields: &FieldDict, template: &str) -> String {
    let mut content = template.to_string();
    for (key, value) in fields {
        if is_scratch_key(key) {
            continue;
        }
        let placeholder = format!("{{{{{key}}}}}");
        if content.contains(&placeholder) {
            content = content.replace(&placeholder, &escape_xml(value));
        }
    }
    placeholder_re().replace_all(&content, "").into_owned()
}

/// Generate a Form 15CB document from `fields` and the template at
/// `template_path`, writing it into `output_dir` under a fresh
/// collision-resistant name. Validation failures never write anything.
pub fn generate(
    fields: &FieldDict,
    template_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf, XmlError> {
    validate_required_fields(fields)?;

    let template = fs::read_to_string(template_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            XmlError::TemplateMissing(template_path.to_path_buf())
        } else {
            XmlError::Io {
                path: template_path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    let content = render(fields, &template);

    fs::create_dir_all(output_dir).map_err(|e| XmlError::Io {
        path: output_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let token = Uuid::new_v4().simple().to_string();
    let output_path = output_dir.join(format!("generated_{}.xml", &token[..12]));

    fs::write(&output_path, content).map_err(|e| XmlError::Io {
        path: output_path.clone(),
        message: e.to_string(),
    })?;

    Ok(output_path)
}
