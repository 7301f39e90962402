use std::collections::HashMap;
use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use remitcert_master::FieldDict;

use crate::error::XmlError;
use crate::tags::{prefix_for, TAG_MAP};

/// Reconstruct the flat field dictionary from a generated document.
///
/// Walks the document once, tracking the prefix-qualified path below the
/// root, and emits `key → trimmed text` for every tag-table node that is
/// present with non-empty text. Absent or empty nodes are omitted, never
/// emitted as empty strings.
pub fn parse_fields(path: &Path) -> Result<FieldDict, XmlError> {
    let content = fs::read_to_string(path).map_err(|e| XmlError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_fields_str(&content)
}

pub fn parse_fields_str(content: &str) -> Result<FieldDict, XmlError> {
    let by_path: HashMap<&str, &str> = TAG_MAP.iter().copied().collect();

    let mut reader = NsReader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut out = FieldDict::new();
    // Path segments below the document root.
    let mut stack: Vec<String> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_resolved_event() {
            Ok((resolution, Event::Start(e))) => {
                depth += 1;
                if depth > 1 {
                    let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    stack.push(qualify(&resolution, &local));
                }
            }
            Ok((_, Event::Text(t))) => {
                if stack.is_empty() {
                    continue;
                }
                let path = stack.join("/");
                if let Some(key) = by_path.get(path.as_str()) {
                    let text = t.unescape().map_err(|e| XmlError::Parse(e.to_string()))?;
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        out.insert((*key).to_string(), trimmed.to_string());
                    }
                }
            }
            Ok((_, Event::End(_))) => {
                if depth > 1 {
                    stack.pop();
                }
                depth = depth.saturating_sub(1);
            }
            Ok((_, Event::Eof)) => break,
            // Empty elements carry no text; their keys stay omitted.
            Ok(_) => {}
            Err(e) => return Err(XmlError::Parse(e.to_string())),
        }
    }

    Ok(out)
}

fn qualify(resolution: &ResolveResult<'_>, local: &str) -> String {
    if let ResolveResult::Bound(Namespace(ns)) = resolution {
        if let Some(prefix) = prefix_for(&String::from_utf8_lossy(ns)) {
            return format!("{prefix}:{local}");
        }
    }
    local.to_string()
}
