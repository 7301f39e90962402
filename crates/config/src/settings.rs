use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the managed data lives and how generation behaves.
///
/// All paths default relative to the working directory so a checkout works
/// without any setup; a settings file overrides them per machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reference dataset (companies, banks, natures, treaty rates).
    #[serde(rename = "data.masterPath")]
    pub master_path: PathBuf,

    /// Alias tables. A missing file means no aliases.
    #[serde(rename = "data.aliasesPath")]
    pub aliases_path: PathBuf,

    /// Bank display name → e-filing bank code lookup.
    #[serde(rename = "data.bankCodesPath")]
    pub bank_codes_path: PathBuf,

    /// Placeholder template for the generated document.
    #[serde(rename = "xml.templatePath")]
    pub template_path: PathBuf,

    /// Folder generated documents are written into.
    #[serde(rename = "xml.outputDir")]
    pub output_dir: PathBuf,

    /// Days between invoice date and the proposed remittance date.
    #[serde(rename = "form.proposedDateOffsetDays")]
    pub proposed_date_offset_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_path: PathBuf::from("data/master/master_data.json"),
            aliases_path: PathBuf::from("data/master/aliases.json"),
            bank_codes_path: PathBuf::from("lookups/bank_codes.json"),
            template_path: PathBuf::from("templates/form15cb_template.xml"),
            output_dir: PathBuf::from("data/output"),
            proposed_date_offset_days: 30,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("remitcert");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file(path);
            return settings;
        }

        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write the default settings file so users have something to edit.
    /// Failure here is not fatal; defaults still apply in memory.
    fn create_default_file(&self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(raw) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, raw);
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, raw).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings::load_from(&path);
        assert_eq!(settings.proposed_date_offset_days, 30);
        assert!(path.exists());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"xml.outputDir": "/tmp/docs"}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/docs"));
        assert_eq!(settings.template_path, PathBuf::from("templates/form15cb_template.xml"));
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{broken").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.master_path, PathBuf::from("data/master/master_data.json"));
    }
}
