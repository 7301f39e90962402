use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum XmlError {
    /// Mandatory fields missing or blank. Carries every offending key, so
    /// the user can fix the whole set in one pass.
    MissingMandatory(Vec<String>),
    /// The placeholder template is not where the settings point.
    TemplateMissing(PathBuf),
    /// Filesystem failure (permissions, disk), with the offending path.
    Io { path: PathBuf, message: String },
    /// Malformed document on import. Scoped to the one parse call.
    Parse(String),
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMandatory(keys) => {
                write!(
                    f,
                    "missing or empty mandatory fields: {}. Fill these in before generating.",
                    keys.join(", ")
                )
            }
            Self::TemplateMissing(path) => {
                write!(f, "XML template not found at {}", path.display())
            }
            Self::Io { path, message } => {
                write!(f, "IO error at {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "XML parse error: {msg}"),
        }
    }
}

impl std::error::Error for XmlError {}
