use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum MasterError {
    /// JSON parse / deserialization error in a reference dataset.
    DataParse(String),
    /// IO error (file read, etc.), with the offending path.
    Io { path: PathBuf, message: String },
}

impl fmt::Display for MasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataParse(msg) => write!(f, "reference data parse error: {msg}"),
            Self::Io { path, message } => {
                write!(f, "IO error reading {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for MasterError {}
