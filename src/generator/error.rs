use std::fmt;
use std::io;
use std::path::PathBuf;

/// Scaffolding failure taxonomy
///
/// `Usage` and `InvalidArea` abort the whole invocation before any file is
/// touched. `FileConflict` is scoped to a single emission: the orchestrator
/// reports it and continues with any sibling emission. `Io` aborts the
/// current emission without disturbing files already written.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Malformed invocation (e.g. both pattern-override flags set)
    Usage(String),
    /// Area value is not one of the two registered areas
    InvalidArea(String),
    /// Target path already exists and `--force` was not given
    FileConflict(PathBuf),
    /// Write or directory-creation failure
    Io {
        /// Path being written or created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::Usage(msg) => write!(f, "usage error: {msg}"),
            ScaffoldError::InvalidArea(area) => {
                write!(
                    f,
                    "invalid area '{area}': expected one of 'admin' or 'client'"
                )
            }
            ScaffoldError::FileConflict(path) => {
                write!(
                    f,
                    "refusing to overwrite existing file {path:?} (use --force to overwrite)"
                )
            }
            ScaffoldError::Io { path, source } => {
                write!(f, "I/O error at {path:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
