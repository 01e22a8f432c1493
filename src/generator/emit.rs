use std::fs;
use std::path::PathBuf;

use super::error::ScaffoldError;

/// One file derived from a generation request, ready to persist
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

/// What the emission gate did with a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Written,
    Overwritten,
}

/// Existence-check-then-write gate.
///
/// Refuses to touch an existing file unless `force` is set; otherwise
/// creates missing parent directories and writes the content. The check and
/// the write are not atomic against external processes, which is acceptable
/// for an interactive developer tool.
///
/// # Errors
///
/// `ScaffoldError::FileConflict` when the path exists without `force`;
/// `ScaffoldError::Io` on directory-creation or write failure.
pub fn emit(file: &GeneratedFile, force: bool) -> Result<EmitOutcome, ScaffoldError> {
    let existed = file.path.exists();
    if existed && !force {
        return Err(ScaffoldError::FileConflict(file.path.clone()));
    }
    if let Some(parent) = file.path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&file.path, &file.content).map_err(|source| ScaffoldError::Io {
        path: file.path.clone(),
        source,
    })?;
    Ok(if existed {
        EmitOutcome::Overwritten
    } else {
        EmitOutcome::Written
    })
}
