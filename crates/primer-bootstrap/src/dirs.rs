//! Required directory checks

use crate::error::EnsureDirError;
use std::path::{Path, PathBuf};

/// What `ensure_exists` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    AlreadyPresent,
    Created,
}

/// Idempotent directory creation.
pub trait DirectoryEnsurer {
    fn ensure_exists(&self, path: &Path) -> Result<EnsureOutcome, EnsureDirError>;
}

/// [`DirectoryEnsurer`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryEnsurer;

impl DirectoryEnsurer for FsDirectoryEnsurer {
    fn ensure_exists(&self, path: &Path) -> Result<EnsureOutcome, EnsureDirError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => return Ok(EnsureOutcome::AlreadyPresent),
            Ok(_) => {
                return Err(EnsureDirError::NotADirectory {
                    path: path.to_path_buf(),
                });
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(EnsureDirError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        std::fs::create_dir_all(path).map_err(|source| EnsureDirError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Created required directory: {}", path.display());
        Ok(EnsureOutcome::Created)
    }
}

/// Result of a best-effort pass over several directories.
#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub present: Vec<PathBuf>,
    pub created: Vec<PathBuf>,
    pub failed: Vec<EnsureDirError>,
}

impl DirectoryReport {
    /// True when every directory exists afterwards.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Ensure each path exists. A failure is logged and recorded; the remaining
/// paths are still attempted.
pub fn ensure_all<E, P>(ensurer: &E, paths: impl IntoIterator<Item = P>) -> DirectoryReport
where
    E: DirectoryEnsurer + ?Sized,
    P: AsRef<Path>,
{
    let mut report = DirectoryReport::default();

    for path in paths {
        let path = path.as_ref();
        match ensurer.ensure_exists(path) {
            Ok(EnsureOutcome::AlreadyPresent) => report.present.push(path.to_path_buf()),
            Ok(EnsureOutcome::Created) => report.created.push(path.to_path_buf()),
            Err(e) => {
                tracing::warn!("Failed to ensure directory {}: {}", path.display(), e);
                report.failed.push(e);
            }
        }
    }

    report
}
