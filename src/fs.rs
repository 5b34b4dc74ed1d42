use crate::errors::DiskError;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem abstraction boundary for the folder operations.
///
/// Keeping this trait narrow makes it easy to write deterministic tests and
/// allows alternative backends (e.g. an in-memory fs) if callers need them.
pub trait FileSystem: Send + Sync {
    /// Returns true when path exists (symlink-aware).
    fn exists(&self, path: &Path) -> bool;

    /// Returns true when path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns true when path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> crate::Result<()>;

    /// Removes a directory and everything under it.
    fn remove_dir_all(&self, path: &Path) -> crate::Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::create_dir_all(path).map_err(|err| DiskError::io(path, err))
    }

    fn remove_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::remove_dir_all(path).map_err(|err| DiskError::io(path, err))
    }
}

/// Returns true when `path` names an existing directory.
pub fn is_real_folder_path(path: impl AsRef<Path>) -> bool {
    is_real_folder_path_in(&RealFileSystem, path.as_ref())
}

/// [`is_real_folder_path`] against a caller-supplied backend.
pub fn is_real_folder_path_in(fs: &impl FileSystem, path: &Path) -> bool {
    fs.is_dir(path)
}

/// Returns true when `path` names an existing regular file.
pub fn is_real_file_path(path: impl AsRef<Path>) -> bool {
    is_real_file_path_in(&RealFileSystem, path.as_ref())
}

/// [`is_real_file_path`] against a caller-supplied backend.
pub fn is_real_file_path_in(fs: &impl FileSystem, path: &Path) -> bool {
    fs.is_file(path)
}

/// Creates `path` and any missing parents, returning the path unchanged.
/// Idempotent: an existing directory and its contents are left untouched.
pub fn create_folder(path: impl AsRef<Path>) -> crate::Result<PathBuf> {
    create_folder_in(&RealFileSystem, path.as_ref())
}

/// [`create_folder`] against a caller-supplied backend.
pub fn create_folder_in(fs: &impl FileSystem, path: &Path) -> crate::Result<PathBuf> {
    fs.create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Recursively deletes the directory at `path`.
///
/// Returns `1` when a directory was removed and `0` when the path does not
/// exist or is not a directory; neither case is an error. Callers racing two
/// deletes of the same path must serialize themselves.
pub fn delete_folder(path: impl AsRef<Path>) -> crate::Result<u64> {
    delete_folder_in(&RealFileSystem, path.as_ref())
}

/// [`delete_folder`] against a caller-supplied backend.
pub fn delete_folder_in(fs: &impl FileSystem, path: &Path) -> crate::Result<u64> {
    if !fs.is_dir(path) {
        return Ok(0);
    }
    fs.remove_dir_all(path)?;
    Ok(1)
}
