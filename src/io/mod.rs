pub mod output;
pub mod walker;

pub use walker::FileWalker;

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to a file's name for the copy kept before conversion.
pub const BACKUP_SUFFIX: &str = "formik.bak";

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_at(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_at(path, e))
}

/// `Form.jsx` → `Form.jsx.formik.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` next to itself and return where the copy went.
pub fn write_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| Error::io_at(&backup, e))?;
    Ok(backup)
}
