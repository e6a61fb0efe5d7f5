//! Database file references: either a raw path string supplied by the caller
//! or an already-resolved [`DbFile`].

use crate::errors::{CODE_EMPTY_PATH, ConnError, ConnResult};
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Resolved reference to a database file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbFile {
    path: PathBuf,
}

impl DbFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn to_path_string(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// What callers hand to `open_connection` / `create_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    Path(String),
    Handle(DbFile),
}

impl DbTarget {
    /// Turn the target into a single `DbFile`. Empty paths are rejected.
    pub fn resolve(self) -> ConnResult<DbFile> {
        match self {
            DbTarget::Path(p) => {
                if p.is_empty() {
                    return Err(ConnError::invalid(CODE_EMPTY_PATH, "file path has zero length"));
                }
                Ok(DbFile::new(expand_tilde(&p)))
            }
            DbTarget::Handle(file) => {
                if file.path().as_os_str().is_empty() {
                    return Err(ConnError::invalid(
                        CODE_EMPTY_PATH,
                        "file handle has an empty path",
                    ));
                }
                Ok(file)
            }
        }
    }
}

impl From<&str> for DbTarget {
    fn from(s: &str) -> Self {
        DbTarget::Path(s.to_string())
    }
}

impl From<String> for DbTarget {
    fn from(s: String) -> Self {
        DbTarget::Path(s)
    }
}

impl From<&String> for DbTarget {
    fn from(s: &String) -> Self {
        DbTarget::Path(s.clone())
    }
}

impl From<&Path> for DbTarget {
    fn from(p: &Path) -> Self {
        DbTarget::Handle(DbFile::new(p))
    }
}

impl From<PathBuf> for DbTarget {
    fn from(p: PathBuf) -> Self {
        DbTarget::Handle(DbFile::new(p))
    }
}

impl From<DbFile> for DbTarget {
    fn from(f: DbFile) -> Self {
        DbTarget::Handle(f)
    }
}

impl From<&DbFile> for DbTarget {
    fn from(f: &DbFile) -> Self {
        DbTarget::Handle(f.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn empty_path_is_invalid() {
        let err = DbTarget::from("").resolve().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.code(), Some(1101));

        let err = DbTarget::from(PathBuf::new()).resolve().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn handle_resolves_unchanged() {
        let file = DbFile::new("/tmp/some.sqlite");
        let resolved = DbTarget::from(&file).resolve().unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn plain_path_resolves_to_same_string() {
        let resolved = DbTarget::from("/tmp/plain.sqlite").resolve().unwrap();
        assert_eq!(resolved.to_path_string(), "/tmp/plain.sqlite");
    }
}
