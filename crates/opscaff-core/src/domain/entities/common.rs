use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A filesystem path guaranteed to be **relative** and to stay below the
/// project root.
///
/// Every resolved template path goes through [`RelativePath::parse`], so the
/// writer can join it onto the output root without checking again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Validate a resolved path string.
    ///
    /// Rejects empty paths, absolute paths, and any `..` component.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let path = Path::new(raw);
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyPath {
                path: raw.to_string(),
            });
        }
        if path.is_absolute() || raw.starts_with('/') || raw.starts_with('\\') {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::PathEscapesRoot {
                        path: raw.to_string(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed {
                        path: raw.to_string(),
                    });
                }
            }
        }
        if normalized.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath {
                path: raw.to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume into a `PathBuf`.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
