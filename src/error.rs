use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which half of an attribute read-modify-write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOp {
    Get,
    Set,
}

impl fmt::Display for AttributeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeOp::Get => f.write_str("read"),
            AttributeOp::Set => f.write_str("write"),
        }
    }
}

/// Error category, for callers that only care which kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Stat,
    AlreadyExists,
    Attribute,
    Rename,
    InvalidName,
}

/// Errors returned by hidden-state queries and transitions
#[derive(Error, Debug)]
pub enum HideError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot move {} to {}: target already exists", path.display(), target.display())]
    AlreadyExists { path: PathBuf, target: PathBuf },

    #[error("failed to {op} attributes of {}: {source}", path.display())]
    Attribute {
        path: PathBuf,
        op: AttributeOp,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has no file name that can be hidden or unhidden", path.display())]
    InvalidName { path: PathBuf },
}

/// Result type alias for hidden-state operations
pub type Result<T> = std::result::Result<T, HideError>;

impl HideError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HideError::NotFound { .. } => ErrorKind::NotFound,
            HideError::Stat { .. } => ErrorKind::Stat,
            HideError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            HideError::Attribute { .. } => ErrorKind::Attribute,
            HideError::Rename { .. } => ErrorKind::Rename,
            HideError::InvalidName { .. } => ErrorKind::InvalidName,
        }
    }

    /// Map a metadata failure, keeping absence distinct from other stat errors
    pub(crate) fn from_stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            HideError::NotFound { path }
        } else {
            HideError::Stat { path, source }
        }
    }
}
