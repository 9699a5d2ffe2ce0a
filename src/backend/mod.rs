#[cfg(windows)]
mod attribute;
mod dot_prefix;

use crate::config::HideOptions;
use crate::error::{HideError, Result};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

#[cfg(windows)]
pub use attribute::AttributeBackend;
pub use dot_prefix::DotPrefixBackend;

/// One platform's notion of "hidden"
pub trait Backend: Send + Sync {
    /// Returns the name of this backend
    fn name(&self) -> &str;

    /// Check whether an existing entry is hidden
    fn is_hidden(&self, path: &Path) -> Result<bool>;

    /// Make the entry hidden and return its (possibly new) path
    fn hide(&self, path: &Path, options: &HideOptions) -> Result<PathBuf>;

    /// Make the entry visible and return its (possibly new) path
    fn unhide(&self, path: &Path, options: &HideOptions) -> Result<PathBuf>;
}

#[cfg(windows)]
pub type NativeBackend = AttributeBackend;

#[cfg(not(windows))]
pub type NativeBackend = DotPrefixBackend;

/// The backend for the platform this crate was compiled for
pub fn native() -> NativeBackend {
    NativeBackend::default()
}

/// Stat without following a final symlink, so links are hidden themselves.
pub(crate) fn stat(path: &Path) -> Result<Metadata> {
    fs::symlink_metadata(path).map_err(|e| HideError::from_stat(path, e))
}
