//! Query and toggle whether a file or directory is hidden.
//!
//! On Windows an entry is hidden when its `FILE_ATTRIBUTE_HIDDEN` bit is set.
//! Everywhere else it is hidden when its name starts with a dot, so hiding
//! and unhiding rename it.

pub mod backend;
pub mod config;
pub mod entry;
pub mod error;
pub mod utils;

use std::path::{Path, PathBuf};

pub use config::{Config, HideOptions};
pub use entry::HiddenEntry;
pub use error::{ErrorKind, HideError, Result};

/// Check whether `path` is hidden
pub fn is_hidden(path: impl AsRef<Path>) -> Result<bool> {
    HiddenEntry::new(path.as_ref(), false).is_hidden()
}

/// Hide `path` without replacing anything in the way
pub fn hide(path: impl AsRef<Path>) -> Result<PathBuf> {
    HiddenEntry::new(path.as_ref(), false).hide()
}

/// Unhide `path` without replacing anything in the way
pub fn unhide(path: impl AsRef<Path>) -> Result<PathBuf> {
    HiddenEntry::new(path.as_ref(), false).unhide()
}

/// Install an `env_logger` logger, `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
