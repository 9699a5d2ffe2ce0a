use crate::backend::{self, Backend};
use crate::config::{Config, HideOptions};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A filesystem entry whose hidden state can be queried and toggled.
///
/// The handle keeps no cached state and no open file: every call goes back to
/// the filesystem. When hiding renames the entry, the handle follows it to
/// the new path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenEntry {
    path: PathBuf,
    options: HideOptions,
}

impl HiddenEntry {
    pub fn new(path: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self::with_options(path, HideOptions::new(overwrite))
    }

    pub fn with_options(path: impl Into<PathBuf>, options: HideOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn from_config(path: impl Into<PathBuf>, config: &Config) -> Self {
        Self::with_options(path, config.hide)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> HideOptions {
        self.options
    }

    pub fn is_hidden(&self) -> Result<bool> {
        backend::native().is_hidden(&self.path)
    }

    /// Hide the entry, returning the path it lives at afterwards.
    pub fn hide(&mut self) -> Result<PathBuf> {
        let backend = backend::native();
        log::debug!("Hiding {:?} with the {} backend", self.path, backend.name());
        let path = backend.hide(&self.path, &self.options)?;
        self.path = path.clone();
        Ok(path)
    }

    /// Unhide the entry, returning the path it lives at afterwards.
    pub fn unhide(&mut self) -> Result<PathBuf> {
        let backend = backend::native();
        log::debug!("Unhiding {:?} with the {} backend", self.path, backend.name());
        let path = backend.unhide(&self.path, &self.options)?;
        self.path = path.clone();
        Ok(path)
    }

    pub fn set_hidden(&mut self, hidden: bool) -> Result<PathBuf> {
        if hidden {
            self.hide()
        } else {
            self.unhide()
        }
    }

    /// Flip the current state.
    pub fn toggle(&mut self) -> Result<PathBuf> {
        let hidden = self.is_hidden()?;
        self.set_hidden(!hidden)
    }
}
