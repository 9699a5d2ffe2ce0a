use super::{stat, Backend};
use crate::config::HideOptions;
use crate::error::{HideError, Result};
use crate::utils::file::{has_hidden_name, hidden_name, trim_cur_dir, visible_name};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const ASIDE_ATTEMPTS: u32 = 10000;

type RenameFn = fn(&Path, &Path) -> io::Result<()>;
type RemoveFn = fn(&Path, bool) -> io::Result<()>;

/// Hidden means the base name starts with a dot; hiding is a rename.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotPrefixBackend;

impl DotPrefixBackend {
    pub fn new() -> Self {
        Self
    }

    fn move_entry(source: &Path, target: &Path, overwrite: bool) -> Result<PathBuf> {
        let source_is_dir = stat(source)?.is_dir();

        let target_is_dir = match fs::symlink_metadata(target) {
            Ok(metadata) => Some(metadata.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(HideError::Stat {
                    path: target.to_path_buf(),
                    source: e,
                })
            }
        };

        match target_is_dir {
            // Not atomic with the check above: rename(2) replaces anything created
            // at the target in between, even without overwrite.
            None => {
                log::info!("Renaming {:?} -> {:?}", source, target);
                rename(source, target)?;
            }
            Some(_) if !overwrite => {
                return Err(HideError::AlreadyExists {
                    path: source.to_path_buf(),
                    target: target.to_path_buf(),
                });
            }
            // rename(2) swaps a non-directory into place atomically
            Some(false) if !source_is_dir => {
                log::info!("Renaming {:?} -> {:?}, replacing existing file", source, target);
                rename(source, target)?;
            }
            Some(is_dir) => {
                Self::replace_via_aside(source, target, is_dir, rename_entry, remove_entry)?
            }
        }

        Ok(target.to_path_buf())
    }

    /// Move the occupant out of the way, rename into its place, then drop the occupant.
    /// The occupant is put back if the main rename fails.
    fn replace_via_aside(
        source: &Path,
        target: &Path,
        target_is_dir: bool,
        rename_into_place: RenameFn,
        remove_aside: RemoveFn,
    ) -> Result<()> {
        let aside = Self::aside_path(target, ASIDE_ATTEMPTS)?;

        log::info!(
            "Replacing {:?} with {:?}, moving old entry to {:?}",
            target,
            source,
            aside
        );
        rename(target, &aside)?;

        if let Err(source_err) = rename_into_place(source, target) {
            if let Err(restore) = fs::rename(&aside, target) {
                log::error!(
                    "Could not restore {:?} from {:?}: {}",
                    target,
                    aside,
                    restore
                );
            }
            return Err(HideError::Rename {
                from: source.to_path_buf(),
                to: target.to_path_buf(),
                source: source_err,
            });
        }

        if let Err(e) = remove_aside(&aside, target_is_dir) {
            log::warn!("Replaced entry left behind at {:?}: {}", aside, e);
        }

        Ok(())
    }

    fn aside_path(target: &Path, attempts: u32) -> Result<PathBuf> {
        let name = target
            .file_name()
            .ok_or_else(|| HideError::InvalidName {
                path: target.to_path_buf(),
            })?;

        let mut prefix = OsString::from(".");
        prefix.push(name);
        prefix.push(format!(".replaced-{}-", std::process::id()));

        // Try numbered suffixes until we find an unused sibling name
        for i in 1..=attempts {
            let mut aside_name = prefix.clone();
            aside_name.push(i.to_string());

            let aside = target.with_file_name(aside_name);
            if fs::symlink_metadata(&aside).is_err() {
                return Ok(aside);
            }
        }

        let mut pattern = prefix;
        pattern.push("*");
        Err(HideError::Rename {
            from: target.to_path_buf(),
            to: target.with_file_name(pattern),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("no unused name to move the existing entry aside after {} attempts", attempts),
            ),
        })
    }
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| HideError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn rename_entry(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
}

fn remove_entry(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

impl Backend for DotPrefixBackend {
    fn name(&self) -> &str {
        "dot-prefix"
    }

    fn is_hidden(&self, path: &Path) -> Result<bool> {
        let path = trim_cur_dir(path);
        stat(&path)?;
        let hidden = has_hidden_name(&path);
        log::debug!("{:?} hidden: {}", path, hidden);
        Ok(hidden)
    }

    fn hide(&self, path: &Path, options: &HideOptions) -> Result<PathBuf> {
        let path = trim_cur_dir(path);
        if self.is_hidden(&path)? {
            log::debug!("Already hidden: {:?}", path);
            return Ok(path);
        }

        let target = hidden_name(&path).ok_or_else(|| HideError::InvalidName {
            path: path.clone(),
        })?;
        Self::move_entry(&path, &target, options.overwrite)
    }

    fn unhide(&self, path: &Path, options: &HideOptions) -> Result<PathBuf> {
        let path = trim_cur_dir(path);
        if !self.is_hidden(&path)? {
            log::debug!("Already visible: {:?}", path);
            return Ok(path);
        }

        let target = visible_name(&path).ok_or_else(|| HideError::InvalidName {
            path: path.clone(),
        })?;
        Self::move_entry(&path, &target, options.overwrite)
    }
}
