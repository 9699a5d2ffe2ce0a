// Windows file attribute backend: hidden state is FILE_ATTRIBUTE_HIDDEN

use super::{stat, Backend};
use crate::config::HideOptions;
use crate::error::{AttributeOp, HideError, Result};
use std::io;
use std::iter;
use std::os::windows::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use windows_sys::Win32::Storage::FileSystem::{
    GetFileAttributesW, SetFileAttributesW, FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_NORMAL,
    INVALID_FILE_ATTRIBUTES,
};

/// Hidden means the attribute bit is set; the path never changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeBackend;

impl AttributeBackend {
    pub fn new() -> Self {
        Self
    }

    /// Read the raw attribute mask
    pub(crate) fn attributes(path: &Path) -> Result<u32> {
        let wide = to_wide(path);

        let attrs = unsafe { GetFileAttributesW(wide.as_ptr()) };

        if attrs == INVALID_FILE_ATTRIBUTES {
            let source = io::Error::last_os_error();
            if source.kind() == io::ErrorKind::NotFound {
                return Err(HideError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Err(HideError::Attribute {
                path: path.to_path_buf(),
                op: AttributeOp::Get,
                source,
            });
        }

        Ok(attrs)
    }

    /// Write the raw attribute mask
    pub(crate) fn set_attributes(path: &Path, attrs: u32) -> Result<()> {
        let wide = to_wide(path);

        // An empty mask is spelled FILE_ATTRIBUTE_NORMAL
        let attrs = if attrs == 0 { FILE_ATTRIBUTE_NORMAL } else { attrs };

        let result = unsafe { SetFileAttributesW(wide.as_ptr(), attrs) };

        if result == 0 {
            return Err(HideError::Attribute {
                path: path.to_path_buf(),
                op: AttributeOp::Set,
                source: io::Error::last_os_error(),
            });
        }

        Ok(())
    }

    fn set_hidden(path: &Path, hidden: bool) -> Result<PathBuf> {
        stat(path)?;

        let attrs = Self::attributes(path)?;
        if (attrs & FILE_ATTRIBUTE_HIDDEN != 0) == hidden {
            log::debug!("{:?} already has hidden = {}", path, hidden);
            return Ok(path.to_path_buf());
        }

        let new_attrs = if hidden {
            attrs | FILE_ATTRIBUTE_HIDDEN
        } else {
            attrs & !FILE_ATTRIBUTE_HIDDEN
        };

        log::info!(
            "Setting hidden = {} on {:?} (attributes {:#x} -> {:#x})",
            hidden,
            path,
            attrs,
            new_attrs
        );
        Self::set_attributes(path, new_attrs)?;

        Ok(path.to_path_buf())
    }
}

fn to_wide(path: &Path) -> Vec<u16> {
    path.as_os_str().encode_wide().chain(iter::once(0)).collect()
}

impl Backend for AttributeBackend {
    fn name(&self) -> &str {
        "attribute-bit"
    }

    fn is_hidden(&self, path: &Path) -> Result<bool> {
        stat(path)?;
        let hidden = Self::attributes(path)? & FILE_ATTRIBUTE_HIDDEN != 0;
        log::debug!("{:?} hidden: {}", path, hidden);
        Ok(hidden)
    }

    // No rename happens here, so the overwrite policy has nothing to govern
    fn hide(&self, path: &Path, _options: &HideOptions) -> Result<PathBuf> {
        Self::set_hidden(path, true)
    }

    fn unhide(&self, path: &Path, _options: &HideOptions) -> Result<PathBuf> {
        Self::set_hidden(path, false)
    }
}
