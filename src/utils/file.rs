//! Dot-prefix naming rules. Pure path arithmetic, nothing here touches the filesystem.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub fn has_hidden_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Drop `.` components, so `c/.` names `c` itself and can be renamed.
pub fn trim_cur_dir(path: &Path) -> PathBuf {
    path.components().collect()
}

/// The sibling path with a `.` prepended to the base name.
///
/// Returns `None` when the path has no base name (`/`, `..`).
pub fn hidden_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let mut hidden = OsString::from(".");
    hidden.push(name);
    Some(path.with_file_name(hidden))
}

/// The sibling path with exactly one leading `.` stripped from the base name.
///
/// Returns `None` when there is no base name or nothing would be left of it.
pub fn visible_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let stripped = strip_leading_dot(name)?;
    if stripped.is_empty() {
        return None;
    }
    Some(path.with_file_name(stripped))
}

fn strip_leading_dot(name: &OsStr) -> Option<OsString> {
    if let Some(s) = name.to_str() {
        return s.strip_prefix('.').map(OsString::from);
    }

    #[cfg(unix)]
    {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};
        name.as_bytes()
            .strip_prefix(b".")
            .map(|rest| OsString::from_vec(rest.to_vec()))
    }

    #[cfg(windows)]
    {
        use std::os::windows::ffi::{OsStrExt, OsStringExt};
        let wide: Vec<u16> = name.encode_wide().collect();
        match wide.split_first() {
            Some((&first, rest)) if first == u16::from(b'.') => Some(OsString::from_wide(rest)),
            _ => None,
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        None
    }
}
