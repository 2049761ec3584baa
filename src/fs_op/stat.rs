use std::io::ErrorKind;
use std::path::{is_separator, Path, PathBuf};

use crate::fs_op::error::PathError;

/// Lightweight classification of what a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, device node and the like).
    Other,
}

impl PathKind {
    /// Stat `path` (following symlinks) and classify it.
    ///
    /// Only `NotFound` is folded into [`PathKind::Missing`]; every other stat
    /// failure, such as permission denied on a parent directory, is returned
    /// so callers can tell "absent" apart from "could not determine".
    pub fn of<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let p = path.as_ref();
        match std::fs::metadata(p) {
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(meta) if meta.is_file() => Ok(PathKind::File),
            Ok(_) => Ok(PathKind::Other),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PathKind::Missing),
            Err(source) => Err(PathError::Stat {
                path: p.to_path_buf(),
                source,
            }),
        }
    }

    pub fn exists(self) -> bool {
        self != PathKind::Missing
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Missing => "missing",
            PathKind::Directory => "directory",
            PathKind::File => "file",
            PathKind::Other => "other",
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return `Ok(true)` if something exists at `path`, `Ok(false)` if it is
/// confirmed absent.
pub fn exists<P: AsRef<Path>>(path: P) -> Result<bool, PathError> {
    PathKind::of(path).map(PathKind::exists)
}

// `Path::components` swallows a trailing `.`; when `path` ends in one,
// return everything before it.
fn before_trailing_dot(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches(is_separator);
    match trimmed.rsplit(is_separator).next() {
        Some(".") => Some(&trimmed[..trimmed.len() - 1]),
        _ => None,
    }
}

/// Final component of `path`.
///
/// Trailing separators are ignored, a trailing `.` is kept, the root is
/// returned as itself and an empty path yields `"."`.
pub fn final_component(path: &str) -> String {
    if before_trailing_dot(path).is_some() {
        return ".".to_string();
    }
    match Path::new(path).components().next_back() {
        Some(c) => c.as_os_str().to_string_lossy().into_owned(),
        None => ".".to_string(),
    }
}

/// Everything but the final component of `path`.
///
/// A lone relative component or an empty path yields `"."`; the root (and a
/// Windows prefix) is its own parent. For a trailing `.` the parent is the
/// directory it names, so `a/.` yields `a`.
pub fn parent_of(path: &str) -> String {
    if let Some(head) = before_trailing_dot(path) {
        let head: PathBuf = Path::new(head).components().collect();
        if head.as_os_str().is_empty() {
            return ".".to_string();
        }
        return head.to_string_lossy().into_owned();
    }
    let p = Path::new(path);
    match p.parent() {
        Some(parent) if parent.as_os_str().is_empty() => ".".to_string(),
        Some(parent) => parent.to_string_lossy().into_owned(),
        // no parent: either empty or nothing but a root/prefix
        None if path.is_empty() => ".".to_string(),
        None => path.to_string(),
    }
}
