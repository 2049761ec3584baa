//! Resolve `~`, `~user` and `$VAR` shorthand in user-supplied paths.
//!
//! The free functions use the host user database and the process
//! environment. Build a [`PathExpander`] directly to inject other sources or
//! change [`ExpandOptions`].

pub mod cli;
pub mod config;
pub mod env;
pub mod expand;
pub mod fs_op;
pub mod identity;
pub mod logging;

pub use crate::config::ExpandOptions;
pub use crate::env::{EnvSource, MapEnv, ProcessEnv};
pub use crate::expand::{Expansion, Outcome, PathExpander};
pub use crate::fs_op::{ConfigError, PathError, PathKind};
pub use crate::identity::{IdentityDb, StaticIdentity, SystemIdentity};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Expand shorthand in `path`. Never fails; unresolvable shorthand is left as
/// written.
pub fn expand_path(path: &str) -> String {
    PathExpander::system().expand(path)
}

/// Final component of the expanded `path`.
pub fn basename(path: &str) -> String {
    PathExpander::system().basename(path)
}

/// All but the final component of the expanded `path`.
pub fn dirname(path: &str) -> String {
    PathExpander::system().dirname(path)
}

/// Whether the expanded `path` exists.
///
/// Returns `Ok(false)` only when the path is confirmed absent. Permission and
/// other I/O failures are errors.
pub fn path_exists(path: &str) -> Result<bool, PathError> {
    PathExpander::system().path_exists(path)
}

/// Classify what the expanded `path` points at.
pub fn path_kind(path: &str) -> Result<PathKind, PathError> {
    PathExpander::system().path_kind(path)
}
