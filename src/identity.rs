//! Read-only access to the host user database.
//!
//! Expansion only ever needs two questions answered: "where is the home
//! directory of the user running this process?" and "where is the home
//! directory of the user called `name`?". Both are behind the
//! [`IdentityDb`] trait so callers (and tests) can substitute a fixed table
//! for the real passwd lookups.

use std::collections::HashMap;
use std::path::PathBuf;

/// Lookup of home directories by process owner or by user name.
///
/// A `None` answer means "could not resolve"; callers treat it as a reason to
/// leave the input untouched rather than as an error.
pub trait IdentityDb {
    /// Home directory of the user owning the current process.
    fn current_home(&self) -> Option<PathBuf>;

    /// Home directory of the user called `name`.
    fn home_for(&self, name: &str) -> Option<PathBuf>;
}

impl<T: IdentityDb + ?Sized> IdentityDb for &T {
    fn current_home(&self) -> Option<PathBuf> {
        (**self).current_home()
    }

    fn home_for(&self, name: &str) -> Option<PathBuf> {
        (**self).home_for(name)
    }
}

/// The host user database.
///
/// On Unix this reads the passwd database through `getpwuid_r` /
/// `getpwnam_r`. The current user is the real uid of the process; `HOME` is
/// never consulted. Other platforms have no database to query and always
/// answer `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

#[cfg(unix)]
impl IdentityDb for SystemIdentity {
    fn current_home(&self) -> Option<PathBuf> {
        use nix::unistd::{getuid, User};

        match User::from_uid(getuid()) {
            Ok(Some(user)) => Some(user.dir),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("passwd lookup for current uid failed: {}", e);
                None
            }
        }
    }

    fn home_for(&self, name: &str) -> Option<PathBuf> {
        use nix::unistd::User;

        // not representable as a C string, so no passwd entry can match
        if name.contains('\0') {
            return None;
        }
        match User::from_name(name) {
            Ok(Some(user)) => Some(user.dir),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("passwd lookup for {:?} failed: {}", name, e);
                None
            }
        }
    }
}

#[cfg(not(unix))]
impl IdentityDb for SystemIdentity {
    fn current_home(&self) -> Option<PathBuf> {
        None
    }

    fn home_for(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

/// A fixed, in-memory user table.
///
/// Useful for deterministic tests and for embedding callers that keep their
/// own notion of users.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    current: Option<PathBuf>,
    users: HashMap<String, PathBuf>,
}

impl StaticIdentity {
    /// An empty table: no current user and no named users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the home directory reported for the current user.
    pub fn with_current(mut self, home: impl Into<PathBuf>) -> Self {
        self.current = Some(home.into());
        self
    }

    /// Register a named user.
    pub fn with_user(mut self, name: impl Into<String>, home: impl Into<PathBuf>) -> Self {
        self.users.insert(name.into(), home.into());
        self
    }
}

impl IdentityDb for StaticIdentity {
    fn current_home(&self) -> Option<PathBuf> {
        self.current.clone()
    }

    fn home_for(&self, name: &str) -> Option<PathBuf> {
        self.users.get(name).cloned()
    }
}
