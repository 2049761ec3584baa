//! Shorthand expansion for user-supplied paths.
//!
//! Behaviour, in order:
//! - `$VAR` and `${VAR}` are substituted from the environment (unless
//!   disabled). Unset variables and `$$` stay as literal text.
//! - `~` alone becomes the home directory of the user running the process.
//! - `~/rest` becomes that home directory joined with `rest` and lexically
//!   cleaned: `.` and repeated separators drop out, `..` removes the
//!   preceding component and never climbs above the root.
//! - `~name` and `~name/rest` replace the `~name` prefix with `name`'s home
//!   directory, leaving `rest` untouched.
//! - Anything else is returned as-is.
//!
//! Expansion never fails. When a home directory cannot be resolved the input
//! (after variable substitution) comes back unchanged, and the reason is only
//! visible through [`Expansion::outcome`] and `debug` logs.

use std::borrow::Cow;
use std::convert::Infallible;
use std::path::{is_separator, Component, Path, PathBuf};

use crate::config::ExpandOptions;
use crate::env::{EnvSource, ProcessEnv};
use crate::fs_op::error::PathError;
use crate::fs_op::stat::{self, PathKind};
use crate::identity::{IdentityDb, SystemIdentity};

/// How a single expansion turned out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No tilde shorthand was present.
    Literal,
    /// `~` or `~/...` was replaced with the current user's home.
    CurrentUser,
    /// `~name` was replaced with `name`'s home.
    NamedUser(String),
    /// `~` or `~/...` was left alone: the process owner could not be resolved.
    CurrentUserUnknown,
    /// `~name` was left alone: no such user.
    UnknownUser(String),
}

impl Outcome {
    /// `true` when a tilde prefix was present but could not be resolved.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Outcome::CurrentUserUnknown | Outcome::UnknownUser(_))
    }
}

/// The expanded path together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub path: String,
    pub outcome: Outcome,
}

impl Expansion {
    fn new(path: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

/// Expands path shorthand against an identity database and an environment.
#[derive(Debug, Clone, Default)]
pub struct PathExpander<I = SystemIdentity, E = ProcessEnv> {
    identity: I,
    env: E,
    options: ExpandOptions,
}

impl PathExpander {
    /// An expander backed by the host user database and process environment.
    pub fn system() -> Self {
        Self::new(SystemIdentity, ProcessEnv)
    }
}

impl<I: IdentityDb, E: EnvSource> PathExpander<I, E> {
    pub fn new(identity: I, env: E) -> Self {
        Self {
            identity,
            env,
            options: ExpandOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ExpandOptions {
        self.options
    }

    /// Expand `path`, returning the result (never fails).
    pub fn expand(&self, path: &str) -> String {
        self.expand_detailed(path).path
    }

    /// Expand `path` and report how the result was obtained.
    pub fn expand_detailed(&self, path: &str) -> Expansion {
        let substituted = if self.options.env {
            self.substitute_env(path)
        } else {
            Cow::Borrowed(path)
        };

        let Some(rest) = substituted.strip_prefix('~') else {
            return Expansion::new(substituted, Outcome::Literal);
        };

        if rest.is_empty() {
            return match self.identity.current_home() {
                Some(home) => {
                    let home = clean_join(&home, "");
                    tracing::trace!("expanded {:?} to {}", path, home.display());
                    Expansion::new(home.to_string_lossy(), Outcome::CurrentUser)
                }
                None => self.unresolved(path, substituted, Outcome::CurrentUserUnknown),
            };
        }

        if let Some(tail) = rest.strip_prefix(is_separator) {
            return match self.identity.current_home() {
                Some(home) => {
                    let joined = clean_join(&home, tail);
                    tracing::trace!("expanded {:?} to {}", path, joined.display());
                    Expansion::new(joined.to_string_lossy(), Outcome::CurrentUser)
                }
                None => self.unresolved(path, substituted, Outcome::CurrentUserUnknown),
            };
        }

        // `~name` or `~name/tail`; the name never spans a separator
        let end = rest.find(is_separator).unwrap_or(rest.len());
        let (name, tail) = rest.split_at(end);
        match self.identity.home_for(name) {
            Some(home) => {
                let expanded = format!("{}{}", home.to_string_lossy(), tail);
                tracing::trace!("expanded {:?} to {:?}", path, expanded);
                Expansion::new(expanded, Outcome::NamedUser(name.to_string()))
            }
            None => {
                let outcome = Outcome::UnknownUser(name.to_string());
                self.unresolved(path, substituted, outcome)
            }
        }
    }

    /// Final component of the expanded path.
    pub fn basename(&self, path: &str) -> String {
        stat::final_component(&self.expand(path))
    }

    /// All but the final component of the expanded path.
    pub fn dirname(&self, path: &str) -> String {
        stat::parent_of(&self.expand(path))
    }

    /// Whether the expanded path exists.
    ///
    /// `Ok(false)` means the path is confirmed absent; any other stat failure
    /// is returned as an error.
    pub fn path_exists(&self, path: &str) -> Result<bool, PathError> {
        stat::exists(self.expand(path))
    }

    /// Classify what the expanded path points at.
    pub fn path_kind(&self, path: &str) -> Result<PathKind, PathError> {
        PathKind::of(self.expand(path))
    }

    fn substitute_env<'a>(&self, path: &'a str) -> Cow<'a, str> {
        // shellexpand folds `$$` into `$`; keep it as written instead
        if !path.contains("$$") {
            return self.substitute_segment(path);
        }
        let parts: Vec<Cow<'_, str>> = path
            .split("$$")
            .map(|segment| self.substitute_segment(segment))
            .collect();
        Cow::Owned(parts.join("$$"))
    }

    fn substitute_segment<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        let lookup = |name: &str| -> Result<Option<String>, Infallible> { Ok(self.env.var(name)) };
        match shellexpand::env_with_context(segment, lookup) {
            Ok(s) => s,
            Err(_) => Cow::Borrowed(segment),
        }
    }

    fn unresolved(&self, original: &str, substituted: Cow<'_, str>, outcome: Outcome) -> Expansion {
        tracing::debug!("left {:?} unexpanded: {:?}", original, outcome);
        Expansion::new(substituted, outcome)
    }
}

// Join `tail` onto `home` and clean the result lexically. `..` pops the
// previous normal component, is dropped at the root and kept at the start of
// a relative path. A root in `tail` must not replace `home`.
fn clean_join(home: &Path, tail: &str) -> PathBuf {
    fn push<'a>(parts: &mut Vec<Component<'a>>, c: Component<'a>) {
        match c {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(c),
            },
            _ => parts.push(c),
        }
    }

    let mut parts = Vec::new();
    for c in home.components() {
        push(&mut parts, c);
    }
    for c in Path::new(tail).components() {
        if !matches!(c, Component::RootDir | Component::Prefix(_)) {
            push(&mut parts, c);
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
