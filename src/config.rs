//! Expansion options.
//!
//! Options may be written in a TOML document under an `[expand]` table:
//!
//! ```toml
//! [expand]
//! env = false
//! ```
//!
//! A document without the table (or with an empty one) yields the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::fs_op::error::{ConfigError, PathError};

/// Knobs controlling [`crate::PathExpander`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandOptions {
    /// Substitute `$VAR` / `${VAR}` references before tilde expansion.
    pub env: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self { env: true }
    }
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    expand: ExpandOptions,
}

impl ExpandOptions {
    /// Tilde expansion only.
    pub fn tilde_only() -> Self {
        Self { env: false }
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let doc: Document = toml::from_str(s)?;
        Ok(doc.expand)
    }

    /// Read and parse the options file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        let wrap = |source: ConfigError| PathError::Config {
            path: path.to_path_buf(),
            source,
        };
        let text = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        Self::from_toml(&text).map_err(|e| wrap(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_enable_env() {
        assert!(ExpandOptions::default().env);
        assert_eq!(ExpandOptions::from_toml("").unwrap(), ExpandOptions::default());
        assert_eq!(ExpandOptions::from_toml("[expand]\n").unwrap(), ExpandOptions::default());
    }

    #[test]
    fn env_can_be_disabled() {
        let opts = ExpandOptions::from_toml("[expand]\nenv = false\n").unwrap();
        assert_eq!(opts, ExpandOptions::tilde_only());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ExpandOptions::from_toml("[expand]\nglob = true\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("pathname.toml");
        fs::write(&f, "[expand]\nenv = false\n").unwrap();
        assert!(!ExpandOptions::load(&f).unwrap().env);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("absent.toml");
        let err = ExpandOptions::load(&f).unwrap_err();
        assert!(matches!(err, PathError::Config { ref path, source: ConfigError::Io(_) } if *path == f));
    }

    #[test]
    fn load_bad_toml_is_parse_error() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("bad.toml");
        fs::write(&f, "[expand\n").unwrap();
        let err = ExpandOptions::load(&f).unwrap_err();
        assert!(matches!(err, PathError::Config { source: ConfigError::Parse(_), .. }));
    }
}
