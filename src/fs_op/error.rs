use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers and option loading.
///
/// Expansion itself never fails; only operations that touch the filesystem
/// report through this type.
#[derive(Error, Debug)]
pub enum PathError {
    /// `stat` failed for a reason other than the path being absent.
    #[error("cannot stat `{}`: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An options file could not be read or parsed.
    #[error("cannot load options from `{}`: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Reasons an options document is rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
