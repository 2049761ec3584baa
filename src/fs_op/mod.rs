//! Filesystem-facing helpers: stat classification and the error type shared
//! by everything that touches the disk.

pub mod error;
pub mod stat;

pub use error::{ConfigError, PathError};
pub use stat::PathKind;
