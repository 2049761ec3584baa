use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::{ExpandOptions, PathExpander};

#[derive(Parser, Debug)]
#[command(name = "pathname", version, about = "Expand ~, ~user and $VAR shorthand in paths")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Do not substitute environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Read expansion options from a TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print each path with its shorthand expanded
    Expand {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the final component of the expanded path
    Basename { path: String },
    /// Print all but the final component of the expanded path
    Dirname { path: String },
    /// Print `true` and exit 0 if the expanded path exists, `false` and exit 1 if not
    Exists { path: String },
    /// Print what the expanded path points at (missing, directory, file, other)
    Kind { path: String },
}

pub const EXIT_OK: u8 = 0;
/// Exit status of `exists` for an absent path.
pub const EXIT_MISSING: u8 = 1;
/// Exit status when `exists` could not determine the answer.
pub const EXIT_STAT_ERROR: u8 = 2;

impl Cli {
    fn options(&self) -> Result<ExpandOptions> {
        let mut opts = match &self.config {
            Some(path) => ExpandOptions::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ExpandOptions::default(),
        };
        if self.no_env {
            opts.env = false;
        }
        Ok(opts)
    }
}

/// Execute `cli`, writing results to `out`, and return the exit status.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<u8> {
    let expander = PathExpander::system().with_options(cli.options()?);

    match &cli.command {
        Command::Expand { paths } => {
            for p in paths {
                writeln!(out, "{}", expander.expand(p))?;
            }
        }
        Command::Basename { path } => writeln!(out, "{}", expander.basename(path))?,
        Command::Dirname { path } => writeln!(out, "{}", expander.dirname(path))?,
        Command::Exists { path } => match expander.path_exists(path) {
            Ok(found) => {
                writeln!(out, "{}", found)?;
                if !found {
                    return Ok(EXIT_MISSING);
                }
            }
            Err(e) => {
                eprintln!("pathname: {}", e);
                return Ok(EXIT_STAT_ERROR);
            }
        },
        Command::Kind { path } => {
            let kind = expander
                .path_kind(path)
                .with_context(|| format!("classifying {}", path))?;
            writeln!(out, "{}", kind)?;
        }
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_args(args: &[&str]) -> (u8, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let code = run(&cli, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn expand_prints_one_line_per_path() {
        let (code, out) = run_args(&["pathname", "expand", "/a", "~nosuchuser_pathname/x"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "/a\n~nosuchuser_pathname/x\n");
    }

    #[test]
    fn expand_requires_a_path() {
        assert!(Cli::try_parse_from(["pathname", "expand"]).is_err());
    }

    #[test]
    fn no_env_keeps_variables() {
        let (_, out) = run_args(&["pathname", "--no-env", "expand", "$PATH"]);
        assert_eq!(out, "$PATH\n");
    }

    #[test]
    fn basename_and_dirname() {
        let (_, out) = run_args(&["pathname", "basename", "path/to/file"]);
        assert_eq!(out, "file\n");
        let (_, out) = run_args(&["pathname", "dirname", "path/to/file"]);
        assert_eq!(out, "path/to\n");
    }

    #[test]
    fn exists_exit_codes() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("f");
        std::fs::write(&f, b"x").unwrap();

        let (code, out) = run_args(&["pathname", "exists", f.to_str().unwrap()]);
        assert_eq!((code, out.as_str()), (EXIT_OK, "true\n"));

        let missing = td.path().join("missing");
        let (code, out) = run_args(&["pathname", "exists", missing.to_str().unwrap()]);
        assert_eq!((code, out.as_str()), (EXIT_MISSING, "false\n"));
    }

    #[test]
    fn kind_of_directory() {
        let td = TempDir::new().unwrap();
        let (_, out) = run_args(&["pathname", "kind", td.path().to_str().unwrap()]);
        assert_eq!(out, "directory\n");
    }

    #[test]
    fn config_file_disables_env() {
        let td = TempDir::new().unwrap();
        let cfg = td.path().join("opts.toml");
        std::fs::write(&cfg, "[expand]\nenv = false\n").unwrap();
        let (_, out) = run_args(&["pathname", "--config", cfg.to_str().unwrap(), "expand", "$PATH"]);
        assert_eq!(out, "$PATH\n");
    }

    #[test]
    fn missing_config_is_an_error() {
        let cli = Cli::try_parse_from(["pathname", "--config", "/no/such/pathname.toml", "expand", "x"])
            .unwrap();
        assert!(run(&cli, &mut Vec::new()).is_err());
    }
}
