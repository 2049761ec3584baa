use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use pathname::cli::{self, Cli};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    pathname::logging::init(args.verbose);

    let stdout = std::io::stdout();
    let code = cli::run(&args, &mut stdout.lock())?;
    Ok(ExitCode::from(code))
}
