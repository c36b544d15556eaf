//! `fcsmtop` viewer: National and FCSM statistics in the terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt};

use fcsmtop::cli::args::Cli;
use fcsmtop::cli::{execute, stats_source};

fn main() -> ExitCode {
    if let Err(error) = color_eyre::install() {
        let _ = writeln!(io::stderr(), "fcsmtop: {error}");
    }
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(io::stderr(), "fcsmtop: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let text = runtime.block_on(async {
        let stats = stats_source(cli)?;
        execute(&cli.command, stats.as_ref()).await
    })?;
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .wrap_err("write to stdout")?;
    Ok(())
}
