//! `droidcat`: follow the logcat output of one Android package.
//!
//! 1) parse arguments, 2) install diagnostics on stderr, 3) build a
//! single-threaded runtime, 4) resolve the package pid and stream.
mod app;
mod cli;
mod error;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use droidcat_observe::init_logger;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Before the runtime exists: local offset detection needs a single thread.
    init_logger(&cli.logger_config()).context("failed to initialize logging")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let stdout = std::io::stdout();
    let end = runtime.block_on(app::run(&cli, &mut stdout.lock()))?;
    debug!(?end, "log stream finished");
    Ok(())
}
