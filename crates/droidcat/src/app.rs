use std::io::{ErrorKind, Write};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use droidcat_core::prelude::LineFilter;
use droidcat_exec::{AdbCommand, ProcessResolver, StreamingChild};

use crate::cli::Cli;
use crate::error::AppError;

/// Why the streaming loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// logcat closed its output.
    Closed,
    /// Ctrl-C.
    Interrupted,
    /// Our own stdout went away (e.g. `droidcat pkg | head`).
    OutputClosed,
}

/// Resolve the package, stream its log lines into `out` until the stream ends.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<StreamEnd, AppError> {
    let adb = AdbCommand::new(&cli.adb, cli.selector());

    let resolver = ProcessResolver::new(adb.clone(), cli.resolver_config()?)?;
    let package = cli.package();
    let target = resolver
        .resolve(package)
        .await?
        .ok_or_else(|| AppError::ProcessNotFound {
            package: package.to_string(),
        })?;
    info!(package, pid = %target, "target process resolved");

    let args = adb.logcat_args(cli.logcat_args());
    let command = adb.render(&args);
    if cli.print_command {
        eprintln!("{command}");
    }
    info!(%command, "starting log stream");

    let program = adb.program().display().to_string();
    let mut child = StreamingChild::spawn(adb.command(&args), &program)?;
    let filter = LineFilter::from_config(target, &cli.filter_config());

    let cancel = CancellationToken::new();
    let watcher = tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let outcome = pump(&mut child, &filter, &cancel, out).await;
    watcher.abort();

    match outcome {
        Ok(StreamEnd::Closed) => {
            let status = child.wait().await?;
            if !status.success() {
                warn!(%status, "logcat exited unsuccessfully");
            }
            Ok(StreamEnd::Closed)
        }
        Ok(end) => {
            debug!(?end, "stopping log stream");
            child.terminate().await;
            Ok(end)
        }
        Err(e) => {
            child.terminate().await;
            Err(e)
        }
    }
}

/// Feed child lines through `filter` into `out` until something stops the loop.
pub async fn pump<W: Write>(
    child: &mut StreamingChild,
    filter: &LineFilter,
    cancel: &CancellationToken,
    out: &mut W,
) -> Result<StreamEnd, AppError> {
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => return Ok(StreamEnd::Interrupted),
            line = child.next_line() => line?,
        };
        let Some(line) = line else {
            return Ok(StreamEnd::Closed);
        };

        if let Some(text) = filter.handle_line(&line)? {
            match writeln!(out, "{text}").and_then(|()| out.flush()) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(StreamEnd::OutputClosed),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            debug!("interrupt received");
            cancel.cancel();
        }
        Err(e) => warn!("cannot listen for Ctrl-C: {e}"),
    }
}
