//! Streaming child processes attached to a pseudo-terminal.
//!
//! `adb logcat` block-buffers its output when stdout is a pipe, so the child
//! gets a pty as its stdin/stdout. On non-Unix targets a plain pipe is used.
mod lines;
pub use lines::LineStream;

#[cfg(unix)]
mod unix;

use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tracing::{debug, trace};

use crate::ExecError;

/// A running child whose stdout is read line by line.
pub struct StreamingChild {
    child: Child,
    lines: LineStream,
}

impl StreamingChild {
    /// Spawn `cmd` with its output attached to a fresh pty.
    ///
    /// stderr is inherited so diagnostics from the tool stay visible.
    /// The child is killed if this handle is dropped while it still runs.
    pub fn spawn(mut cmd: Command, program: &str) -> Result<Self, ExecError> {
        cmd.stderr(Stdio::inherit());
        cmd.kill_on_drop(true);

        #[cfg(unix)]
        let reader = {
            let pty = unix::Pty::open()?;
            pty.attach(&mut cmd)?;
            let child = cmd.spawn().map_err(|e| ExecError::Spawn {
                program: program.to_string(),
                source: e,
            })?;
            // Parent's copy of the slave must close, or EOF never arrives.
            let master = pty.into_master()?;
            (child, Box::new(master) as Box<dyn tokio::io::AsyncRead + Unpin + Send>)
        };

        #[cfg(not(unix))]
        let reader = {
            tracing::warn!("pseudo-terminals are not supported on this OS; reading through a pipe");
            cmd.stdout(Stdio::piped());
            let mut child = cmd.spawn().map_err(|e| ExecError::Spawn {
                program: program.to_string(),
                source: e,
            })?;
            let stdout = child
                .stdout
                .take()
                .ok_or_else(|| ExecError::InvalidConfig("child stdout is not piped".into()))?;
            (child, Box::new(stdout) as Box<dyn tokio::io::AsyncRead + Unpin + Send>)
        };

        let (child, reader) = reader;
        trace!(pid = ?child.id(), program, "streaming child spawned");

        Ok(Self {
            child,
            lines: LineStream::new(reader),
        })
    }

    /// Next line of output without its line terminator.
    ///
    /// `Ok(None)` once the child closed its side of the stream.
    pub async fn next_line(&mut self) -> Result<Option<String>, ExecError> {
        Ok(self.lines.next_line().await?)
    }

    /// Reap a child whose stream has ended.
    pub async fn wait(mut self) -> Result<ExitStatus, ExecError> {
        let status = self.child.wait().await?;
        debug!(%status, "streaming child exited");
        Ok(status)
    }

    /// Kill the child (if still running) and reap it.
    pub async fn terminate(mut self) {
        if let Err(e) = self.child.kill().await {
            debug!("failed to kill streaming child: {e}");
        }
    }
}
