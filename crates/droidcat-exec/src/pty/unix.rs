use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::pin::Pin;
use std::process::Stdio;
use std::ptr;
use std::task::{Context, Poll, ready};

use tokio::io::{AsyncRead, ReadBuf};
use tokio::net::unix::pipe;
use tokio::process::Command;

use crate::ExecError;
use crate::utils::{pre_exec_log, pre_exec_log_errno};

/// A freshly opened master/slave pair.
pub(super) struct Pty {
    master: OwnedFd,
    slave: OwnedFd,
}

impl Pty {
    /// Open a pty in raw mode, both ends close-on-exec.
    pub(super) fn open() -> Result<Self, ExecError> {
        let mut master: libc::c_int = -1;
        let mut slave: libc::c_int = -1;

        let rc = unsafe {
            libc::openpty(
                &mut master,
                &mut slave,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        if rc != 0 {
            return Err(pty_error("openpty", io::Error::last_os_error()));
        }
        let (master, slave) = unsafe { (OwnedFd::from_raw_fd(master), OwnedFd::from_raw_fd(slave)) };

        set_fd_flags(master.as_raw_fd(), libc::F_GETFD, libc::F_SETFD, libc::FD_CLOEXEC)
            .map_err(|e| pty_error("fcntl(FD_CLOEXEC)", e))?;
        set_fd_flags(slave.as_raw_fd(), libc::F_GETFD, libc::F_SETFD, libc::FD_CLOEXEC)
            .map_err(|e| pty_error("fcntl(FD_CLOEXEC)", e))?;
        make_raw(slave.as_raw_fd()).map_err(|e| pty_error("tcsetattr", e))?;

        Ok(Self { master, slave })
    }

    /// Wire the slave to the child's stdin/stdout and make it the child's
    /// controlling terminal.
    pub(super) fn attach(&self, cmd: &mut Command) -> Result<(), ExecError> {
        let stdin = self.slave.try_clone().map_err(|e| pty_error("dup", e))?;
        let stdout = self.slave.try_clone().map_err(|e| pty_error("dup", e))?;
        cmd.stdin(Stdio::from(stdin));
        cmd.stdout(Stdio::from(stdout));

        unsafe {
            cmd.pre_exec(|| {
                if libc::setsid() == -1 {
                    let err = io::Error::last_os_error();
                    pre_exec_log(b"droidcat: setsid failed: ");
                    pre_exec_log_errno(err.raw_os_error().unwrap_or(0));
                    return Err(err);
                }
                if libc::ioctl(libc::STDIN_FILENO, libc::TIOCSCTTY as _, 0) == -1 {
                    let err = io::Error::last_os_error();
                    pre_exec_log(b"droidcat: TIOCSCTTY failed: ");
                    pre_exec_log_errno(err.raw_os_error().unwrap_or(0));
                    return Err(err);
                }
                Ok(())
            });
        }
        Ok(())
    }

    /// Close the parent's slave handle and hand out the async master.
    pub(super) fn into_master(self) -> Result<PtyMaster, ExecError> {
        let Pty { master, slave } = self;
        drop(slave);
        PtyMaster::new(master)
    }
}

/// Non-blocking reader over the master side of a pty.
pub(super) struct PtyMaster {
    rx: pipe::Receiver,
}

impl PtyMaster {
    fn new(fd: OwnedFd) -> Result<Self, ExecError> {
        set_fd_flags(fd.as_raw_fd(), libc::F_GETFL, libc::F_SETFL, libc::O_NONBLOCK)
            .map_err(|e| pty_error("fcntl(O_NONBLOCK)", e))?;
        let rx = pipe::Receiver::from_owned_fd_unchecked(fd).map_err(|e| pty_error("register", e))?;
        Ok(Self { rx })
    }
}

impl AsyncRead for PtyMaster {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match ready!(Pin::new(&mut self.get_mut().rx).poll_read(cx, buf)) {
            // Linux reports a hung-up slave as EIO rather than EOF.
            Err(e) if e.raw_os_error() == Some(libc::EIO) => Poll::Ready(Ok(())),
            res => Poll::Ready(res),
        }
    }
}

fn pty_error(op: &'static str, source: io::Error) -> ExecError {
    ExecError::Pty { op, source }
}

fn set_fd_flags(fd: RawFd, get: libc::c_int, set: libc::c_int, flag: libc::c_int) -> io::Result<()> {
    let flags = unsafe { libc::fcntl(fd, get) };
    if flags == -1 {
        return Err(io::Error::last_os_error());
    }
    if unsafe { libc::fcntl(fd, set, flags | flag) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

fn make_raw(fd: RawFd) -> io::Result<()> {
    let mut term = std::mem::MaybeUninit::<libc::termios>::uninit();
    if unsafe { libc::tcgetattr(fd, term.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    let mut term = unsafe { term.assume_init() };
    unsafe { libc::cfmakeraw(&mut term) };
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &term) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::StreamingChild;
    use super::Pty;
    use std::io::Write;
    use tokio::io::AsyncReadExt;

    fn sh(script: &str) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new("/bin/sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[tokio::test]
    async fn child_output_arrives_line_by_line() {
        let mut child =
            StreamingChild::spawn(sh("printf 'I/Tag ( 1234): hello\\nW/Tag ( 9): x\\n'"), "sh").unwrap();

        assert_eq!(
            child.next_line().await.unwrap().as_deref(),
            Some("I/Tag ( 1234): hello")
        );
        assert_eq!(child.next_line().await.unwrap().as_deref(), Some("W/Tag ( 9): x"));
        assert_eq!(child.next_line().await.unwrap(), None);

        let status = child.wait().await.unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn child_sees_a_terminal() {
        let mut child = StreamingChild::spawn(
            sh("if [ -t 1 ]; then echo tty; else echo pipe; fi"),
            "sh",
        )
        .unwrap();

        assert_eq!(child.next_line().await.unwrap().as_deref(), Some("tty"));
        assert_eq!(child.next_line().await.unwrap(), None);
        child.wait().await.unwrap();
    }

    #[tokio::test]
    async fn terminate_stops_a_long_running_child() {
        let mut child = StreamingChild::spawn(sh("echo ready; exec sleep 30"), "sh").unwrap();

        assert_eq!(child.next_line().await.unwrap().as_deref(), Some("ready"));
        child.terminate().await;
    }

    #[tokio::test]
    async fn master_reads_to_end_after_slave_hangs_up() {
        let pty = Pty::open().unwrap();
        let mut slave = std::fs::File::from(pty.slave.try_clone().unwrap());
        slave.write_all(b"F/Tag ( 7): last words\n").unwrap();
        drop(slave);

        let mut master = pty.into_master().unwrap();
        let mut out = Vec::new();
        master.read_to_end(&mut out).await.unwrap();

        assert_eq!(out, b"F/Tag ( 7): last words\n");
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let cmd = tokio::process::Command::new("/nonexistent/droidcat-test-bin");
        let err = StreamingChild::spawn(cmd, "/nonexistent/droidcat-test-bin").err().unwrap();
        assert!(matches!(err, crate::ExecError::Spawn { .. }));
    }
}
