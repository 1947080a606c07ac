//! Stderr writers usable between `fork()` and `execve()`.
//!
//! Only stack buffers and raw `write(2)` calls: no allocation, no locks.

fn write_stderr(bytes: &[u8]) {
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            bytes.as_ptr() as *const libc::c_void,
            bytes.len(),
        );
    }
}

/// Render `errno=<n>\n` into `buf`, returning the used tail.
fn format_errno(errno: i32, buf: &mut [u8; 24]) -> &[u8] {
    let mut idx = buf.len();
    let mut n = errno.unsigned_abs();

    idx -= 1;
    buf[idx] = b'\n';
    loop {
        idx -= 1;
        buf[idx] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    if errno < 0 {
        idx -= 1;
        buf[idx] = b'-';
    }
    for &b in b"errno=".iter().rev() {
        idx -= 1;
        buf[idx] = b;
    }
    &buf[idx..]
}

/// Write a raw message to stderr.
pub(crate) fn pre_exec_log(msg: &[u8]) {
    write_stderr(msg);
}

/// Write `errno=<n>\n` to stderr.
pub(crate) fn pre_exec_log_errno(errno: i32) {
    let mut buf = [0u8; 24];
    write_stderr(format_errno(errno, &mut buf));
}
