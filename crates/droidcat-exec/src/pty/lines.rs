use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Splits an async byte stream into lines.
///
/// Invalid UTF-8 is replaced rather than rejected: device logs carry
/// whatever bytes applications hand to the logger.
pub struct LineStream {
    reader: BufReader<Box<dyn AsyncRead + Unpin + Send>>,
    buf: Vec<u8>,
}

impl LineStream {
    pub fn new(reader: Box<dyn AsyncRead + Unpin + Send>) -> Self {
        Self {
            reader: BufReader::new(reader),
            buf: Vec::with_capacity(512),
        }
    }

    /// Read one line and strip its `\n` / `\r\n`.
    ///
    /// A final line without terminator is still returned.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }

        let mut end = self.buf.len();
        while end > 0 && matches!(self.buf[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        Ok(Some(String::from_utf8_lossy(&self.buf[..end]).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(bytes: &'static [u8]) -> LineStream {
        LineStream::new(Box::new(bytes))
    }

    #[tokio::test]
    async fn splits_on_newlines() {
        let mut s = stream(b"I/A ( 1): one\r\nW/B ( 2): two\nthree");

        assert_eq!(s.next_line().await.unwrap().as_deref(), Some("I/A ( 1): one"));
        assert_eq!(s.next_line().await.unwrap().as_deref(), Some("W/B ( 2): two"));
        assert_eq!(s.next_line().await.unwrap().as_deref(), Some("three"));
        assert_eq!(s.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_lines_are_kept() {
        let mut s = stream(b"\n\r\nx\n");

        assert_eq!(s.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(s.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(s.next_line().await.unwrap().as_deref(), Some("x"));
        assert_eq!(s.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let mut s = stream(b"I/T ( 1): \xff\xfe ok\n");
        let line = s.next_line().await.unwrap().unwrap();
        assert!(line.starts_with("I/T ( 1): "));
        assert!(line.ends_with(" ok"));
        assert!(line.contains('\u{FFFD}'));
    }
}
