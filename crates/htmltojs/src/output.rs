//! Append-only buffer collecting generated JavaScript.

use std::fmt::{self, Write as _};
use std::io;

/// Generated statements, one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    buf: String,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one formatted statement followed by a line break
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        // formatting into a String cannot fail
        let _ = self.buf.write_fmt(args);
        self.buf.push('\n');
    }

    /// Write text verbatim followed by a line break
    pub fn raw_line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Drain the buffer into `writer`, returning the number of bytes written.
    ///
    /// The buffer is empty afterwards, so a second call writes nothing.
    pub fn write_to<W: io::Write>(&mut self, writer: &mut W) -> io::Result<u64> {
        writer.write_all(self.buf.as_bytes())?;
        let written = self.buf.len() as u64;
        self.buf.clear();
        Ok(written)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let mut out = Output::new();
        out.line(format_args!("{}", "hello world"));
        assert_eq!(out.as_str(), "hello world\n");
    }

    #[test]
    fn test_raw_line() {
        let mut out = Output::new();
        out.raw_line("console.log(1);");
        out.raw_line("");
        assert_eq!(out.to_string(), "console.log(1);\n\n");
    }

    #[test]
    fn test_write_to_drains() {
        let mut out = Output::new();
        out.raw_line("a");
        out.raw_line("b");

        let mut sink = Vec::new();
        assert_eq!(out.write_to(&mut sink).unwrap(), 4);
        assert_eq!(sink, b"a\nb\n");
        assert!(out.is_empty());

        assert_eq!(out.write_to(&mut sink).unwrap(), 0);
        assert_eq!(sink.len(), 4);
    }
}
