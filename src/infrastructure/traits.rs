//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with in-memory implementations.

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::Path;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Line-oriented interactive channel.
pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Block for one line of input. Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Console over any buffered reader and writer.
///
/// Output is flushed after every line so prompts appear before blocking reads.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match self.input.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}

/// Console bound to the process's stdin and stdout.
pub type StdConsole = LineConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn given_input_lines_when_reading_then_returns_each_then_none() {
        let mut console = LineConsole::new(Cursor::new("yes\nno"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("yes\n"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("no"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn given_lines_when_writing_then_newline_terminated() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.write_line("first").unwrap();
        console.write_line("second").unwrap();
        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "first\nsecond\n");
    }
}
