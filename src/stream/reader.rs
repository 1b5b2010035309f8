//! Line-at-a-time input

use std::io::BufRead;

use crate::error::StreamError;

/// Reads input one line at a time, reusing a single buffer
pub struct LineReader<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line: 0,
        }
    }

    /// Read the next line with its 1-based number, terminator included
    ///
    /// Returns `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<(usize, &str)>, StreamError> {
        self.buf.clear();
        let line = self.line + 1;
        let read = self
            .inner
            .read_line(&mut self.buf)
            .map_err(|source| StreamError::Read { line, source })?;

        if read == 0 {
            return Ok(None);
        }

        self.line = line;
        Ok(Some((line, self.buf.as_str())))
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line
    }
}
