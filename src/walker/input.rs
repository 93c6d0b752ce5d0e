//! Gated line input
//!
//! Every read blocks until a full line (or the final unterminated line) is
//! available. Lines are raw bytes, so any content is accepted. End of input
//! is an error, never an empty line.

use std::io::BufRead;

use crate::common::{Error, Result};

use super::Phase;

/// Counts and reads lines from the learner's terminal
pub struct LineReader<R> {
    inner: R,
    reads: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            reads: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines read so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Read one line and return it without its line terminator
    pub fn read_line(&mut self, phase: Phase) -> Result<&[u8]> {
        self.buf.clear();
        let n = self.inner.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            tracing::debug!(%phase, reads = self.reads, "stdin reached end of input");
            return Err(Error::InputExhausted {
                phase,
                reads: self.reads,
            });
        }
        self.reads += 1;
        Ok(chomp(&self.buf))
    }

    /// Read one line and throw it away
    pub fn acknowledge(&mut self, phase: Phase) -> Result<()> {
        self.read_line(phase).map(|_| ())
    }
}

/// Strip one trailing line terminator (`\r\n`, `\n` or `\r`)
///
/// Other trailing whitespace is kept, so `"learn \n"` stays `"learn "`.
pub fn chomp(line: &[u8]) -> &[u8] {
    if let Some(stripped) = line.strip_suffix(b"\r\n") {
        stripped
    } else if let Some(stripped) = line.strip_suffix(b"\n") {
        stripped
    } else {
        line.strip_suffix(b"\r").unwrap_or(line)
    }
}
