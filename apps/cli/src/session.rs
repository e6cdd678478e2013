//! Interactive read/write boundary with a transcript.
//!
//! Every line shown to or read from the user is appended to the transcript
//! in chronological order, so the `log` action can replay the whole
//! exchange to a file. The session is always passed explicitly; there is no
//! global state.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Line-oriented console wrapper that records everything it sees.
///
/// Generic over the streams so tests can drive it from an in-memory cursor
/// and capture output in a byte buffer.
pub struct Session<R, W> {
    input: R,
    output: W,
    transcript: Vec<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Vec::new(),
        }
    }

    /// Print one line and record it.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        self.transcript.push(line.to_string());
        Ok(())
    }

    /// Read one line, record the raw text, and return it without the line
    /// terminator. An exhausted input stream is an error: the loop cannot
    /// continue without a user.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        self.transcript.push(line.clone());
        Ok(line)
    }

    /// Write the transcript to a file, one line per line, oldest first.
    /// The transcript itself is kept and keeps growing.
    pub fn save_transcript(&self, path: &Path) -> io::Result<()> {
        let mut content = String::new();
        for line in &self.transcript {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content)
    }

    /// Lines recorded so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Consume the session, returning the output sink and the transcript.
    pub fn into_parts(self) -> (W, Vec<String>) {
        (self.output, self.transcript)
    }
}
