//! The byte destination the printer writes to.
//!
//! An [`OutputSink`] is usable until its first failure. Opening a file that
//! cannot be created, or any failed write, moves it permanently to the failed
//! state; from then on every write is a silent no-op and the failure is kept
//! for [`OutputSink::finish`].

use crate::codes;
use crate::error::PrintError;
use recast_diagnostics::{Diagnostic, DiagnosticSink};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

enum State<W> {
    Usable(W),
    Failed(PrintError),
}

/// A fallible byte destination with a permanent usability flag.
pub struct OutputSink<W: Write> {
    state: State<W>,
    bytes_written: u64,
}

impl<W: Write> OutputSink<W> {
    /// Wraps an open writer.
    pub fn new(writer: W) -> Self {
        Self {
            state: State::Usable(writer),
            bytes_written: 0,
        }
    }

    /// Creates a sink that is unusable from the start.
    pub fn failed(error: PrintError) -> Self {
        Self {
            state: State::Failed(error),
            bytes_written: 0,
        }
    }

    /// Returns `true` while writes still reach the destination.
    pub fn is_usable(&self) -> bool {
        matches!(self.state, State::Usable(_))
    }

    /// Returns the failure that made the sink unusable, if any.
    pub fn failure(&self) -> Option<&PrintError> {
        match &self.state {
            State::Usable(_) => None,
            State::Failed(error) => Some(error),
        }
    }

    /// Returns the number of bytes handed to the destination so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Writes `text`, or does nothing if the sink is unusable.
    pub fn write_str(&mut self, text: &str) {
        if let State::Usable(writer) = &mut self.state {
            match writer.write_all(text.as_bytes()) {
                Ok(()) => self.bytes_written += text.len() as u64,
                Err(error) => self.state = State::Failed(PrintError::Write(error)),
            }
        }
    }

    /// Writes formatted text, or does nothing if the sink is unusable.
    ///
    /// This is what `write!` expands to, so `write!(sink, ...)` works on a
    /// sink and returns nothing.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.write_str(text),
            None => self.write_str(&args.to_string()),
        }
    }

    /// Flushes buffered output to the destination.
    pub fn flush(&mut self) {
        if let State::Usable(writer) = &mut self.state {
            if let Err(error) = writer.flush() {
                self.state = State::Failed(PrintError::Write(error));
            }
        }
    }

    /// Flushes and returns the writer, or the failure that ended the output.
    pub fn finish(mut self) -> Result<W, PrintError> {
        self.flush();
        match self.state {
            State::Usable(writer) => Ok(writer),
            State::Failed(error) => Err(error),
        }
    }
}

impl OutputSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// If the file cannot be opened, the returned sink is unusable and one
    /// `E101` error is emitted to `diagnostics`.
    pub fn create(path: &Path, diagnostics: &DiagnosticSink) -> Self {
        match File::create(path) {
            Ok(file) => Self::new(BufWriter::new(file)),
            Err(source) => {
                diagnostics.emit(Diagnostic::error(
                    codes::OPEN_FAILED,
                    format!("cannot open file `{}`", path.display()),
                )
                .with_note(source.to_string()));
                Self::failed(PrintError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl<W: Write> fmt::Debug for OutputSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("usable", &self.is_usable())
            .field("bytes_written", &self.bytes_written)
            .finish()
    }
}

impl OutputSink<io::Sink> {
    /// Creates a usable sink that discards all output.
    pub fn discard() -> Self {
        Self::new(io::sink())
    }
}
