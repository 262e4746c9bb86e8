//! Error types for rendering.

use std::io;
use std::path::PathBuf;

/// The outcome of a render that did not complete cleanly.
///
/// Rendering never stops early: the tree is always walked to the end. A
/// `PrintError` only tells the caller that the output is missing, truncated,
/// or contains a gap the configuration asked to be treated as fatal.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The destination could not be opened; nothing was written.
    #[error("cannot open `{}` for writing: {source}", path.display())]
    Open {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A write to the destination failed; the output is truncated.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// The sink had already failed before this render started.
    #[error("output sink is unusable after an earlier failure")]
    Unusable,

    /// A node kind without a rendering rule was met under the `deny` policy.
    #[error("no rendering rule for {kind}")]
    Unhandled {
        /// The node kind that was skipped.
        kind: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_open() {
        let err = PrintError::Open {
            path: PathBuf::from("/nope/out.v"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "cannot open `/nope/out.v` for writing: no such directory"
        );
    }

    #[test]
    fn display_unhandled() {
        let err = PrintError::Unhandled {
            kind: "statement `VeriJumpStatement`".to_string(),
        };
        assert_eq!(err.to_string(), "no rendering rule for statement `VeriJumpStatement`");
    }

    #[test]
    fn write_error_keeps_source() {
        use std::error::Error;
        let err = PrintError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to write output:"));
    }
}
