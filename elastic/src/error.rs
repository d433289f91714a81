//! Errors surfaced by the engine and by [`crate::BufferAccess`] implementations.

use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The host failed to measure a run of text.
    #[snafu(display("Failed to measure {len} characters of text: {message}"))]
    Measure { len: usize, message: String },

    /// A line index no longer exists in the buffer, usually because it changed again
    /// before the recompute ran.
    #[snafu(display("Line {line} is out of range (buffer has {line_count} lines)"))]
    StaleLine { line: usize, line_count: usize },

    /// A character offset beyond the end of the buffer.
    #[snafu(display("Offset {offset} is beyond buffer length {len}"))]
    OffsetOutOfRange { offset: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
