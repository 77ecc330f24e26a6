//! Error types for byte sources and bit reading.

use std::io;

/// Errors produced by a [crate::source::ByteSource] when it cannot fill a buffer.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source was exhausted before any byte was transferred.
    #[error("end of stream")]
    EndOfStream,
    /// The source was exhausted after `filled` bytes of the request.
    #[error("unexpected end of stream after {filled} byte(s)")]
    UnexpectedEnd { filled: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors produced when reading bits through a [crate::bit_reader::BitReader].
///
/// Width requests above 64 bits are not represented here: they are a caller bug
/// and panic instead.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The stream ended exactly on a field (or record) boundary.
    #[error("end of stream")]
    EndOfStream,
    /// The stream ended after part of a field or record had been consumed.
    #[error("stream ended inside a field")]
    TruncatedField,
    /// The byte source failed; the error is passed through untouched.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ReadError {
    /// True for a clean end of stream, the one variant callers usually expect.
    pub fn is_clean_end(&self) -> bool {
        matches!(self, ReadError::EndOfStream)
    }
}
