//! The byte-supplying side of a [crate::bit_reader::BitReader].

use std::io::{ErrorKind, Read};

use crate::errors::SourceError;

/// A sequential supplier of bytes.
///
/// Implementors must tell apart a source that was already empty
/// ([SourceError::EndOfStream]) from one that ran dry part way through `buf`
/// ([SourceError::UnexpectedEnd]); the reader relies on that to classify
/// end-of-stream.
pub trait ByteSource {
    /// Fills `buf` completely or fails. Blocks until it can do either.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;
}

/// Every [std::io::Read] is a byte source.
///
/// Loops on [Read::read] like [Read::read_exact] does, retrying
/// [ErrorKind::Interrupted], but keeps count of the bytes transferred.
impl<R: Read + ?Sized> ByteSource for R {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Err(SourceError::EndOfStream),
                Ok(0) => return Err(SourceError::UnexpectedEnd { filled }),
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(SourceError::Io(e)),
            }
        }

        Ok(())
    }
}

/// Reader that hands out at most `chunk` bytes per call and interrupts every
/// other call. Used to exercise the fill loop.
#[cfg(test)]
pub(crate) struct Trickle<'a> {
    pub data: &'a [u8],
    pub chunk: usize,
    pub interrupt: bool,
}

#[cfg(test)]
impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(std::io::Error::from(ErrorKind::Interrupted));
        }

        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];

        Ok(n)
    }
}
