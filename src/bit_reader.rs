use log::{debug, trace};

use crate::{
    bits::{bytes_for_bits, mask, pack_msb_first},
    errors::{ReadError, SourceError},
    source::ByteSource,
};

/// Widest field a single read can return.
pub const MAX_FIELD_BITS: u32 = 64;

/// Reads unsigned fields of 1 to 64 bits, MSB-first, from a [ByteSource].
///
/// Bytes are pulled from the source only when the residue is empty, and only as
/// many as the pending field still needs (rounded up to a byte). Bits left over
/// from that rounding stay buffered for the next call, so between calls fewer
/// than 8 bits are ever held back from the source.
///
/// The source is borrowed mutably for the reader's lifetime. Reading from the
/// source directly after dropping a reader resumes at the next whole byte: any
/// buffered bits are lost with the reader.
pub struct BitReader<'a, S: ByteSource + ?Sized> {
    source: &'a mut S,
    acc: u64,
    residue: u32,
}

impl<'a, S: ByteSource + ?Sized> BitReader<'a, S> {
    /// Binds a reader to `source`. Performs no I/O.
    pub fn new(source: &'a mut S) -> Self {
        Self {
            source,
            acc: 0,
            residue: 0,
        }
    }

    /// Number of bits buffered but not yet returned.
    pub fn buffered_bits(&self) -> u32 {
        self.residue
    }

    /// True when the next read starts on a byte boundary of the source.
    pub fn is_byte_aligned(&self) -> bool {
        self.residue == 0
    }

    /// Reads the next `n` bits, first stream bit most significant, right-justified.
    ///
    /// `n == 0` returns 0 without touching the buffer or the source.
    ///
    /// Returns [ReadError::EndOfStream] when the source was exhausted before any
    /// bit of this field, and [ReadError::TruncatedField] when it ran out part way.
    ///
    /// # Panics
    ///
    /// If `n` is greater than [MAX_FIELD_BITS].
    pub fn read(&mut self, n: u32) -> Result<u64, ReadError> {
        assert_width(n);

        let mut remaining = n;
        let mut value = 0u64;

        while remaining > 0 {
            if self.residue == 0 {
                self.refill(remaining, remaining == n)?;
            }

            let m = self.residue.min(remaining);
            let chunk = (self.acc >> (self.residue - m)) & mask(m);
            value = value.checked_shl(m).unwrap_or(0) | chunk;

            remaining -= m;
            self.residue -= m;
        }

        Ok(value)
    }

    /// Reads a single bit as a flag.
    pub fn read_bit(&mut self) -> Result<bool, ReadError> {
        Ok(self.read(1)? != 0)
    }

    /// Reads one field per entry of `widths`, in order.
    ///
    /// The batch is treated as one record: end of stream is only clean when not a
    /// single bit was consumed by this call. Running out anywhere later, including
    /// at the start of a subsequent field, is [ReadError::TruncatedField].
    ///
    /// # Panics
    ///
    /// If any width is greater than [MAX_FIELD_BITS]; checked before any I/O.
    pub fn read_fields(&mut self, widths: &[u32]) -> Result<Vec<u64>, ReadError> {
        let mut out = vec![0; widths.len()];
        self.read_fields_into(widths, &mut out)?;

        Ok(out)
    }

    /// Same as [BitReader::read_fields], writing into `out` instead of allocating.
    ///
    /// On error `out` holds the fields read so far; the rest are unspecified.
    ///
    /// # Panics
    ///
    /// If `out.len() != widths.len()` or any width is greater than [MAX_FIELD_BITS].
    pub fn read_fields_into(
        &mut self,
        widths: &[u32],
        out: &mut [u64],
    ) -> Result<(), ReadError> {
        assert_eq!(
            widths.len(),
            out.len(),
            "output has room for {} fields, {} requested",
            out.len(),
            widths.len()
        );
        widths.iter().copied().for_each(assert_width);

        let mut consumed = false;
        for (&width, slot) in widths.iter().zip(out.iter_mut()) {
            *slot = self.read(width).map_err(|e| mid_record(e, consumed))?;
            consumed |= width > 0;
        }

        Ok(())
    }

    /// Discards the next `n` bits. Forward only.
    ///
    /// End of stream is clean only if nothing was skipped yet.
    pub fn skip(&mut self, n: u64) -> Result<(), ReadError> {
        let mut left = n;
        while left > 0 {
            let step = left.min(MAX_FIELD_BITS as u64) as u32;
            self.read(step).map_err(|e| mid_record(e, left < n))?;
            left -= step as u64;
        }

        Ok(())
    }

    /// Drops buffered bits so the next read starts at a byte boundary.
    ///
    /// Returns how many bits were dropped. Performs no I/O.
    pub fn align_to_byte(&mut self) -> u32 {
        let dropped = self.residue;
        self.residue = 0;

        dropped
    }

    fn refill(&mut self, remaining: u32, first: bool) -> Result<(), ReadError> {
        let len = bytes_for_bits(remaining);
        debug_assert!(len <= 8, "refill of {len} bytes overflows the accumulator");

        let mut buf = [0u8; 8];
        match self.source.read_exact(&mut buf[..len]) {
            Ok(()) => {}
            Err(SourceError::EndOfStream) if first => {
                trace!("end of stream before a {remaining}-bit field");
                return Err(ReadError::EndOfStream);
            }
            Err(SourceError::EndOfStream) => {
                debug!("end of stream with {remaining} bit(s) of the field outstanding");
                return Err(ReadError::TruncatedField);
            }
            Err(SourceError::UnexpectedEnd { filled }) => {
                debug!("short refill: got {filled} of {len} byte(s)");
                return Err(ReadError::TruncatedField);
            }
            Err(SourceError::Io(e)) => return Err(ReadError::Io(e)),
        }

        trace!("refilled {len} byte(s)");
        self.acc = pack_msb_first(&buf[..len]);
        self.residue = len as u32 * 8;

        Ok(())
    }
}

fn assert_width(n: u32) {
    assert!(
        n <= MAX_FIELD_BITS,
        "attempt to read {n} bits, at most {MAX_FIELD_BITS} fit in a field"
    );
}

/// Upgrades a clean end to a truncation once part of the record is gone.
fn mid_record(err: ReadError, consumed: bool) -> ReadError {
    match err {
        ReadError::EndOfStream if consumed => {
            debug!("end of stream inside a record");
            ReadError::TruncatedField
        }
        other => other,
    }
}
