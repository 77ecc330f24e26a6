//! # bitread
//!
//! Reads unsigned fields of 1 to 64 bits from any byte stream, for formats whose
//! fields do not sit on byte boundaries.
//!
//! Bits come out MSB-first: the first bit of the stream is the most significant
//! bit of the first field. End of stream is reported as either a clean end on a
//! field boundary or a truncated field, so callers can tell "no more records"
//! from "corrupt record".
//!
//! ## Example
//!
//! ```
//! use bitread::bit_reader::BitReader;
//! use bitread::errors::ReadError;
//!
//! let mut src: &[u8] = &[0xAA, 0x55];
//! let mut reader = BitReader::new(&mut src);
//!
//! assert_eq!(reader.read_fields(&[7, 8, 1]).unwrap(), [0x55, 0x2A, 0x1]);
//! assert!(matches!(reader.read(1), Err(ReadError::EndOfStream)));
//! ```

pub mod bit_reader;
pub mod bits;
pub mod errors;
pub mod source;

pub use bit_reader::BitReader;
pub use errors::{ReadError, SourceError};
pub use source::ByteSource;
