//! Pure bit helpers shared by the reader.
//!
//! Bits are handled in MSB-first order: the first bit of the stream is the high
//! bit of the first byte.

/// Mask with the low `k` bits set, for `k` in `0..=64`.
pub fn mask(k: u32) -> u64 {
    if k == 0 {
        return 0;
    }

    u64::MAX >> (64 - k)
}

/// Smallest number of whole bytes holding `bits` bits.
pub fn bytes_for_bits(bits: u32) -> usize {
    bits.div_ceil(8) as usize
}

/// Packs up to 8 bytes into a `u64`, first byte most significant.
pub fn pack_msb_first(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);

    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(0), 0);
        assert_eq!(mask(1), 0b1);
        assert_eq!(mask(7), 0x7F);
        assert_eq!(mask(33), 0x1_FFFF_FFFF);
        assert_eq!(mask(64), u64::MAX);
    }

    #[test]
    fn test_bytes_for_bits() {
        assert_eq!(bytes_for_bits(1), 1);
        assert_eq!(bytes_for_bits(8), 1);
        assert_eq!(bytes_for_bits(9), 2);
        assert_eq!(bytes_for_bits(33), 5);
        assert_eq!(bytes_for_bits(64), 8);
    }

    #[test]
    fn test_pack_msb_first() {
        assert_eq!(pack_msb_first(&[]), 0);
        assert_eq!(pack_msb_first(&[0xAA]), 0xAA);
        assert_eq!(pack_msb_first(&[0xAA, 0x55, 0x01]), 0xAA5501);
        assert_eq!(
            pack_msb_first(&[0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55]),
            0xAA55AA55AA55AA55
        );
    }
}
