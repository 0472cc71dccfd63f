//! Byte reversal for the supported unsigned widths.
//!
//! Each function moves byte `i` to position `n - 1 - i`; none of them look
//! at the host byte order.

pub const fn bswap16(v: u16) -> u16 {
    (v >> 8) | (v << 8)
}

pub const fn bswap32(v: u32) -> u32 {
    ((v & 0x0000_00ff) << 24)
        | ((v & 0x0000_ff00) << 8)
        | ((v & 0x00ff_0000) >> 8)
        | ((v & 0xff00_0000) >> 24)
}

pub const fn bswap64(v: u64) -> u64 {
    ((v & 0x0000_0000_0000_00ff) << 56)
        | ((v & 0x0000_0000_0000_ff00) << 40)
        | ((v & 0x0000_0000_00ff_0000) << 24)
        | ((v & 0x0000_0000_ff00_0000) << 8)
        | ((v & 0x0000_00ff_0000_0000) >> 8)
        | ((v & 0x0000_ff00_0000_0000) >> 24)
        | ((v & 0x00ff_0000_0000_0000) >> 40)
        | ((v & 0xff00_0000_0000_0000) >> 56)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(bswap16(0x1122), 0x2211);
        assert_eq!(bswap32(0x11223344), 0x44332211);
        assert_eq!(bswap64(0x0102030405060708), 0x0807060504030201);
    }

    #[test]
    fn test_involution() {
        for v in [0u16, 1, 0x00ff, 0xff00, 0x1234, u16::MAX] {
            assert_eq!(bswap16(bswap16(v)), v);
        }

        for v in [0u32, 1, 0xdeadbeef, 0x8000_0001, u32::MAX] {
            assert_eq!(bswap32(bswap32(v)), v);
        }

        for v in [0u64, 1, 0x0123_4567_89ab_cdef, 0x8000_0000_0000_0001, u64::MAX] {
            assert_eq!(bswap64(bswap64(v)), v);
        }
    }

    #[test]
    fn test_agrees_with_swap_bytes() {
        let mut v = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..64 {
            assert_eq!(bswap64(v), v.swap_bytes());
            assert_eq!(bswap32(v as u32), (v as u32).swap_bytes());
            assert_eq!(bswap16(v as u16), (v as u16).swap_bytes());
            v = v.rotate_left(7).wrapping_mul(0x2545_f491_4f6c_dd1d);
        }
    }

    #[test]
    fn test_palindromes_are_fixed() {
        assert_eq!(bswap16(0xabab), 0xabab);
        assert_eq!(bswap32(0x1234_3412), 0x1234_3412);
        assert_eq!(bswap64(0x0102_0304_0403_0201), 0x0102_0304_0403_0201);
    }
}
