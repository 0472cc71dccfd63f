use paste::paste;

use crate::endian::Endian;
use crate::order::Order;
use crate::swap::{bswap16, bswap32, bswap64};

mod sealed {
    pub trait Sealed {}
}

/// The unsigned integer widths that can be loaded and stored: `u16`, `u32`
/// and `u64`. The trait is sealed, so no other width can be plugged in.
pub trait Unsigned: Copy + Eq + sealed::Sealed {
    const SIZEOF: usize;

    fn bswap(self) -> Self;

    /// Decode from the first `SIZEOF` bytes of `buf`; panics on a shorter
    /// buffer.
    fn from_bytes<O: Order>(buf: &[u8]) -> Self;

    /// Encode into the first `SIZEOF` bytes of `buf`; panics on a shorter
    /// buffer.
    fn into_bytes<O: Order>(self, buf: &mut [u8]);

    /// Re-interpret a value held in `from` order as one held in `to` order.
    fn convert(self, from: Endian, to: Endian) -> Self {
        if from == to {
            self
        } else {
            self.bswap()
        }
    }
}

macro_rules! impl_for {
    ($t:ident, $swap:ident) => {
        paste! {
            impl sealed::Sealed for $t {}

            impl Unsigned for $t {
                const SIZEOF: usize = std::mem::size_of::<$t>();

                #[inline(always)]
                fn bswap(self) -> Self {
                    $swap(self)
                }

                #[inline(always)]
                fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                    O::[<read_ $t>](buf)
                }

                #[inline(always)]
                fn into_bytes<O: Order>(self, buf: &mut [u8]) {
                    O::[<write_ $t>](buf, self)
                }
            }
        }
    };
}

impl_for!(u16, bswap16);
impl_for!(u32, bswap32);
impl_for!(u64, bswap64);

#[cfg(test)]
mod test {
    use super::*;
    use crate::{BE, LE};

    #[test]
    fn test_sizeof() {
        assert_eq!(<u16 as Unsigned>::SIZEOF, 2);
        assert_eq!(<u32 as Unsigned>::SIZEOF, 4);
        assert_eq!(<u64 as Unsigned>::SIZEOF, 8);
    }

    #[test]
    fn test_bswap_dispatch() {
        assert_eq!(0x1122u16.bswap(), 0x2211);
        assert_eq!(0x11223344u32.bswap(), 0x44332211);
        assert_eq!(0x0102030405060708u64.bswap(), 0x0807060504030201);
    }

    #[test]
    fn test_convert() {
        let v = 0xA1B2C3D4u32;

        assert_eq!(v.convert(Endian::Big, Endian::Big), v);
        assert_eq!(v.convert(Endian::Little, Endian::Little), v);
        assert_eq!(v.convert(Endian::Big, Endian::Little), 0xD4C3B2A1);
        assert_eq!(v.convert(Endian::Little, Endian::Big), 0xD4C3B2A1);
    }

    #[test]
    fn test_convert_matches_native_bytes() {
        let v = 0x0102030405060708u64;
        let native = u64::from_ne_bytes(v.to_be_bytes());
        assert_eq!(v.convert(Endian::Big, Endian::host()), native);
    }

    #[test]
    fn test_bytes_ignore_tail() {
        let buf = [0x11, 0x22, 0x33, 0x44, 0xff, 0xff];
        assert_eq!(u16::from_bytes::<LE>(&buf), 0x2211);
        assert_eq!(u16::from_bytes::<BE>(&buf), 0x1122);
        assert_eq!(u32::from_bytes::<BE>(&buf), 0x11223344);
    }
}
