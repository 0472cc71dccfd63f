use std::fmt::Display;
use std::hint::black_box;

use crate::codec;
use crate::error::Error;
use crate::traits::Unsigned;
use crate::{BE, LE};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    /// The byte order of the running machine.
    ///
    /// Determined by looking at the first byte of a known value in its
    /// native representation, so it holds on any target without relying
    /// on `cfg(target_endian)`.
    pub fn host() -> Self {
        let probe = black_box(0x0102u16).to_ne_bytes();
        let endian = if probe[0] == 0x02 { Self::Little } else { Self::Big };

        log::trace!("host byte order: {endian}");

        endian
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    pub fn is_host(&self) -> bool {
        *self == Self::host()
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }

    /// Decode the first `T::SIZEOF` bytes of `buf` in this byte order.
    ///
    /// Panics if `buf` is shorter than `T::SIZEOF`.
    pub fn load<T: Unsigned>(&self, buf: &[u8]) -> T {
        match self {
            Self::Big => codec::load::<T, BE>(buf),
            Self::Little => codec::load::<T, LE>(buf),
        }
    }

    /// Encode `value` into the first `T::SIZEOF` bytes of `buf` in this
    /// byte order.
    ///
    /// Panics if `buf` is shorter than `T::SIZEOF`.
    pub fn store<T: Unsigned>(&self, buf: &mut [u8], value: T) {
        match self {
            Self::Big => codec::store::<T, BE>(buf, value),
            Self::Little => codec::store::<T, LE>(buf, value),
        }
    }

    pub fn try_load<T: Unsigned>(&self, buf: &[u8]) -> Result<T, Error> {
        match self {
            Self::Big => codec::try_load::<T, BE>(buf),
            Self::Little => codec::try_load::<T, LE>(buf),
        }
    }

    pub fn try_store<T: Unsigned>(&self, buf: &mut [u8], value: T) -> Result<(), Error> {
        match self {
            Self::Big => codec::try_store::<T, BE>(buf, value),
            Self::Little => codec::try_store::<T, LE>(buf, value),
        }
    }
}

pub fn is_little_endian() -> bool {
    Endian::host().is_little()
}

pub fn is_big_endian() -> bool {
    !is_little_endian()
}
