//! Loading and storing fixed-width unsigned integers in an explicit byte
//! order.
//!
//! Every function touches exactly `T::SIZEOF` bytes starting at offset 0 of
//! the buffer; anything past that is left alone. Re-slice the buffer to
//! address another offset. The plain forms panic on a short buffer, the
//! `try_` forms report [`Error::BufferTooShort`] and leave the buffer as it
//! was.

use crate::error::Error;
use crate::order::Order;
use crate::traits::Unsigned;
use crate::{BE, LE};

#[inline(always)]
#[track_caller]
fn ensure<T: Unsigned>(len: usize) {
    if let Err(e) = Error::check(T::SIZEOF, len) {
        panic!("cannot access {}-bit value: {e}", T::SIZEOF * 8);
    }
}

#[track_caller]
pub fn load<T: Unsigned, O: Order>(buf: &[u8]) -> T {
    ensure::<T>(buf.len());
    T::from_bytes::<O>(buf)
}

#[track_caller]
pub fn store<T: Unsigned, O: Order>(buf: &mut [u8], value: T) {
    ensure::<T>(buf.len());
    value.into_bytes::<O>(buf)
}

pub fn try_load<T: Unsigned, O: Order>(buf: &[u8]) -> Result<T, Error> {
    Error::check(T::SIZEOF, buf.len())?;
    Ok(T::from_bytes::<O>(buf))
}

pub fn try_store<T: Unsigned, O: Order>(buf: &mut [u8], value: T) -> Result<(), Error> {
    Error::check(T::SIZEOF, buf.len())?;
    value.into_bytes::<O>(buf);
    Ok(())
}

/// Byte `i` of `buf` supplies bits `8*i..8*i+8` of the result.
#[track_caller]
pub fn load_le<T: Unsigned>(buf: &[u8]) -> T {
    load::<T, LE>(buf)
}

/// Byte `i` of `buf` supplies bits `8*(n-1-i)..8*(n-1-i)+8` of the result,
/// where `n` is `T::SIZEOF`.
#[track_caller]
pub fn load_be<T: Unsigned>(buf: &[u8]) -> T {
    load::<T, BE>(buf)
}

#[track_caller]
pub fn store_le<T: Unsigned>(buf: &mut [u8], value: T) {
    store::<T, LE>(buf, value)
}

#[track_caller]
pub fn store_be<T: Unsigned>(buf: &mut [u8], value: T) {
    store::<T, BE>(buf, value)
}

pub fn try_load_le<T: Unsigned>(buf: &[u8]) -> Result<T, Error> {
    try_load::<T, LE>(buf)
}

pub fn try_load_be<T: Unsigned>(buf: &[u8]) -> Result<T, Error> {
    try_load::<T, BE>(buf)
}

pub fn try_store_le<T: Unsigned>(buf: &mut [u8], value: T) -> Result<(), Error> {
    try_store::<T, LE>(buf, value)
}

pub fn try_store_be<T: Unsigned>(buf: &mut [u8], value: T) -> Result<(), Error> {
    try_store::<T, BE>(buf, value)
}
