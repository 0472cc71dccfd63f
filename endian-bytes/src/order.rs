use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;

/// A byte order fixed at compile time.
///
/// Implemented for the `byteorder` marker types `BE` and `LE`; `NE` resolves
/// to whichever of the two the target uses.
pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;

    /// Whether this order is the one the running host uses.
    fn is_native() -> bool {
        Self::ENDIAN.is_host()
    }
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
}
