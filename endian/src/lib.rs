pub use endian_bytes as bytes;

pub use endian_bytes::{is_big_endian, is_little_endian, Endian};
pub use endian_bytes::{bswap16, bswap32, bswap64};
pub use endian_bytes::{load_be, load_le, store_be, store_le};
pub use endian_bytes::{try_load_be, try_load_le, try_store_be, try_store_le};
pub use endian_bytes::{Error, Unsigned};
