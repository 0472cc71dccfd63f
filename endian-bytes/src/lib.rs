pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

pub mod codec;
pub use codec::{load, load_be, load_le, store, store_be, store_le};
pub use codec::{try_load, try_load_be, try_load_le, try_store, try_store_be, try_store_le};

pub mod endian;
pub use endian::{is_big_endian, is_little_endian, Endian};

pub mod error;
pub use error::Error;

pub mod order;
pub use order::Order;

pub mod swap;
pub use swap::{bswap16, bswap32, bswap64};

pub mod traits;
pub use traits::Unsigned;
