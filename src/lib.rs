//! # bytestruct
//!
//! `bytestruct` packs fixed-width scalars into byte buffers and unpacks them
//! again, with the byte order chosen per call. It is named after the Python
//! and Perl `struct` modules, but only handles single scalars.
//!
//! ```
//! use bytestruct::{pack, unpack, Endian};
//!
//! let mut buffer = [0u8; 4];
//! pack(0x0102_0304u32, &mut buffer, Endian::Big);
//! assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(unpack::<u32>(&buffer, Endian::Little), 0x0403_0201);
//! ```
//!
//! Buffers passed to [`pack`] and [`unpack`] are arrays of exactly the value's
//! size, so no length check happens at runtime. [`try_pack`] and
//! [`try_unpack`] accept slices of any length and report short ones.
//!
//! With the `emulated-double` feature, `unpack::<f64>` decodes through a
//! 4-byte float (see [`double`]) and `f64` cannot be packed.
mod common;
pub mod double;
mod scalar;

pub use common::Endian;
pub use scalar::{pack, packed, try_pack, try_unpack, unpack, Pack, Scalar, Unpack};
