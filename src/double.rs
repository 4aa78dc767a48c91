//! Decoding of 8-byte IEEE-754 doubles on targets whose widest float is 4 bytes.
//!
//! [`to_single`] rebuilds the single-precision bit pattern field by field:
//!
//! ```text
//! double  s eeeeeeeeeee mmmm...(52)
//! single  s eeeeeeee    mmmm...(23)
//! ```
//!
//! The exponent is re-biased from 1023 to 127 and the mantissa keeps its top
//! 23 bits. The conversion is bit-compatible with existing 8-bit firmware
//! decoders, so it has a few known limits:
//!
//! * the mantissa is truncated, not rounded;
//! * a zero exponent field (zero or subnormal double) gives a zero exponent
//!   field, with no subnormal rescaling;
//! * exponents outside the single-precision range wrap instead of
//!   saturating to zero or infinity.
//!
//! [`to_single_rounded`] is the exact IEEE conversion for callers that do not
//! need that compatibility. It is never used by [`unpack`](crate::unpack).

use crate::common::Endian;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

const DOUBLE_BIAS: i16 = 1023;
const SINGLE_BIAS: i16 = 127;

/// Decode a packed double into the nearest-below single-precision value.
pub fn to_single(packed: &[u8; 8], endian: Endian) -> f32 {
    // Most significant byte first from here on.
    let mut b = *packed;
    if endian.is_little() {
        b.reverse();
    }

    let expd = (i16::from(b[0] & 0x7f) << 4) + i16::from((b[1] & 0xf0) >> 4);
    let expf = if expd != 0 {
        expd - (DOUBLE_BIAS - SINGLE_BIAS)
    } else {
        0
    };

    let mut single = [0u8; 4];
    single[0] = (b[0] & 0x80).wrapping_add((expf >> 1) as u8);
    single[1] = (((expf & 1) as u8) << 7) | ((b[1] & 0x0f) << 3) | ((b[2] & 0xe0) >> 5);
    single[2] = ((b[2] & 0x1f) << 3) | ((b[3] & 0xe0) >> 5);
    single[3] = ((b[3] & 0x1f) << 3) | ((b[4] & 0xe0) >> 5);

    f32::from_bits(BigEndian::read_u32(&single))
}

/// Decode a packed double and round it to the nearest single-precision value.
pub fn to_single_rounded(packed: &[u8; 8], endian: Endian) -> f32 {
    let bits = match endian {
        Endian::Little => LittleEndian::read_u64(packed),
        Endian::Big => BigEndian::read_u64(packed),
    };

    f64::from_bits(bits) as f32
}
