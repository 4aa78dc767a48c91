use crate::common::Endian;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

#[cfg(feature = "emulated-double")]
use crate::double;

/// Fixed-width value with a known packed size.
pub trait Scalar: Copy {
    /// Number of bytes in the packed form, equal to `size_of::<Self>()`.
    const SIZE: usize;
    /// Byte array holding exactly one packed value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;
}

/// Scalars that can be rebuilt from their packed bytes.
pub trait Unpack: Scalar {
    fn read(packed: &Self::Bytes, endian: Endian) -> Self;
}

/// Scalars that can be written out as packed bytes.
pub trait Pack: Scalar {
    fn write(self, packed: &mut Self::Bytes, endian: Endian);
}

const SHORT_BUFFER: &str = "Buffer is shorter than the packed value";

/// Convert packed binary data into a value of type `T`.
///
/// The buffer type is `[u8; T::SIZE]`, so an undersized buffer does not compile.
/// Use [`try_unpack`] to read from a slice of unknown length.
pub fn unpack<T: Unpack>(packed: &T::Bytes, endian: Endian) -> T {
    T::read(packed, endian)
}

/// Write the raw bytes of `value` into `packed` in the requested byte order.
pub fn pack<T: Pack>(value: T, packed: &mut T::Bytes, endian: Endian) {
    value.write(packed, endian)
}

/// Pack `value` into a freshly created byte array.
pub fn packed<T: Pack>(value: T, endian: Endian) -> T::Bytes {
    let mut bytes = T::Bytes::default();
    value.write(&mut bytes, endian);
    bytes
}

/// Checked [`unpack`] reading the first `T::SIZE` bytes of `buffer`.
pub fn try_unpack<T: Unpack>(buffer: &[u8], endian: Endian) -> Result<T, &'static str> {
    if buffer.len() < T::SIZE {
        return Err(SHORT_BUFFER);
    }

    let mut bytes = T::Bytes::default();
    bytes.as_mut().copy_from_slice(&buffer[..T::SIZE]);

    Ok(T::read(&bytes, endian))
}

/// Checked [`pack`] writing into the first `T::SIZE` bytes of `buffer`.
/// Bytes past `T::SIZE` are left untouched.
pub fn try_pack<T: Pack>(
    value: T,
    buffer: &mut [u8],
    endian: Endian,
) -> Result<(), &'static str> {
    if buffer.len() < T::SIZE {
        return Err(SHORT_BUFFER);
    }

    buffer[..T::SIZE].copy_from_slice(packed(value, endian).as_ref());

    Ok(())
}

impl Scalar for u8 {
    const SIZE: usize = 1;
    type Bytes = [u8; 1];
}

impl Unpack for u8 {
    fn read(packed: &[u8; 1], _: Endian) -> u8 {
        packed[0]
    }
}

impl Pack for u8 {
    fn write(self, packed: &mut [u8; 1], _: Endian) {
        packed[0] = self;
    }
}

impl Scalar for i8 {
    const SIZE: usize = 1;
    type Bytes = [u8; 1];
}

impl Unpack for i8 {
    fn read(packed: &[u8; 1], _: Endian) -> i8 {
        packed[0] as i8
    }
}

impl Pack for i8 {
    fn write(self, packed: &mut [u8; 1], _: Endian) {
        packed[0] = self as u8;
    }
}

macro_rules! impl_scalar {
    ($ty:ty, $size:expr, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            const SIZE: usize = $size;
            type Bytes = [u8; $size];
        }

        impl Unpack for $ty {
            fn read(packed: &[u8; $size], endian: Endian) -> $ty {
                match endian {
                    Endian::Little => LittleEndian::$read(packed),
                    Endian::Big => BigEndian::$read(packed),
                }
            }
        }

        impl Pack for $ty {
            fn write(self, packed: &mut [u8; $size], endian: Endian) {
                match endian {
                    Endian::Little => LittleEndian::$write(packed, self),
                    Endian::Big => BigEndian::$write(packed, self),
                }
            }
        }
    };
}

impl_scalar!(u16, 2, read_u16, write_u16);
impl_scalar!(i16, 2, read_i16, write_i16);
impl_scalar!(u32, 4, read_u32, write_u32);
impl_scalar!(i32, 4, read_i32, write_i32);
impl_scalar!(u64, 8, read_u64, write_u64);
impl_scalar!(i64, 8, read_i64, write_i64);
impl_scalar!(u128, 16, read_u128, write_u128);
impl_scalar!(i128, 16, read_i128, write_i128);
impl_scalar!(f32, 4, read_f32, write_f32);

impl Scalar for f64 {
    const SIZE: usize = 8;
    type Bytes = [u8; 8];
}

#[cfg(not(feature = "emulated-double"))]
impl Unpack for f64 {
    fn read(packed: &[u8; 8], endian: Endian) -> f64 {
        match endian {
            Endian::Little => LittleEndian::read_f64(packed),
            Endian::Big => BigEndian::read_f64(packed),
        }
    }
}

#[cfg(not(feature = "emulated-double"))]
impl Pack for f64 {
    fn write(self, packed: &mut [u8; 8], endian: Endian) {
        match endian {
            Endian::Little => LittleEndian::write_f64(packed, self),
            Endian::Big => BigEndian::write_f64(packed, self),
        }
    }
}

// Only single precision survives; f64 has no Pack impl in this build.
#[cfg(feature = "emulated-double")]
impl Unpack for f64 {
    fn read(packed: &[u8; 8], endian: Endian) -> f64 {
        f64::from(double::to_single(packed, endian))
    }
}
