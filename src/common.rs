/// Flag indicating whether packed data is stored in Big-endian or Little-endian format.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    /// True for least-significant-byte-first layout.
    pub fn is_little(self) -> bool {
        self == Endian::Little
    }
}

impl Default for Endian {
    fn default() -> Endian {
        Endian::Little
    }
}

/// `true` selects little-endian, `false` big-endian.
impl From<bool> for Endian {
    fn from(little_endian: bool) -> Endian {
        if little_endian {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}
