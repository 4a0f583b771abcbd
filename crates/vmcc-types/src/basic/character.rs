//! Character and wide-character types.

use crate::config::TargetProfile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CharSign {
    /// Plain `char`, distinct from both explicit variants. Signed.
    Plain,
    Signed,
    Unsigned,
}

impl CharSign {
    pub const ALL: [CharSign; 3] = [Self::Plain, Self::Signed, Self::Unsigned];
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CharType {
    pub sign: CharSign,
    pub wide: bool,
}

/// Bytes per profile, indexed by `[profile][wide]`.
const CHAR_BYTES: [[u64; 2]; 2] = [[1, 1], [1, 4]];

impl CharType {
    pub const CHAR: CharType = CharType::new(CharSign::Plain, false);
    pub const SCHAR: CharType = CharType::new(CharSign::Signed, false);
    pub const UCHAR: CharType = CharType::new(CharSign::Unsigned, false);
    pub const WCHAR: CharType = CharType::new(CharSign::Plain, true);
    pub const SWCHAR: CharType = CharType::new(CharSign::Signed, true);
    pub const UWCHAR: CharType = CharType::new(CharSign::Unsigned, true);

    pub const fn new(sign: CharSign, wide: bool) -> Self {
        Self { sign, wide }
    }

    pub(crate) const fn index(self) -> usize {
        self.wide as usize * 3 + self.sign as usize
    }

    pub fn is_signed(self) -> bool {
        !matches!(self.sign, CharSign::Unsigned)
    }

    pub fn size_bytes(self, profile: TargetProfile) -> u64 {
        CHAR_BYTES[profile.index()][self.wide as usize]
    }

    /// Integer conversion rank: narrow characters rank below `short`,
    /// wide characters share the rank of `int`.
    pub fn rank(self) -> u32 {
        if self.wide { 3 } else { 1 }
    }

    pub fn tag(self) -> &'static str {
        match (self.wide, self.sign) {
            (false, CharSign::Plain) => "char",
            (false, CharSign::Signed) => "schar",
            (false, CharSign::Unsigned) => "uchar",
            (true, CharSign::Plain) => "wchar",
            (true, CharSign::Signed) => "swchar",
            (true, CharSign::Unsigned) => "uwchar",
        }
    }

    pub fn name(self) -> &'static str {
        match (self.wide, self.sign) {
            (false, CharSign::Plain) => "char",
            (false, CharSign::Signed) => "signed char",
            (false, CharSign::Unsigned) => "unsigned char",
            (true, CharSign::Plain) => "wchar_t",
            (true, CharSign::Signed) => "signed wchar_t",
            (true, CharSign::Unsigned) => "unsigned wchar_t",
        }
    }
}
