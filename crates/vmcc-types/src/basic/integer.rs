//! Integer types: four widths, signed and unsigned.

use crate::config::TargetProfile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum IntWidth {
    Short,
    Int,
    Long,
    LongLong,
}

impl IntWidth {
    pub const ALL: [IntWidth; 4] = [Self::Short, Self::Int, Self::Long, Self::LongLong];
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntType {
    pub width: IntWidth,
    pub signed: bool,
}

/// Bytes per profile, indexed by `[profile][width]`.
const INT_BYTES: [[u64; 4]; 2] = [[1, 1, 2, 2], [2, 4, 8, 8]];

impl IntType {
    pub const SHORT: IntType = IntType::new(IntWidth::Short, true);
    pub const USHORT: IntType = IntType::new(IntWidth::Short, false);
    pub const INT: IntType = IntType::new(IntWidth::Int, true);
    pub const UINT: IntType = IntType::new(IntWidth::Int, false);
    pub const LONG: IntType = IntType::new(IntWidth::Long, true);
    pub const ULONG: IntType = IntType::new(IntWidth::Long, false);
    pub const LLONG: IntType = IntType::new(IntWidth::LongLong, true);
    pub const ULLONG: IntType = IntType::new(IntWidth::LongLong, false);

    pub const fn new(width: IntWidth, signed: bool) -> Self {
        Self { width, signed }
    }

    pub(crate) const fn index(self) -> usize {
        self.width as usize * 2 + (!self.signed) as usize
    }

    pub fn size_bytes(self, profile: TargetProfile) -> u64 {
        INT_BYTES[profile.index()][self.width as usize]
    }

    /// Integer conversion rank (`_Bool` is 0, narrow characters 1).
    pub fn rank(self) -> u32 {
        self.width as u32 + 2
    }

    pub fn to_signed(self) -> Self {
        Self::new(self.width, true)
    }

    pub fn to_unsigned(self) -> Self {
        Self::new(self.width, false)
    }

    pub fn tag(self) -> &'static str {
        match (self.width, self.signed) {
            (IntWidth::Short, true) => "short",
            (IntWidth::Short, false) => "ushort",
            (IntWidth::Int, true) => "int",
            (IntWidth::Int, false) => "uint",
            (IntWidth::Long, true) => "long",
            (IntWidth::Long, false) => "ulong",
            (IntWidth::LongLong, true) => "llong",
            (IntWidth::LongLong, false) => "ullong",
        }
    }

    pub fn name(self) -> &'static str {
        match (self.width, self.signed) {
            (IntWidth::Short, true) => "short",
            (IntWidth::Short, false) => "unsigned short",
            (IntWidth::Int, true) => "int",
            (IntWidth::Int, false) => "unsigned int",
            (IntWidth::Long, true) => "long",
            (IntWidth::Long, false) => "unsigned long",
            (IntWidth::LongLong, true) => "long long",
            (IntWidth::LongLong, false) => "unsigned long long",
        }
    }
}
