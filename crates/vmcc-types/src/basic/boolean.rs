//! Boolean types.

use crate::config::TargetProfile;

/// Hard booleans are `_Bool` (stored as 0 or 1); soft booleans are
/// word-sized and treat any non-zero value as true.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BoolKind {
    Hard,
    Soft,
}

/// Bytes per profile, indexed by `[profile][kind]`.
const BOOL_BYTES: [[u64; 2]; 2] = [[1, 1], [1, 4]];

impl BoolKind {
    pub const ALL: [BoolKind; 2] = [Self::Hard, Self::Soft];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub fn size_bytes(self, profile: TargetProfile) -> u64 {
        BOOL_BYTES[profile.index()][self.index()]
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Hard => "bool",
            Self::Soft => "sbool",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hard => "_Bool",
            Self::Soft => "__bool",
        }
    }
}
