//! Target configuration for the type system.

use serde::{Deserialize, Serialize};

/// Machine-word profile selecting the size and alignment tables.
///
/// - `Narrow`: every addressable unit is a full 32-bit VM cell, so sizes in
///   bytes, pointer units and words coincide and everything is 1-aligned.
/// - `Wide`: 8-bit bytes grouped into 4-byte words; pointers address bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetProfile {
    Narrow,
    #[default]
    Wide,
}

impl TargetProfile {
    /// Row index into per-profile lookup tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Narrow => 0,
            Self::Wide => 1,
        }
    }

    /// Bits in one byte.
    pub fn byte_bits(self) -> u64 {
        match self {
            Self::Narrow => 32,
            Self::Wide => 8,
        }
    }

    /// Bytes in one machine word.
    pub fn word_bytes(self) -> u64 {
        match self {
            Self::Narrow => 1,
            Self::Wide => 4,
        }
    }

    /// Round a raw byte count to the profile's storage granularity.
    ///
    /// `None` when the rounded count does not fit in a `u64`.
    pub fn round_bytes(self, bytes: u64) -> Option<u64> {
        bytes.checked_next_multiple_of(self.word_bytes())
    }

    /// Pointer units needed for `bytes` (pointers address bytes on both profiles).
    pub fn bytes_to_point(self, bytes: u64) -> u64 {
        bytes
    }

    /// Words needed for `bytes`.
    pub fn bytes_to_words(self, bytes: u64) -> u64 {
        bytes.div_ceil(self.word_bytes())
    }

    /// Natural alignment of a scalar of `bytes` size.
    pub fn scalar_align(self, bytes: u64) -> u64 {
        bytes.clamp(1, self.word_bytes())
    }
}

/// Configuration for a type context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active size/alignment profile.
    pub(crate) target: TargetProfile,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target profile.
    pub fn target(mut self, value: TargetProfile) -> Self {
        self.target = value;
        self
    }

    pub fn target_profile(&self) -> TargetProfile {
        self.target
    }

    /// Parse a driver-supplied JSON fragment such as `{"target": "narrow"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialization should not fail")
    }
}
