//! Archive container header (16 bytes).
//!
//! Layout (little-endian):
//! - 0-3: magic `b"VMCT"`
//! - 4-7: format version
//! - 8-11: CRC32 of the payload
//! - 12-15: payload length in bytes

use super::ArchiveError;

/// Magic bytes at the start of every archive.
pub const MAGIC: [u8; 4] = *b"VMCT";

/// Current archive format version.
pub const VERSION: u32 = 2;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: u32,
    /// CRC32 checksum of everything after the header.
    pub checksum: u32,
    pub payload_size: u32,
}

impl Header {
    /// Header describing `payload`.
    pub fn for_payload(payload: &[u8]) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            checksum: crc32fast::hash(payload),
            payload_size: payload.len() as u32,
        }
    }

    /// Decode the header from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ArchiveError::Truncated {
                expected: HEADER_SIZE,
                found: bytes.len(),
            });
        }

        let word =
            |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);

        Ok(Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: word(4),
            checksum: word(8),
            payload_size: word(12),
        })
    }

    /// Encode header to 16 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.payload_size.to_le_bytes());
        bytes
    }

    /// Check magic and version, then verify `payload` against the checksum.
    pub fn validate(&self, payload: &[u8]) -> Result<(), ArchiveError> {
        if self.magic != MAGIC {
            return Err(ArchiveError::BadMagic(self.magic));
        }
        if self.version != VERSION {
            return Err(ArchiveError::Version {
                expected: VERSION,
                found: self.version,
            });
        }
        if payload.len() != self.payload_size as usize {
            return Err(ArchiveError::Truncated {
                expected: self.payload_size as usize,
                found: payload.len(),
            });
        }
        let computed = crc32fast::hash(payload);
        if computed != self.checksum {
            return Err(ArchiveError::Checksum {
                expected: self.checksum,
                found: computed,
            });
        }
        Ok(())
    }
}
