//! Archive record stream.
//!
//! An archive is a checksummed container holding a flat stream of items
//! (tags, integers, strings, context-key paths). Higher layers define what a
//! sequence of items means; this module only moves them in and out of bytes.

mod header;
mod stream;

#[cfg(test)]
mod header_tests;
#[cfg(test)]
mod stream_tests;

pub use header::{HEADER_SIZE, Header, MAGIC, VERSION};
pub use stream::{IArchive, Item, OArchive};

/// Error while reading an archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("invalid archive magic {0:?}")]
    BadMagic([u8; 4]),

    #[error("unsupported archive version {found} (expected {expected})")]
    Version { expected: u32, found: u32 },

    #[error("archive checksum mismatch: header says {expected:#010x}, payload hashes to {found:#010x}")]
    Checksum { expected: u32, found: u32 },

    #[error("archive truncated: need {expected} bytes, have {found}")]
    Truncated { expected: usize, found: usize },

    #[error("archive payload decode error: {0}")]
    Decode(#[from] postcard::Error),

    #[error("expected {expected} item, found {found}")]
    UnexpectedItem {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unexpected end of archive while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown kind tag `{0}`")]
    UnknownTag(String),

    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: u64, target: &'static str },
}
