#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the vmcc compiler crates.
//!
//! - `interner`: keywords (interned identifiers) and context keys
//!   (interned qualified-name paths)
//! - `archive`: the checksummed record stream used to persist compiler state

pub mod archive;
pub mod interner;

mod invariants;

#[cfg(test)]
mod interner_tests;

pub use archive::{ArchiveError, IArchive, Item, OArchive};
pub use interner::{ContextKey, Interner, Keyword};
