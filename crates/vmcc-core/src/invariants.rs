//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{ContextKey, Interner};

impl Interner {
    pub(crate) fn ensure_key(&self, key: ContextKey) {
        if key.as_u32() as usize >= self.key_count() {
            panic!(
                "Interner: context key {} not found \
                 (keys must come from the interner that created them)",
                key.as_u32()
            );
        }
    }
}
