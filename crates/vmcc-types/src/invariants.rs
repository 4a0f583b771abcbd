//! Arena lookup invariants.
//!
//! Ids are only handed out by the context that owns them, so a miss here is
//! a caller mixing contexts, never a recoverable condition.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::context::TypeContext;
use crate::ids::{ParamSetId, TypeId};

impl TypeContext {
    #[inline]
    pub(crate) fn ensure_type(&self, ty: TypeId) {
        if ty.index() >= self.nodes.len() {
            panic!(
                "TypeContext: type {ty} not found \
                 (ids must come from the context that created them)"
            );
        }
    }

    #[inline]
    pub(crate) fn ensure_param_set(&self, id: ParamSetId) {
        if id.index() >= self.param_sets.len() {
            panic!(
                "TypeContext: parameter set {} not found \
                 (ids must come from the context that created them)",
                id.as_u32()
            );
        }
    }
}
