//! Parameter-set interner shared by function and tuple types.
//!
//! Function and tuple shapes store a `ParamSetId`, so two shapes with the
//! same parameter list compare equal by id without walking the list.

use crate::context::TypeContext;
use crate::ids::{ParamSetId, TypeId};

/// Ordered component types plus the variadic flag.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ParamSet {
    pub types: Vec<TypeId>,
    pub variadic: bool,
}

impl ParamSet {
    pub fn new(types: Vec<TypeId>, variadic: bool) -> Self {
        Self { types, variadic }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeContext {
    pub(crate) fn intern_param_set(&mut self, set: ParamSet) -> ParamSetId {
        if let Some(&id) = self.param_map.get(&set) {
            return id;
        }

        let id = ParamSetId::from_raw(self.param_sets.len() as u32);
        tracing::trace!(len = set.len(), variadic = set.variadic, "new parameter set");
        self.param_sets.push(set.clone());
        self.param_map.insert(set, id);
        id
    }

    /// Canonical parameter set for `types`.
    pub fn get_param_set(&mut self, types: &[TypeId], variadic: bool) -> ParamSetId {
        for &ty in types {
            self.ensure_type(ty);
        }
        self.intern_param_set(ParamSet::new(types.to_vec(), variadic))
    }

    pub fn param_set(&self, id: ParamSetId) -> &ParamSet {
        self.ensure_param_set(id);
        &self.param_sets[id.index()]
    }

    pub fn param_set_count(&self) -> usize {
        self.param_sets.len()
    }
}
