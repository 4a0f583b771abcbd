use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::{ParamSetId, TypeId};
use crate::shape::TypeShape;

impl TypeContext {
    pub fn get_tuple_type(&mut self, components: &[TypeId]) -> TypeId {
        let params = self.get_param_set(components, false);
        self.intern_shape(TypeShape::Tuple(params))
    }

    /// Tuple over an existing parameter set, which must not be variadic.
    pub fn get_tuple_type_from(&mut self, params: ParamSetId) -> Result<TypeId, TypeError> {
        if self.param_set(params).variadic {
            return Err(TypeError::VariadicTuple);
        }
        Ok(self.intern_shape(TypeShape::Tuple(params)))
    }

    pub fn tuple_components(&self, ty: TypeId) -> Option<&[TypeId]> {
        match *self.shape(ty) {
            TypeShape::Tuple(params) => Some(&self.param_set(params).types),
            _ => None,
        }
    }
}
