use crate::context::TypeContext;
use crate::ids::TypeId;
use crate::shape::TypeShape;

impl TypeContext {
    pub fn get_pointer_type(&mut self, base: TypeId) -> TypeId {
        self.ensure_type(base);
        self.intern_shape(TypeShape::Pointer(base))
    }

    pub fn get_lvalue_reference_type(&mut self, base: TypeId) -> TypeId {
        self.ensure_type(base);
        self.intern_shape(TypeShape::LValueRef(base))
    }

    pub fn get_rvalue_reference_type(&mut self, base: TypeId) -> TypeId {
        self.ensure_type(base);
        self.intern_shape(TypeShape::RValueRef(base))
    }
}
