use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::TypeId;
use crate::shape::TypeShape;

impl TypeContext {
    /// Pointer to a member of `class` whose type is `base`.
    pub fn get_member_pointer_type(
        &mut self,
        class: TypeId,
        base: TypeId,
    ) -> Result<TypeId, TypeError> {
        let class = self.class_owner(class)?;
        self.ensure_type(base);
        Ok(self.intern_shape(TypeShape::MemberPointer { class, base }))
    }
}
