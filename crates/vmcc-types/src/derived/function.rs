use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::{ParamSetId, TypeId};
use crate::shape::{CallConv, TypeShape};

impl TypeContext {
    /// Static (non-member) function type.
    pub fn get_function_type(
        &mut self,
        ret: TypeId,
        params: ParamSetId,
        conv: CallConv,
    ) -> TypeId {
        self.ensure_type(ret);
        self.ensure_param_set(params);
        self.intern_shape(TypeShape::Function { ret, params, conv })
    }

    /// Member function of `class`. Fails unless `class` is a struct or union.
    pub fn get_member_function_type(
        &mut self,
        class: TypeId,
        ret: TypeId,
        params: ParamSetId,
        conv: CallConv,
    ) -> Result<TypeId, TypeError> {
        let class = self.class_owner(class)?;
        self.ensure_type(ret);
        self.ensure_param_set(params);
        Ok(self.intern_shape(TypeShape::MemberFunction {
            class,
            ret,
            params,
            conv,
        }))
    }

    pub fn call_conv(&self, ty: TypeId) -> Option<CallConv> {
        match *self.shape(ty) {
            TypeShape::Function { conv, .. } | TypeShape::MemberFunction { conv, .. } => Some(conv),
            _ => None,
        }
    }

    /// Containing class of a member function or member pointer type.
    pub fn member_class(&self, ty: TypeId) -> Option<TypeId> {
        match *self.shape(ty) {
            TypeShape::MemberFunction { class, .. } | TypeShape::MemberPointer { class, .. } => {
                Some(class)
            }
            _ => None,
        }
    }

    /// Unqualified class type owning members, or `NotClass`.
    pub(crate) fn class_owner(&self, class: TypeId) -> Result<TypeId, TypeError> {
        if !self.kind(class).is_class() {
            return Err(TypeError::NotClass(class));
        }
        Ok(self.unqualified(class))
    }
}
