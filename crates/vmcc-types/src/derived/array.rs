use crate::context::TypeContext;
use crate::ids::{SizeExprId, TypeId};
use crate::shape::{ArrayExtent, TypeShape};

impl TypeContext {
    /// `base[count]`
    pub fn get_array_type(&mut self, base: TypeId, count: u64) -> TypeId {
        self.array_of(base, ArrayExtent::Fixed(count))
    }

    /// `base[]`
    pub fn get_array_type_incomplete(&mut self, base: TypeId) -> TypeId {
        self.array_of(base, ArrayExtent::Incomplete)
    }

    /// `base[expr]`, or `base[*]` when the size expression is not known yet.
    pub fn get_array_type_vla(&mut self, base: TypeId, size: Option<SizeExprId>) -> TypeId {
        let extent = match size {
            Some(expr) => ArrayExtent::Variable(expr),
            None => ArrayExtent::Unspecified,
        };
        self.array_of(base, extent)
    }

    fn array_of(&mut self, base: TypeId, extent: ArrayExtent) -> TypeId {
        self.ensure_type(base);
        self.intern_shape(TypeShape::Array { base, extent })
    }

    pub fn array_extent(&self, ty: TypeId) -> Option<ArrayExtent> {
        match *self.shape(ty) {
            TypeShape::Array { extent, .. } => Some(extent),
            _ => None,
        }
    }

    /// Number of array dimensions wrapped around the innermost element.
    pub fn array_rank(&self, ty: TypeId) -> u32 {
        let mut rank = 0;
        let mut cur = ty;
        while let TypeShape::Array { base, .. } = *self.shape(cur) {
            rank += 1;
            cur = base;
        }
        rank
    }

    /// Innermost non-array element type.
    pub fn array_element(&self, ty: TypeId) -> TypeId {
        let mut cur = ty;
        while let TypeShape::Array { base, .. } = *self.shape(cur) {
            cur = base;
        }
        cur
    }
}
