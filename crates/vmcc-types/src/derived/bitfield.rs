use crate::context::TypeContext;
use crate::ids::TypeId;
use crate::shape::TypeShape;

impl TypeContext {
    /// Bit-field of `bits` width starting `offset` bits into its storage unit.
    pub fn get_bitfield_type(&mut self, base: TypeId, bits: u32, offset: u32) -> TypeId {
        self.ensure_type(base);
        self.intern_shape(TypeShape::Bitfield { base, bits, offset })
    }

    /// `(bits, offset)` of a bit-field type.
    pub fn bitfield_layout(&self, ty: TypeId) -> Option<(u32, u32)> {
        match *self.shape(ty) {
            TypeShape::Bitfield { bits, offset, .. } => Some((bits, offset)),
            _ => None,
        }
    }

    /// Strip a bit-field wrapper; other types are returned unchanged.
    pub(crate) fn strip_bitfield(&self, ty: TypeId) -> TypeId {
        match *self.shape(ty) {
            TypeShape::Bitfield { base, .. } => self.strip_bitfield(base),
            _ => ty,
        }
    }
}
