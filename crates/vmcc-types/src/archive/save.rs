use vmcc_core::{ContextKey, OArchive};

use super::tag;
use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::{ParamSetId, TypeId};
use crate::qual::TypeQual;
use crate::shape::{ArrayExtent, TypeShape};

impl TypeContext {
    /// Append the record for `ty` to `ar`.
    ///
    /// Fails if an internal placeholder address space appears anywhere in
    /// the type.
    pub fn save_type(&self, ar: &mut OArchive, ty: TypeId) -> Result<(), TypeError> {
        match *self.shape(ty) {
            TypeShape::Basic(basic) => {
                ar.put_tag(&basic.tag());
            }
            TypeShape::Array { base, extent } => {
                match extent {
                    ArrayExtent::Fixed(count) => {
                        ar.put_tag(tag::ARRAY).put_u64(count);
                    }
                    ArrayExtent::Incomplete => {
                        ar.put_tag(tag::ARRAY_INCOMPLETE);
                    }
                    ArrayExtent::Variable(expr) => {
                        ar.put_tag(tag::ARRAY_VLA).put_u64(u64::from(expr.0));
                    }
                    ArrayExtent::Unspecified => {
                        ar.put_tag(tag::ARRAY_VLA_UNSPEC);
                    }
                }
                self.save_type(ar, base)?;
            }
            TypeShape::Bitfield { base, bits, offset } => {
                ar.put_tag(tag::BITFIELD)
                    .put_u64(u64::from(bits))
                    .put_u64(u64::from(offset));
                self.save_type(ar, base)?;
            }
            TypeShape::Pointer(base) => {
                ar.put_tag(tag::POINTER);
                self.save_type(ar, base)?;
            }
            TypeShape::LValueRef(base) => {
                ar.put_tag(tag::LREF);
                self.save_type(ar, base)?;
            }
            TypeShape::RValueRef(base) => {
                ar.put_tag(tag::RREF);
                self.save_type(ar, base)?;
            }
            TypeShape::Function { ret, params, conv } => {
                ar.put_tag(tag::FUNCTION);
                self.save_type(ar, ret)?;
                self.save_params(ar, params)?;
                ar.put_str(conv.tag());
            }
            TypeShape::MemberFunction {
                class,
                ret,
                params,
                conv,
            } => {
                ar.put_tag(tag::MEMBER_FUNCTION);
                self.save_type(ar, class)?;
                self.save_type(ar, ret)?;
                self.save_params(ar, params)?;
                ar.put_str(conv.tag());
            }
            TypeShape::MemberPointer { class, base } => {
                ar.put_tag(tag::MEMBER_POINTER);
                self.save_type(ar, class)?;
                self.save_type(ar, base)?;
            }
            TypeShape::Tuple(params) => {
                ar.put_tag(tag::TUPLE);
                self.save_params(ar, params)?;
            }
            TypeShape::Class { name, structure } => {
                ar.put_tag(if structure { tag::STRUCT } else { tag::UNION })
                    .put_key(&self.interner, name);
            }
            TypeShape::Enum { name } => {
                ar.put_tag(tag::ENUM).put_key(&self.interner, name);
            }
        }
        self.save_qual(ar, self.qual(ty))
    }

    fn save_params(&self, ar: &mut OArchive, params: ParamSetId) -> Result<(), TypeError> {
        let set = self.param_set(params);
        ar.put_u64(set.types.len() as u64).put_bool(set.variadic);
        for &param in &set.types {
            self.save_type(ar, param)?;
        }
        Ok(())
    }

    fn save_qual(&self, ar: &mut OArchive, qual: TypeQual) -> Result<(), TypeError> {
        let space = qual.space;
        if space.base.is_placeholder() {
            return Err(TypeError::InternalAddrSpace(space.base));
        }
        ar.put_str(space.base.tag());
        if space.base.is_declarable() {
            ar.put_key(&self.interner, space.name.unwrap_or(ContextKey::ROOT));
        }
        ar.put_bool(qual.atomic)
            .put_bool(qual.constant)
            .put_bool(qual.restrict)
            .put_bool(qual.volatile);
        Ok(())
    }
}
