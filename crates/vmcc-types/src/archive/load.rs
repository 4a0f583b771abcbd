use vmcc_core::{ArchiveError, IArchive};

use super::{LoadError, tag};
use crate::basic::BasicType;
use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::{ParamSetId, SizeExprId, TypeId};
use crate::qual::{AddrBase, AddrSpace, TypeQual};
use crate::shape::CallConv;

impl TypeContext {
    /// Read one type record, rebuilding it through the ordinary factories.
    ///
    /// The result is the same id a direct factory call would return, so a
    /// saved type loaded back into its own context is identical to itself.
    pub fn load_type(&mut self, ar: &mut IArchive) -> Result<TypeId, LoadError> {
        let kind = ar.get_tag()?;
        let unqual = match kind.as_str() {
            tag::ARRAY => {
                let count = ar.get_u64()?;
                let base = self.load_type(ar)?;
                self.get_array_type(base, count)
            }
            tag::ARRAY_INCOMPLETE => {
                let base = self.load_type(ar)?;
                self.get_array_type_incomplete(base)
            }
            tag::ARRAY_VLA => {
                let expr = SizeExprId(ar.get_u32()?);
                let base = self.load_type(ar)?;
                self.get_array_type_vla(base, Some(expr))
            }
            tag::ARRAY_VLA_UNSPEC => {
                let base = self.load_type(ar)?;
                self.get_array_type_vla(base, None)
            }
            tag::BITFIELD => {
                let bits = ar.get_u32()?;
                let offset = ar.get_u32()?;
                let base = self.load_type(ar)?;
                self.get_bitfield_type(base, bits, offset)
            }
            tag::POINTER => {
                let base = self.load_type(ar)?;
                self.get_pointer_type(base)
            }
            tag::LREF => {
                let base = self.load_type(ar)?;
                self.get_lvalue_reference_type(base)
            }
            tag::RREF => {
                let base = self.load_type(ar)?;
                self.get_rvalue_reference_type(base)
            }
            tag::FUNCTION => {
                let ret = self.load_type(ar)?;
                let params = self.load_params(ar)?;
                let conv = load_conv(ar)?;
                self.get_function_type(ret, params, conv)
            }
            tag::MEMBER_FUNCTION => {
                let class = self.load_type(ar)?;
                let ret = self.load_type(ar)?;
                let params = self.load_params(ar)?;
                let conv = load_conv(ar)?;
                self.get_member_function_type(class, ret, params, conv)?
            }
            tag::MEMBER_POINTER => {
                let class = self.load_type(ar)?;
                let base = self.load_type(ar)?;
                self.get_member_pointer_type(class, base)?
            }
            tag::TUPLE => {
                let params = self.load_params(ar)?;
                self.get_tuple_type_from(params)?
            }
            tag::STRUCT => {
                let name = ar.get_key(&mut self.interner)?;
                self.get_struct_type(name)
            }
            tag::UNION => {
                let name = ar.get_key(&mut self.interner)?;
                self.get_union_type(name)
            }
            tag::ENUM => {
                let name = ar.get_key(&mut self.interner)?;
                self.get_enum_type(name)
            }
            other => BasicType::from_tag(other)
                .map(TypeId::basic)
                .ok_or_else(|| ArchiveError::UnknownTag(other.to_owned()))?,
        };

        let qual = self.load_qual(ar)?;
        Ok(self.get_qual_type(unqual, qual))
    }

    fn load_params(&mut self, ar: &mut IArchive) -> Result<ParamSetId, LoadError> {
        let len = ar.get_usize()?;
        let variadic = ar.get_bool()?;
        let mut types = Vec::new();
        for _ in 0..len {
            types.push(self.load_type(ar)?);
        }
        Ok(self.get_param_set(&types, variadic))
    }

    fn load_qual(&mut self, ar: &mut IArchive) -> Result<TypeQual, LoadError> {
        let tag = ar.get_str()?;
        let base = AddrBase::from_tag(&tag).ok_or(ArchiveError::UnknownTag(tag))?;
        if base.is_placeholder() {
            return Err(TypeError::InternalAddrSpace(base).into());
        }
        let space = if base.is_declarable() {
            AddrSpace::declared(base, ar.get_key(&mut self.interner)?)
        } else {
            AddrSpace::new(base)
        };

        Ok(TypeQual {
            space,
            atomic: ar.get_bool()?,
            constant: ar.get_bool()?,
            restrict: ar.get_bool()?,
            volatile: ar.get_bool()?,
        })
    }
}

fn load_conv(ar: &mut IArchive) -> Result<CallConv, ArchiveError> {
    let tag = ar.get_str()?;
    CallConv::from_tag(&tag).ok_or(ArchiveError::UnknownTag(tag))
}
