//! Size and alignment queries.
//!
//! All sizes derive from byte sizes. Pointer units equal bytes on both
//! profiles; words are bytes divided by the profile's word size, rounded up.

use crate::basic::{BasicType, FixedBits};
use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::TypeId;
use crate::qual::AddrBase;
use crate::shape::{ArrayExtent, TypeShape};
use crate::size_expr::SizeExpr;

impl TypeContext {
    /// Alignment in bytes.
    ///
    /// Fails like `size_bytes` for incomplete and unsized types. A
    /// variable-length array is aligned as its element.
    pub fn alignment(&self, ty: TypeId) -> Result<u64, TypeError> {
        let target = self.target();
        match *self.shape(ty) {
            TypeShape::Basic(basic) => basic.align(target).ok_or(TypeError::NoSize(ty)),
            TypeShape::Array { base, extent } => match extent {
                ArrayExtent::Incomplete | ArrayExtent::Unspecified => {
                    Err(TypeError::Incomplete(ty))
                }
                ArrayExtent::Fixed(_) | ArrayExtent::Variable(_) => self.alignment(base),
            },
            TypeShape::Bitfield { base, .. } => self.alignment(base),
            TypeShape::Pointer(base) | TypeShape::LValueRef(base) | TypeShape::RValueRef(base) => {
                Ok(target.scalar_align(self.pointer_bytes(base)))
            }
            TypeShape::MemberPointer { .. } => Ok(target.scalar_align(target.word_bytes())),
            TypeShape::Function { .. } | TypeShape::MemberFunction { .. } => {
                Err(TypeError::NoSize(ty))
            }
            TypeShape::Tuple(params) => {
                let mut align = 1;
                for &component in &self.param_set(params).types {
                    let component_align = self.alignment(component).map_err(|err| match err {
                        TypeError::Incomplete(_) => TypeError::Incomplete(ty),
                        other => other,
                    })?;
                    align = align.max(component_align);
                }
                Ok(align)
            }
            TypeShape::Class { .. } => Ok(self.class_def(ty)?.align()),
            TypeShape::Enum { .. } => self.alignment(self.enum_def(ty)?.base),
        }
    }

    /// Constant size in bytes.
    ///
    /// Fails with `Incomplete` for incomplete arrays, open aggregates and
    /// tuples with incomplete components, `NoSize` for void, label and
    /// function types, and `VariableSize` for variable-length arrays.
    pub fn size_bytes(&self, ty: TypeId) -> Result<u64, TypeError> {
        let target = self.target();
        match *self.shape(ty) {
            TypeShape::Basic(basic) => basic.size_bytes(target).ok_or(TypeError::NoSize(ty)),
            TypeShape::Array { base, extent } => match extent {
                ArrayExtent::Fixed(count) => count
                    .checked_mul(self.size_bytes(base)?)
                    .ok_or(TypeError::SizeOverflow(ty)),
                ArrayExtent::Incomplete | ArrayExtent::Unspecified => {
                    Err(TypeError::Incomplete(ty))
                }
                ArrayExtent::Variable(_) => Err(TypeError::VariableSize(ty)),
            },
            TypeShape::Bitfield { base, bits, .. } => {
                let unit = self.size_bytes(base)?;
                let bytes = u64::from(bits).div_ceil(target.byte_bits());
                if unit == 0 {
                    return Ok(bytes);
                }
                bytes
                    .checked_next_multiple_of(unit)
                    .ok_or(TypeError::SizeOverflow(ty))
            }
            TypeShape::Pointer(base) | TypeShape::LValueRef(base) | TypeShape::RValueRef(base) => {
                Ok(self.pointer_bytes(base))
            }
            TypeShape::MemberPointer { .. } => Ok(target.word_bytes()),
            TypeShape::Function { .. } | TypeShape::MemberFunction { .. } => {
                Err(TypeError::NoSize(ty))
            }
            TypeShape::Tuple(params) => {
                let mut total: u64 = 0;
                for &component in &self.param_set(params).types {
                    let size = self.size_bytes(component).map_err(|err| match err {
                        TypeError::Incomplete(_) => TypeError::Incomplete(ty),
                        other => other,
                    })?;
                    total = total
                        .checked_add(size)
                        .ok_or(TypeError::SizeOverflow(ty))?;
                }
                target.round_bytes(total).ok_or(TypeError::SizeOverflow(ty))
            }
            TypeShape::Class { .. } => Ok(self.class_def(ty)?.size_bytes()),
            TypeShape::Enum { .. } => self.size_bytes(self.enum_def(ty)?.base),
        }
    }

    /// Constant size in pointer units.
    pub fn size_point(&self, ty: TypeId) -> Result<u64, TypeError> {
        Ok(self.target().bytes_to_point(self.size_bytes(ty)?))
    }

    /// Constant size in machine words.
    pub fn size_words(&self, ty: TypeId) -> Result<u64, TypeError> {
        Ok(self.target().bytes_to_words(self.size_bytes(ty)?))
    }

    /// Value width in bits. A bit-field reports its declared width.
    pub fn size_bits(&self, ty: TypeId) -> Result<u64, TypeError> {
        match *self.shape(ty) {
            TypeShape::Bitfield { bits, .. } => Ok(u64::from(bits)),
            _ => self
                .size_bytes(ty)?
                .checked_mul(self.target().byte_bits())
                .ok_or(TypeError::SizeOverflow(ty)),
        }
    }

    /// Size in bytes, deferred to run time for variable-length arrays.
    pub fn size_bytes_vm(&self, ty: TypeId) -> Result<SizeExpr, TypeError> {
        match *self.shape(ty) {
            TypeShape::Array { base, extent } => match extent {
                ArrayExtent::Fixed(count) => {
                    SizeExpr::checked_mul(SizeExpr::Const(count), self.size_bytes_vm(base)?)
                        .ok_or(TypeError::SizeOverflow(ty))
                }
                ArrayExtent::Variable(expr) => {
                    SizeExpr::checked_mul(self.size_bytes_vm(base)?, SizeExpr::Runtime(expr))
                        .ok_or(TypeError::SizeOverflow(ty))
                }
                ArrayExtent::Incomplete | ArrayExtent::Unspecified => {
                    Err(TypeError::Incomplete(ty))
                }
            },
            _ => self.size_bytes(ty).map(SizeExpr::Const),
        }
    }

    /// Size in pointer units, deferred to run time for variable-length arrays.
    pub fn size_point_vm(&self, ty: TypeId) -> Result<SizeExpr, TypeError> {
        let bytes = self.size_bytes_vm(ty)?;
        Ok(match bytes.as_const() {
            Some(value) => SizeExpr::Const(self.target().bytes_to_point(value)),
            None => bytes,
        })
    }

    /// Size in words, deferred to run time for variable-length arrays.
    pub fn size_words_vm(&self, ty: TypeId) -> Result<SizeExpr, TypeError> {
        Ok(SizeExpr::div_ceil(
            self.size_bytes_vm(ty)?,
            self.target().word_bytes(),
        ))
    }

    /// Sign/integral/fraction split of a fixed-point type.
    pub fn fixed_bits(&self, ty: TypeId) -> Option<FixedBits> {
        match self.basic_of(ty)? {
            BasicType::Fixed(fixed) => Some(fixed.bits(self.target())),
            _ => None,
        }
    }

    /// Integer conversion rank of boolean, character, integer and complete
    /// enumerated types.
    pub fn integer_rank(&self, ty: TypeId) -> Option<u32> {
        self.basic_of(ty)?.rank()
    }

    /// Basic type behind `ty`, looking through bit-fields and complete enums.
    pub(crate) fn basic_of(&self, ty: TypeId) -> Option<BasicType> {
        let ty = self.strip_bitfield(ty);
        match *self.shape(ty) {
            TypeShape::Basic(basic) => Some(basic),
            TypeShape::Enum { .. } => {
                let base = self.enum_def(ty).ok()?.base;
                self.basic_of(base)
            }
            _ => None,
        }
    }

    /// Pointers into far storage take two words; everything else one.
    fn pointer_bytes(&self, pointee: TypeId) -> u64 {
        let words = match self.qual(pointee).space.base {
            AddrBase::Far => 2,
            _ => 1,
        };
        words * self.target().word_bytes()
    }
}
