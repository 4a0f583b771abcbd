//! Classification queries.
//!
//! Kind-level predicates defer to `TypeKind`; a bit-field answers every one
//! of them as its base type does, except `is_bitfield` itself. The rest
//! need shape details, qualifiers, or aggregate definitions.

use crate::aggregate::EnumFlavor;
use crate::basic::{BasicType, BoolKind, CharSign, FixedForm, FloatForm};
use crate::context::TypeContext;
use crate::ids::TypeId;
use crate::kind::TypeKind;
use crate::qual::AddrBase;
use crate::shape::{ArrayExtent, TypeShape};

macro_rules! kind_predicates {
    ($($(#[$meta:meta])* $name:ident => $test:expr;)*) => {
        impl TypeContext {
            $(
                $(#[$meta])*
                pub fn $name(&self, ty: TypeId) -> bool {
                    let test: fn(TypeKind) -> bool = $test;
                    test(self.classify_kind(ty))
                }
            )*
        }
    };
}

kind_predicates! {
    is_void => |k| k == TypeKind::Void;
    is_label => |k| k == TypeKind::Label;
    is_string => |k| k == TypeKind::Str;
    is_nullptr => |k| k == TypeKind::NullPtr;
    is_boolean => |k| k == TypeKind::Bool;
    is_character => |k| k == TypeKind::Char;
    /// Boolean, character, integer, or enumerated.
    is_integer => TypeKind::is_integer;
    is_fixed => |k| k == TypeKind::Fixed;
    is_float => |k| k == TypeKind::Float;
    is_arithmetic => TypeKind::is_arithmetic;
    is_scalar => TypeKind::is_scalar;
    is_aggregate => TypeKind::is_aggregate;
    is_array => |k| k == TypeKind::Array;
    is_pointer => |k| k == TypeKind::Pointer;
    is_lvalue_reference => |k| k == TypeKind::LValueRef;
    is_rvalue_reference => |k| k == TypeKind::RValueRef;
    is_reference => TypeKind::is_reference;
    /// Static or member function.
    is_function => TypeKind::is_function;
    is_static_function => |k| k == TypeKind::Function;
    is_member_function => |k| k == TypeKind::MemberFunction;
    is_member_pointer => |k| k == TypeKind::MemberPointer;
    is_tuple => |k| k == TypeKind::Tuple;
    is_struct => |k| k == TypeKind::Struct;
    is_union => |k| k == TypeKind::Union;
    is_class => TypeKind::is_class;
    is_enum => |k| k == TypeKind::Enum;
    is_object => TypeKind::is_object;
    is_named => TypeKind::is_named;
    is_derived => TypeKind::is_derived;
}

impl TypeContext {
    /// Kind used for classification: bit-fields report their base's kind.
    fn classify_kind(&self, ty: TypeId) -> TypeKind {
        self.kind(self.strip_bitfield(ty))
    }

    pub fn is_bitfield(&self, ty: TypeId) -> bool {
        self.kind(ty) == TypeKind::Bitfield
    }

    pub fn is_signed(&self, ty: TypeId) -> bool {
        self.basic_of(ty).is_some_and(BasicType::is_signed)
    }

    pub fn is_unsigned(&self, ty: TypeId) -> bool {
        self.basic_of(ty).is_some_and(|basic| {
            matches!(
                basic,
                BasicType::Bool(_) | BasicType::Char(_) | BasicType::Int(_) | BasicType::Fixed(_)
            ) && !basic.is_signed()
        })
    }

    pub fn is_saturating(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Fixed(fixed)) if fixed.saturating)
    }

    pub fn is_accum(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Fixed(fixed)) if fixed.form == FixedForm::Accum)
    }

    pub fn is_fract(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Fixed(fixed)) if fixed.form == FixedForm::Fract)
    }

    pub fn is_complex(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Float(f)) if f.form == FloatForm::Complex)
    }

    pub fn is_imaginary(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Float(f)) if f.form == FloatForm::Imaginary)
    }

    /// Arithmetic and not complex or imaginary.
    pub fn is_real(&self, ty: TypeId) -> bool {
        self.is_arithmetic(ty) && !self.is_complex(ty) && !self.is_imaginary(ty)
    }

    pub fn is_real_float(&self, ty: TypeId) -> bool {
        self.is_float(ty) && self.is_real(ty)
    }

    pub fn is_soft_bool(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Bool(BoolKind::Soft)))
    }

    pub fn is_wide_char(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Char(c)) if c.wide)
    }

    /// `char` without an explicit sign.
    pub fn is_plain_char(&self, ty: TypeId) -> bool {
        matches!(self.basic_of(ty), Some(BasicType::Char(c)) if c.sign == CharSign::Plain)
    }

    pub fn is_scoped_enum(&self, ty: TypeId) -> bool {
        self.is_enum(ty)
            && self
                .enum_def(ty)
                .is_ok_and(|def| def.flavor() == EnumFlavor::Scoped)
    }

    /// Whether the size of `ty` is presently knowable.
    pub fn is_complete(&self, ty: TypeId) -> bool {
        let node = self.node(ty);
        if node.complete_memo.get() {
            return true;
        }
        match node.shape {
            TypeShape::Basic(basic) => !matches!(basic, BasicType::Void | BasicType::Label),
            TypeShape::Array { base, extent } => extent.is_complete() && self.is_complete(base),
            TypeShape::Bitfield { base, .. } => self.is_complete(base),
            TypeShape::Pointer(_)
            | TypeShape::LValueRef(_)
            | TypeShape::RValueRef(_)
            | TypeShape::MemberPointer { .. } => true,
            TypeShape::Function { .. } | TypeShape::MemberFunction { .. } => false,
            TypeShape::Tuple(params) => {
                let complete = self
                    .param_set(params)
                    .types
                    .iter()
                    .all(|&component| self.is_complete(component));
                if complete {
                    node.complete_memo.set(true);
                }
                complete
            }
            TypeShape::Class { .. } => self.classes.contains_key(&node.unqual),
            TypeShape::Enum { .. } => self.enums.contains_key(&node.unqual),
        }
    }

    pub fn is_incomplete_array(&self, ty: TypeId) -> bool {
        matches!(self.array_extent(ty), Some(ArrayExtent::Incomplete))
    }

    /// `T[n]` with a constant `n`.
    pub fn is_fixed_array(&self, ty: TypeId) -> bool {
        matches!(self.array_extent(ty), Some(ArrayExtent::Fixed(_)))
    }

    pub fn is_vla(&self, ty: TypeId) -> bool {
        self.array_extent(ty).is_some_and(ArrayExtent::is_variable)
    }

    /// Whether `ty` contains a variable-length array anywhere in its
    /// declarator chain.
    pub fn is_variably_modified(&self, ty: TypeId) -> bool {
        match *self.shape(ty) {
            TypeShape::Array { base, extent } => {
                extent.is_variable() || self.is_variably_modified(base)
            }
            TypeShape::Pointer(base)
            | TypeShape::LValueRef(base)
            | TypeShape::RValueRef(base)
            | TypeShape::Bitfield { base, .. }
            | TypeShape::MemberPointer { base, .. } => self.is_variably_modified(base),
            TypeShape::Function { ret, params, .. }
            | TypeShape::MemberFunction { ret, params, .. } => {
                self.is_variably_modified(ret)
                    || self
                        .param_set(params)
                        .types
                        .iter()
                        .any(|&param| self.is_variably_modified(param))
            }
            _ => false,
        }
    }

    /// Whether `ty` has a constant byte size right now.
    pub fn is_sized(&self, ty: TypeId) -> bool {
        self.size_bytes(ty).is_ok()
    }

    /// Function or tuple whose parameter set is variadic.
    pub fn is_variadic(&self, ty: TypeId) -> bool {
        self.type_params(ty)
            .is_some_and(|params| self.param_set(params).variadic)
    }

    /// Pointer into far storage.
    pub fn is_far_pointer(&self, ty: TypeId) -> bool {
        match *self.shape(ty) {
            TypeShape::Pointer(base) => self.qual(base).space.base == AddrBase::Far,
            _ => false,
        }
    }

    /// Scalar occupying less than one machine word.
    pub fn is_sub_word(&self, ty: TypeId) -> bool {
        self.is_scalar(ty)
            && self
                .size_bytes(ty)
                .is_ok_and(|bytes| bytes < self.target().word_bytes())
    }

    pub fn is_qualified(&self, ty: TypeId) -> bool {
        !self.qual(ty).is_empty()
    }

    pub fn is_const(&self, ty: TypeId) -> bool {
        self.qual(ty).constant
    }

    pub fn is_volatile(&self, ty: TypeId) -> bool {
        self.qual(ty).volatile
    }

    pub fn is_restrict(&self, ty: TypeId) -> bool {
        self.qual(ty).restrict
    }

    pub fn is_atomic(&self, ty: TypeId) -> bool {
        self.qual(ty).atomic
    }
}
