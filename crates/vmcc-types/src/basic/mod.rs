//! Basic (builtin scalar) types.
//!
//! Every basic type is a singleton pre-registered by `TypeContext::new` at a
//! fixed id, so `TypeId::basic(b)` is a pure table lookup. Sizes come from
//! small per-profile tables in the family modules.

mod boolean;
mod character;
mod fixed;
mod float;
mod integer;


pub use boolean::BoolKind;
pub use character::{CharSign, CharType};
pub use fixed::{FixedBits, FixedForm, FixedSize, FixedType};
pub use float::{FloatForm, FloatSize, FloatType};
pub use integer::{IntType, IntWidth};

use crate::TypeId;
use crate::config::TargetProfile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BasicType {
    Void,
    /// Address of a jump target.
    Label,
    /// VM string handle.
    Str,
    /// Type of `nullptr`.
    NullPtr,
    Bool(BoolKind),
    Char(CharType),
    Int(IntType),
    Fixed(FixedType),
    Float(FloatType),
}

const BOOL_START: usize = 4;
const CHAR_START: usize = BOOL_START + 2;
const INT_START: usize = CHAR_START + 6;
const FIXED_START: usize = INT_START + 8;
const FLOAT_START: usize = FIXED_START + 24;

impl BasicType {
    /// Number of basic singletons.
    pub const COUNT: usize = FLOAT_START + 9;

    /// Slot in the singleton table.
    pub const fn index(self) -> usize {
        match self {
            Self::Void => 0,
            Self::Label => 1,
            Self::Str => 2,
            Self::NullPtr => 3,
            Self::Bool(kind) => BOOL_START + kind.index(),
            Self::Char(ty) => CHAR_START + ty.index(),
            Self::Int(ty) => INT_START + ty.index(),
            Self::Fixed(ty) => FIXED_START + ty.index(),
            Self::Float(ty) => FLOAT_START + ty.index(),
        }
    }

    /// All basic types in slot order.
    pub fn all() -> impl Iterator<Item = BasicType> {
        let bools = BoolKind::ALL.into_iter().map(Self::Bool);
        let chars = [false, true].into_iter().flat_map(|wide| {
            CharSign::ALL
                .into_iter()
                .map(move |sign| Self::Char(CharType::new(sign, wide)))
        });
        let ints = IntWidth::ALL.into_iter().flat_map(|width| {
            [true, false]
                .into_iter()
                .map(move |signed| Self::Int(IntType::new(width, signed)))
        });
        let fixed = FixedForm::ALL.into_iter().flat_map(|form| {
            FixedSize::ALL.into_iter().flat_map(move |size| {
                [false, true].into_iter().flat_map(move |saturating| {
                    [true, false].into_iter().map(move |signed| {
                        Self::Fixed(FixedType::new(form, size, saturating, signed))
                    })
                })
            })
        });
        let floats = FloatForm::ALL.into_iter().flat_map(|form| {
            FloatSize::ALL
                .into_iter()
                .map(move |size| Self::Float(FloatType::new(form, size)))
        });

        [Self::Void, Self::Label, Self::Str, Self::NullPtr]
            .into_iter()
            .chain(bools)
            .chain(chars)
            .chain(ints)
            .chain(fixed)
            .chain(floats)
    }

    /// Size in bytes, or `None` for void and label.
    pub fn size_bytes(self, profile: TargetProfile) -> Option<u64> {
        match self {
            Self::Void | Self::Label => None,
            Self::Str | Self::NullPtr => Some(profile.word_bytes()),
            Self::Bool(kind) => Some(kind.size_bytes(profile)),
            Self::Char(ty) => Some(ty.size_bytes(profile)),
            Self::Int(ty) => Some(ty.size_bytes(profile)),
            Self::Fixed(ty) => Some(ty.size_bytes(profile)),
            Self::Float(ty) => Some(ty.size_bytes(profile)),
        }
    }

    pub fn align(self, profile: TargetProfile) -> Option<u64> {
        match self {
            Self::Float(ty) => Some(ty.align(profile)),
            _ => self.size_bytes(profile).map(|b| profile.scalar_align(b)),
        }
    }

    /// Whether values of this type carry a sign.
    pub fn is_signed(self) -> bool {
        match self {
            Self::Char(ty) => ty.is_signed(),
            Self::Int(ty) => ty.signed,
            Self::Fixed(ty) => ty.signed,
            Self::Float(_) => true,
            Self::Void | Self::Label | Self::Str | Self::NullPtr | Self::Bool(_) => false,
        }
    }

    /// Integer conversion rank for integer-like basic types.
    pub fn rank(self) -> Option<u32> {
        match self {
            Self::Bool(_) => Some(0),
            Self::Char(ty) => Some(ty.rank()),
            Self::Int(ty) => Some(ty.rank()),
            _ => None,
        }
    }

    /// The type this one is derived from, if any.
    pub fn base(self) -> Option<BasicType> {
        match self {
            Self::Fixed(ty) => ty.base().map(Self::Fixed),
            Self::Float(ty) => ty.base().map(Self::Float),
            _ => None,
        }
    }

    /// Builtin tag used in mangled names.
    pub fn tag(self) -> String {
        match self {
            Self::Void => "void".to_owned(),
            Self::Label => "label".to_owned(),
            Self::Str => "str".to_owned(),
            Self::NullPtr => "nullptr".to_owned(),
            Self::Bool(kind) => kind.tag().to_owned(),
            Self::Char(ty) => ty.tag().to_owned(),
            Self::Int(ty) => ty.tag().to_owned(),
            Self::Fixed(ty) => ty.tag(),
            Self::Float(ty) => ty.tag(),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().find(|basic| basic.tag() == tag)
    }

    /// Source spelling.
    pub fn name(self) -> String {
        match self {
            Self::Void => "void".to_owned(),
            Self::Label => "__label".to_owned(),
            Self::Str => "__str".to_owned(),
            Self::NullPtr => "nullptr_t".to_owned(),
            Self::Bool(kind) => kind.name().to_owned(),
            Self::Char(ty) => ty.name().to_owned(),
            Self::Int(ty) => ty.name().to_owned(),
            Self::Fixed(ty) => ty.name(),
            Self::Float(ty) => ty.name(),
        }
    }
}

impl TypeId {
    /// Canonical id of a basic type. Valid in every `TypeContext`.
    pub const fn basic(ty: BasicType) -> TypeId {
        TypeId::from_raw(ty.index() as u32)
    }
}

pub const TYPE_VOID: TypeId = TypeId::basic(BasicType::Void);
pub const TYPE_LABEL: TypeId = TypeId::basic(BasicType::Label);
pub const TYPE_STRING: TypeId = TypeId::basic(BasicType::Str);
pub const TYPE_NULLPTR: TypeId = TypeId::basic(BasicType::NullPtr);
pub const TYPE_BOOL: TypeId = TypeId::basic(BasicType::Bool(BoolKind::Hard));
pub const TYPE_BOOL_SOFT: TypeId = TypeId::basic(BasicType::Bool(BoolKind::Soft));
pub const TYPE_CHAR: TypeId = TypeId::basic(BasicType::Char(CharType::CHAR));
pub const TYPE_INT: TypeId = TypeId::basic(BasicType::Int(IntType::INT));
pub const TYPE_UINT: TypeId = TypeId::basic(BasicType::Int(IntType::UINT));
pub const TYPE_LONG: TypeId = TypeId::basic(BasicType::Int(IntType::LONG));
pub const TYPE_FIXED: TypeId = TypeId::basic(BasicType::Fixed(FixedType::ACCUM));
pub const TYPE_FLOAT: TypeId = TypeId::basic(BasicType::Float(FloatType::FLOAT));
pub const TYPE_DOUBLE: TypeId = TypeId::basic(BasicType::Float(FloatType::DOUBLE));
