//! Structural description of a type node, minus its qualifiers.
//!
//! Two nodes with equal shapes and equal qualifiers are the same type; the
//! context keeps one canonical node per shape and hangs qualified variants
//! off it.

use vmcc_core::ContextKey;

use crate::basic::BasicType;
use crate::ids::{ParamSetId, SizeExprId, TypeId};
use crate::kind::TypeKind;

/// Element count of an array type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ArrayExtent {
    /// `T[n]`
    Fixed(u64),
    /// `T[]`
    Incomplete,
    /// `T[expr]` with a runtime size.
    Variable(SizeExprId),
    /// `T[*]`: variable length, size expression not yet known.
    Unspecified,
}

impl ArrayExtent {
    pub fn is_variable(self) -> bool {
        matches!(self, Self::Variable(_) | Self::Unspecified)
    }

    /// Whether an array with this extent has a knowable size.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Fixed(_) | Self::Variable(_))
    }
}

/// Calling convention of a function type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CallConv {
    /// Script action special.
    Action,
    AsmFunc,
    LangAcs,
    LangAsm,
    #[default]
    LangC,
    LangCxx,
    LangDs,
    Native,
    /// Named script.
    Script,
    /// Numbered script.
    ScriptI,
    /// String-named script.
    ScriptS,
    Special,
    StdCall,
    SynAcc,
}

impl CallConv {
    pub const ALL: [CallConv; 14] = [
        Self::Action,
        Self::AsmFunc,
        Self::LangAcs,
        Self::LangAsm,
        Self::LangC,
        Self::LangCxx,
        Self::LangDs,
        Self::Native,
        Self::Script,
        Self::ScriptI,
        Self::ScriptS,
        Self::Special,
        Self::StdCall,
        Self::SynAcc,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::AsmFunc => "asmfunc",
            Self::LangAcs => "acs",
            Self::LangAsm => "asm",
            Self::LangC => "c",
            Self::LangCxx => "cxx",
            Self::LangDs => "ds",
            Self::Native => "native",
            Self::Script => "script",
            Self::ScriptI => "scripti",
            Self::ScriptS => "scripts",
            Self::Special => "special",
            Self::StdCall => "stdcall",
            Self::SynAcc => "synacc",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|conv| conv.tag() == tag)
    }

    /// Conventions whose callee is a script rather than a function.
    pub fn is_script(self) -> bool {
        matches!(self, Self::Script | Self::ScriptI | Self::ScriptS)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeShape {
    Basic(BasicType),
    Array {
        base: TypeId,
        extent: ArrayExtent,
    },
    Bitfield {
        base: TypeId,
        bits: u32,
        offset: u32,
    },
    Pointer(TypeId),
    LValueRef(TypeId),
    RValueRef(TypeId),
    Function {
        ret: TypeId,
        params: ParamSetId,
        conv: CallConv,
    },
    MemberFunction {
        class: TypeId,
        ret: TypeId,
        params: ParamSetId,
        conv: CallConv,
    },
    MemberPointer {
        class: TypeId,
        base: TypeId,
    },
    Tuple(ParamSetId),
    /// Struct (`structure == true`) or union, identified by name.
    Class {
        name: ContextKey,
        structure: bool,
    },
    Enum {
        name: ContextKey,
    },
}

impl TypeShape {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Basic(basic) => match basic {
                BasicType::Void => TypeKind::Void,
                BasicType::Label => TypeKind::Label,
                BasicType::Str => TypeKind::Str,
                BasicType::NullPtr => TypeKind::NullPtr,
                BasicType::Bool(_) => TypeKind::Bool,
                BasicType::Char(_) => TypeKind::Char,
                BasicType::Int(_) => TypeKind::Integer,
                BasicType::Fixed(_) => TypeKind::Fixed,
                BasicType::Float(_) => TypeKind::Float,
            },
            Self::Array { .. } => TypeKind::Array,
            Self::Bitfield { .. } => TypeKind::Bitfield,
            Self::Pointer(_) => TypeKind::Pointer,
            Self::LValueRef(_) => TypeKind::LValueRef,
            Self::RValueRef(_) => TypeKind::RValueRef,
            Self::Function { .. } => TypeKind::Function,
            Self::MemberFunction { .. } => TypeKind::MemberFunction,
            Self::MemberPointer { .. } => TypeKind::MemberPointer,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::Class {
                structure: true, ..
            } => TypeKind::Struct,
            Self::Class {
                structure: false, ..
            } => TypeKind::Union,
            Self::Enum { .. } => TypeKind::Enum,
        }
    }

    /// The type a derived shape is built on.
    ///
    /// Element for arrays, pointee for pointers and references, return type
    /// for functions. Named and basic shapes have no structural base.
    pub fn derived_from(&self) -> Option<TypeId> {
        match *self {
            Self::Array { base, .. }
            | Self::Bitfield { base, .. }
            | Self::Pointer(base)
            | Self::LValueRef(base)
            | Self::RValueRef(base)
            | Self::MemberPointer { base, .. } => Some(base),
            Self::Function { ret, .. } | Self::MemberFunction { ret, .. } => Some(ret),
            Self::Basic(_) | Self::Tuple(_) | Self::Class { .. } | Self::Enum { .. } => None,
        }
    }

    pub fn as_basic(&self) -> Option<BasicType> {
        match *self {
            Self::Basic(basic) => Some(basic),
            _ => None,
        }
    }

    /// Parameter set carried by function and tuple shapes.
    pub fn param_set(&self) -> Option<ParamSetId> {
        match *self {
            Self::Function { params, .. }
            | Self::MemberFunction { params, .. }
            | Self::Tuple(params) => Some(params),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<ContextKey> {
        match *self {
            Self::Class { name, .. } | Self::Enum { name } => Some(name),
            _ => None,
        }
    }
}
