//! Closed type-kind tag and the classification table over it.
//!
//! Every classification query that depends only on the kind of a type is a
//! `matches!` over this enum, so adding a kind forces every table to be
//! revisited. Queries that need more than the kind (signedness, completeness,
//! qualifiers) live on `TypeContext`.

/// Kind of a type node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Void,
    Label,
    Str,
    NullPtr,
    Bool,
    Char,
    Integer,
    Fixed,
    Float,
    Array,
    Bitfield,
    Pointer,
    LValueRef,
    RValueRef,
    Function,
    MemberFunction,
    MemberPointer,
    Tuple,
    Struct,
    Union,
    Enum,
}

impl TypeKind {
    /// Builtin scalar singletons.
    pub fn is_basic(self) -> bool {
        matches!(
            self,
            Self::Void
                | Self::Label
                | Self::Str
                | Self::NullPtr
                | Self::Bool
                | Self::Char
                | Self::Integer
                | Self::Fixed
                | Self::Float
        )
    }

    /// Integer types in the C sense: booleans, characters, integers, enums.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Bool | Self::Char | Self::Integer | Self::Enum)
    }

    /// Integer, fixed-point, and floating types.
    pub fn is_arithmetic(self) -> bool {
        self.is_integer() || matches!(self, Self::Fixed | Self::Float)
    }

    pub fn is_scalar(self) -> bool {
        self.is_arithmetic()
            || matches!(
                self,
                Self::Pointer | Self::NullPtr | Self::MemberPointer | Self::Str
            )
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::Array | Self::Struct | Self::Tuple)
    }

    pub fn is_function(self) -> bool {
        matches!(self, Self::Function | Self::MemberFunction)
    }

    pub fn is_reference(self) -> bool {
        matches!(self, Self::LValueRef | Self::RValueRef)
    }

    /// Everything that is neither a function nor a reference.
    pub fn is_object(self) -> bool {
        !self.is_function() && !self.is_reference()
    }

    pub fn is_class(self) -> bool {
        matches!(self, Self::Struct | Self::Union)
    }

    /// Types whose identity is a name rather than a structure.
    pub fn is_named(self) -> bool {
        matches!(self, Self::Struct | Self::Union | Self::Enum)
    }

    /// Types built from another type.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::Bitfield
                | Self::Pointer
                | Self::LValueRef
                | Self::RValueRef
                | Self::Function
                | Self::MemberFunction
                | Self::MemberPointer
                | Self::Tuple
        )
    }

    /// Whether values of this kind have a byte size at all.
    pub fn has_size(self) -> bool {
        !matches!(
            self,
            Self::Void | Self::Label | Self::Function | Self::MemberFunction
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Label => "label",
            Self::Str => "string",
            Self::NullPtr => "nullptr",
            Self::Bool => "boolean",
            Self::Char => "character",
            Self::Integer => "integer",
            Self::Fixed => "fixed-point",
            Self::Float => "floating",
            Self::Array => "array",
            Self::Bitfield => "bit-field",
            Self::Pointer => "pointer",
            Self::LValueRef => "lvalue reference",
            Self::RValueRef => "rvalue reference",
            Self::Function => "function",
            Self::MemberFunction => "member function",
            Self::MemberPointer => "member pointer",
            Self::Tuple => "tuple",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
        }
    }
}
