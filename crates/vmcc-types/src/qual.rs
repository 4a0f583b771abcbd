//! Qualifier model: address spaces and cvr-qualifier sets.
//!
//! Qualifiers are plain values compared structurally. A `TypeQual` is part
//! of a type's identity: two types with the same shape but different
//! qualifiers are distinct canonical nodes.

use vmcc_core::ContextKey;

/// Storage category of an address space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AddrBase {
    /// Generic address space (no storage restriction).
    Gen,

    // Internal placeholders resolved before code generation.
    /// Automatic storage, pending allocation.
    Aut,
    /// Copy of an object in another address space.
    Cpy,
    /// Static storage, pending allocation.
    Sta,

    // Intrinsic storage.
    Loc,
    Far,
    Near,
    ModReg,
    HubReg,
    GblReg,
    ModArs,
    HubArs,
    GblArs,
    StrArs,
    /// Variadic argument address.
    Vaa,

    // Declarable: a specific named array.
    ModArr,
    HubArr,
    GblArr,
    StrArr,
}

impl AddrBase {
    pub const ALL: [AddrBase; 19] = [
        Self::Gen,
        Self::Aut,
        Self::Cpy,
        Self::Sta,
        Self::Loc,
        Self::Far,
        Self::Near,
        Self::ModReg,
        Self::HubReg,
        Self::GblReg,
        Self::ModArs,
        Self::HubArs,
        Self::GblArs,
        Self::StrArs,
        Self::Vaa,
        Self::ModArr,
        Self::HubArr,
        Self::GblArr,
        Self::StrArr,
    ];

    /// Internal-only categories that must never be mangled or archived.
    pub fn is_placeholder(self) -> bool {
        matches!(self, Self::Aut | Self::Cpy | Self::Sta)
    }

    /// Categories that name a specific declared array.
    pub fn is_declarable(self) -> bool {
        matches!(self, Self::ModArr | Self::HubArr | Self::GblArr | Self::StrArr)
    }

    /// Short tag used by the mangler and the archive.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Gen => "gen",
            Self::Aut => "aut",
            Self::Cpy => "cpy",
            Self::Sta => "sta",
            Self::Loc => "loc",
            Self::Far => "far",
            Self::Near => "near",
            Self::ModReg => "modreg",
            Self::HubReg => "hubreg",
            Self::GblReg => "gblreg",
            Self::ModArs => "modars",
            Self::HubArs => "hubars",
            Self::GblArs => "gblars",
            Self::StrArs => "strars",
            Self::Vaa => "vaa",
            Self::ModArr => "modarr",
            Self::HubArr => "hubarr",
            Self::GblArr => "gblarr",
            Self::StrArr => "strarr",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|base| base.tag() == tag)
    }
}

/// An address space: storage category plus the declared array it names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AddrSpace {
    pub base: AddrBase,
    /// Only set for declarable categories.
    pub name: Option<ContextKey>,
}

impl AddrSpace {
    pub const GENERIC: AddrSpace = AddrSpace {
        base: AddrBase::Gen,
        name: None,
    };

    pub fn generic() -> Self {
        Self::GENERIC
    }

    /// An unnamed address space. Declarable categories get the root name.
    pub fn new(base: AddrBase) -> Self {
        let name = base.is_declarable().then_some(ContextKey::ROOT);
        Self { base, name }
    }

    /// A declarable address space naming the array `name`.
    ///
    /// For non-declarable categories the name is dropped.
    pub fn declared(base: AddrBase, name: ContextKey) -> Self {
        Self {
            base,
            name: base.is_declarable().then_some(name),
        }
    }

    pub fn is_generic(self) -> bool {
        self.base == AddrBase::Gen
    }
}

impl Default for AddrSpace {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// Qualifier set of a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TypeQual {
    pub space: AddrSpace,
    pub atomic: bool,
    pub constant: bool,
    pub restrict: bool,
    pub volatile: bool,
}

impl TypeQual {
    /// No qualifiers, generic address space.
    pub const NONE: TypeQual = TypeQual {
        space: AddrSpace::GENERIC,
        atomic: false,
        constant: false,
        restrict: false,
        volatile: false,
    };

    pub const CONST: TypeQual = TypeQual {
        constant: true,
        ..Self::NONE
    };

    pub const VOLATILE: TypeQual = TypeQual {
        volatile: true,
        ..Self::NONE
    };

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with_const(self) -> Self {
        Self {
            constant: true,
            ..self
        }
    }

    pub fn with_volatile(self) -> Self {
        Self {
            volatile: true,
            ..self
        }
    }

    pub fn with_restrict(self) -> Self {
        Self {
            restrict: true,
            ..self
        }
    }

    pub fn with_atomic(self) -> Self {
        Self {
            atomic: true,
            ..self
        }
    }

    pub fn with_space(self, space: AddrSpace) -> Self {
        Self { space, ..self }
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Combine two qualifier sets. A non-generic space in `other` wins.
    pub fn union(self, other: TypeQual) -> TypeQual {
        TypeQual {
            space: if other.space.is_generic() {
                self.space
            } else {
                other.space
            },
            atomic: self.atomic || other.atomic,
            constant: self.constant || other.constant,
            restrict: self.restrict || other.restrict,
            volatile: self.volatile || other.volatile,
        }
    }

    /// Whether every qualifier of `self` is also present in `other`.
    pub fn is_subset_of(self, other: TypeQual) -> bool {
        (self.space.is_generic() || self.space == other.space)
            && (!self.atomic || other.atomic)
            && (!self.constant || other.constant)
            && (!self.restrict || other.restrict)
            && (!self.volatile || other.volatile)
    }
}
