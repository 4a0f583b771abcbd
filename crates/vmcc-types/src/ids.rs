//! Index newtypes handed out by a `TypeContext`.

use std::fmt;

use crate::basic::BasicType;

/// Canonical type handle. Equal ids denote the same type.
///
/// Ids below `BasicType::COUNT` are the basic singletons; all others index
/// nodes created on demand.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_basic(self) -> bool {
        (self.0 as usize) < BasicType::COUNT
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to an interned parameter set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct ParamSetId(u32);

impl ParamSetId {
    /// The empty, non-variadic set. Always present.
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a runtime size expression owned by the code generator.
///
/// The type system never evaluates it; it only threads it through
/// variable-length array types and deferred size expressions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct SizeExprId(pub u32);

impl fmt::Display for SizeExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%e{}", self.0)
    }
}
