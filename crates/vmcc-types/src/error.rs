//! Errors raised by type queries and aggregate definition.
//!
//! Every variant marks a contract violation inside the compiler (a size
//! query on an incomplete type, a second definition of a class), never a
//! problem with user source. Callers normally propagate them to the driver.

use crate::TypeId;
use crate::qual::AddrBase;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Size, layout, or member query on a type that is not yet complete.
    #[error("type {0} is incomplete")]
    Incomplete(TypeId),

    /// Size query on void, label, or function types.
    #[error("type {0} has no size")]
    NoSize(TypeId),

    /// Constant size query on a variable-length array.
    #[error("type {0} has no constant size")]
    VariableSize(TypeId),

    /// Base query on a kind without a base type.
    #[error("type {0} has no base type")]
    NoBaseType(TypeId),

    /// Definition of a class or enum that was already completed.
    #[error("type {0} is already complete")]
    AlreadyComplete(TypeId),

    #[error("duplicate enumerator `{name}` in type {ty}")]
    DuplicateEnumValue { ty: TypeId, name: String },

    /// An internal placeholder address space reached mangling or archiving.
    #[error("internal address space {0:?} cannot be encoded")]
    InternalAddrSpace(AddrBase),

    #[error("type {0} is not a class type")]
    NotClass(TypeId),

    #[error("type {0} is not an enumerated type")]
    NotEnum(TypeId),

    /// Enum completed with a non-integer underlying type.
    #[error("type {base} cannot underlie enumerated type {ty}")]
    InvalidEnumBase { ty: TypeId, base: TypeId },

    #[error("tuple components cannot be variadic")]
    VariadicTuple,

    /// Size of the type does not fit in 64 bits.
    #[error("size of type {0} overflows")]
    SizeOverflow(TypeId),
}
