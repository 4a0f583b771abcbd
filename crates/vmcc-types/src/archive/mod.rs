//! Type records on top of the `vmcc_core` archive stream.
//!
//! A type record is a kind tag, the kind's fields in a fixed order, then the
//! qualifiers. Nested types are written as nested records. Classes and
//! enums are written by name only; their bodies travel in the aggregate
//! tables written by `TypeContext::save_tables`.

mod load;
mod save;
mod tables;


pub use tables::PendingTables;

use vmcc_core::ArchiveError;

use crate::error::TypeError;

/// Failure while rebuilding types from an archive.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

pub(crate) mod tag {
    pub const ARRAY: &str = "array";
    pub const ARRAY_INCOMPLETE: &str = "array_incomplete";
    pub const ARRAY_VLA: &str = "array_vla";
    pub const ARRAY_VLA_UNSPEC: &str = "array_vla_unspec";
    pub const BITFIELD: &str = "bitfield";
    pub const POINTER: &str = "pointer";
    pub const LREF: &str = "lref";
    pub const RREF: &str = "rref";
    pub const FUNCTION: &str = "function";
    pub const MEMBER_FUNCTION: &str = "member_function";
    pub const MEMBER_POINTER: &str = "member_pointer";
    pub const TUPLE: &str = "tuple";
    pub const STRUCT: &str = "struct";
    pub const UNION: &str = "union";
    pub const ENUM: &str = "enum";

    pub const DECLS: &str = "decls";
    pub const BODIES: &str = "bodies";
    pub const CLASS_BODY: &str = "class_body";
    pub const ENUM_BODY: &str = "enum_body";
}
