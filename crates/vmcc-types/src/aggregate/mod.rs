//! Named aggregate types: classes (struct/union) and enumerations.
//!
//! Both are two-phase. `TypeContext::define_*` hands out an owned builder
//! while the type is open; `TypeContext::complete_*` consumes it and stores
//! the frozen definition. Size and value queries read the frozen
//! definition only, so an open type answers them with `Incomplete`.

mod class;
mod enumerated;

#[cfg(test)]
mod aggregate_tests;

pub use class::{Access, BaseClass, ClassBuilder, ClassDef, DataMember, FuncMember};
pub use enumerated::{EnumBuilder, EnumDef, EnumFlavor};
