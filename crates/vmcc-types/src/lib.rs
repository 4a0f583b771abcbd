//! Canonical type system for the vmcc compiler.
//!
//! Every type lives in a [`TypeContext`] and is named by a [`TypeId`].
//! Factories canonicalize, so equal requests give equal ids and type
//! identity is id equality.
//!
//! # Example
//!
//! ```
//! use vmcc_types::{TYPE_INT, TypeContext, TypeQual};
//!
//! let mut ctx = TypeContext::default();
//! let ptr = ctx.get_pointer_type(TYPE_INT);
//! assert_eq!(ptr, ctx.get_pointer_type(TYPE_INT));
//!
//! let const_ptr = ctx.get_qual_type(ptr, TypeQual::CONST);
//! assert_eq!(ctx.display(const_ptr), "int* const");
//! assert_eq!(ctx.get_name_mangle(const_ptr).unwrap(), "P(B<int>)c");
//! assert_eq!(ctx.size_bytes(const_ptr).unwrap(), 4);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod aggregate;
pub mod archive;
pub mod basic;
pub mod config;
pub mod kind;
pub mod qual;
pub mod shape;
pub mod size_expr;

mod classify;
mod context;
mod derived;
mod display;
mod error;
mod ids;
mod invariants;
mod layout;
mod mangle;
mod param_set;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod display_tests;
#[cfg(test)]
mod kind_tests;
#[cfg(test)]
mod qual_tests;

pub use aggregate::{
    Access, BaseClass, ClassBuilder, ClassDef, DataMember, EnumBuilder, EnumDef, EnumFlavor,
    FuncMember,
};
pub use archive::{LoadError, PendingTables};
pub use basic::{
    BasicType, TYPE_BOOL, TYPE_BOOL_SOFT, TYPE_CHAR, TYPE_DOUBLE, TYPE_FIXED, TYPE_FLOAT,
    TYPE_INT, TYPE_LABEL, TYPE_LONG, TYPE_NULLPTR, TYPE_STRING, TYPE_UINT, TYPE_VOID,
};
pub use config::{Config, TargetProfile};
pub use context::TypeContext;
pub use error::TypeError;
pub use ids::{ParamSetId, SizeExprId, TypeId};
pub use kind::TypeKind;
pub use param_set::ParamSet;
pub use qual::{AddrBase, AddrSpace, TypeQual};
pub use shape::{ArrayExtent, CallConv, TypeShape};
pub use size_expr::SizeExpr;
