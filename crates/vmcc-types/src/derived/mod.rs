//! Derived-type factories.
//!
//! Each family canonicalizes through `TypeContext::intern_shape`, keyed on
//! its base type and shape parameters, so equal requests return equal ids.

mod array;
mod bitfield;
mod function;
mod member_pointer;
mod pointer;
mod tuple;
