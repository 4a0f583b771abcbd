//! Aggregate tables: class and enum declarations plus completed bodies.
//!
//! Saving writes every declared struct, union and enum, then the completed
//! bodies in completion order. Loading happens in two steps: `load_tables`
//! declares the names and reads the bodies into open builders, and
//! `load_finish` completes them in the saved order, so each body only
//! depends on aggregates completed before it.

use vmcc_core::{ArchiveError, IArchive, OArchive};

use super::{LoadError, tag};
use crate::aggregate::{Access, ClassBuilder, EnumBuilder, EnumFlavor};
use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::TypeId;
use crate::shape::TypeShape;

/// Bodies read by `TypeContext::load_tables`, not yet completed.
#[derive(Debug, Default)]
pub struct PendingTables {
    bodies: Vec<PendingBody>,
}

#[derive(Debug)]
enum PendingBody {
    Class(ClassBuilder),
    Enum { builder: EnumBuilder, base: TypeId },
}

impl PendingTables {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl TypeContext {
    /// Write the class and enum tables.
    pub fn save_tables(&self, ar: &mut OArchive) -> Result<(), TypeError> {
        let decls: Vec<TypeId> = self
            .iter_types()
            .filter(|&ty| self.qual(ty).is_empty() && self.kind(ty).is_named())
            .collect();

        ar.put_tag(tag::DECLS).put_u64(decls.len() as u64);
        for &ty in &decls {
            self.save_type(ar, ty)?;
        }

        ar.put_tag(tag::BODIES)
            .put_u64(self.completion_order.len() as u64);
        for &ty in &self.completion_order {
            if let Some(def) = self.classes.get(&ty) {
                ar.put_tag(tag::CLASS_BODY);
                self.save_type(ar, ty)?;

                ar.put_u64(def.bases().len() as u64);
                for base in def.bases() {
                    self.save_type(ar, base.ty)?;
                    ar.put_str(base.access.tag()).put_bool(base.is_virtual);
                }

                ar.put_u64(def.data_members().len() as u64);
                for member in def.data_members() {
                    ar.put_keyword(&self.interner, member.name);
                    self.save_type(ar, member.ty)?;
                    ar.put_u64(member.offset)
                        .put_str(member.access.tag())
                        .put_bool(member.mutable);
                }

                ar.put_u64(def.func_members().len() as u64);
                for member in def.func_members() {
                    ar.put_keyword(&self.interner, member.name);
                    self.save_type(ar, member.ty)?;
                    ar.put_u64(member.offset)
                        .put_str(member.access.tag())
                        .put_bool(member.pure);
                }
            } else if let Some(def) = self.enums.get(&ty) {
                ar.put_tag(tag::ENUM_BODY);
                self.save_type(ar, ty)?;
                ar.put_str(def.flavor().tag());
                self.save_type(ar, def.base())?;

                ar.put_u64(def.len() as u64);
                for (name, value) in def.values() {
                    ar.put_keyword(&self.interner, name).put_i128(value);
                }
            }
        }

        tracing::debug!(
            decls = decls.len(),
            bodies = self.completion_order.len(),
            "saved aggregate tables"
        );
        Ok(())
    }

    /// Declare every saved aggregate and read the saved bodies.
    ///
    /// Nothing is completed until `load_finish`.
    pub fn load_tables(&mut self, ar: &mut IArchive) -> Result<PendingTables, LoadError> {
        expect_tag(ar, tag::DECLS)?;
        let decls = ar.get_usize()?;
        for _ in 0..decls {
            self.load_type(ar)?;
        }

        expect_tag(ar, tag::BODIES)?;
        let count = ar.get_usize()?;
        let mut pending = PendingTables::default();
        for _ in 0..count {
            let body = match ar.get_tag()?.as_str() {
                tag::CLASS_BODY => PendingBody::Class(self.load_class_body(ar)?),
                tag::ENUM_BODY => self.load_enum_body(ar)?,
                other => return Err(ArchiveError::UnknownTag(other.to_owned()).into()),
            };
            pending.bodies.push(body);
        }

        tracing::debug!(decls, bodies = pending.len(), "loaded aggregate tables");
        Ok(pending)
    }

    /// Complete every body read by `load_tables`, in saved order.
    pub fn load_finish(&mut self, pending: PendingTables) -> Result<(), TypeError> {
        let count = pending.len();
        for body in pending.bodies {
            match body {
                PendingBody::Class(builder) => self.complete_class(builder)?,
                PendingBody::Enum { builder, base } => self.complete_enum(builder, base)?,
            };
        }
        tracing::debug!(bodies = count, "finished aggregate tables");
        Ok(())
    }

    fn load_class_body(&mut self, ar: &mut IArchive) -> Result<ClassBuilder, LoadError> {
        let ty = self.load_type(ar)?;
        let mut builder = self.define_class(ty)?;

        let bases = ar.get_usize()?;
        for _ in 0..bases {
            let base = self.load_type(ar)?;
            let access = load_access(ar)?;
            builder.add_base_class(base, access, ar.get_bool()?);
        }

        let data = ar.get_usize()?;
        for _ in 0..data {
            let name = ar.get_str()?;
            let member = self.load_type(ar)?;
            let offset = ar.get_u64()?;
            let access = load_access(ar)?;
            builder.add_data_member(&name, member, offset, access, ar.get_bool()?);
        }

        let funcs = ar.get_usize()?;
        for _ in 0..funcs {
            let name = ar.get_str()?;
            let member = self.load_type(ar)?;
            let offset = ar.get_u64()?;
            let access = load_access(ar)?;
            builder.add_func_member(&name, member, offset, access, ar.get_bool()?);
        }

        Ok(builder)
    }

    fn load_enum_body(&mut self, ar: &mut IArchive) -> Result<PendingBody, LoadError> {
        let ty = self.load_type(ar)?;
        let mut builder = self.define_enum(ty)?;

        let flavor = ar.get_str()?;
        let flavor = EnumFlavor::from_tag(&flavor).ok_or(ArchiveError::UnknownTag(flavor))?;
        builder.flavor(flavor);
        let base = self.load_type(ar)?;

        let count = ar.get_usize()?;
        for _ in 0..count {
            let name = ar.get_str()?;
            builder.add_value(&name, ar.get_i128()?)?;
        }

        Ok(PendingBody::Enum { builder, base })
    }

    /// Declared aggregates that have not been completed.
    pub fn incomplete_aggregates(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.iter_types().filter(|&ty| {
            self.qual(ty).is_empty()
                && match self.shape(ty) {
                    TypeShape::Class { .. } => !self.classes.contains_key(&ty),
                    TypeShape::Enum { .. } => !self.enums.contains_key(&ty),
                    _ => false,
                }
        })
    }
}

fn expect_tag(ar: &mut IArchive, expected: &str) -> Result<(), ArchiveError> {
    let found = ar.get_tag()?;
    if found != expected {
        return Err(ArchiveError::UnknownTag(found));
    }
    Ok(())
}

fn load_access(ar: &mut IArchive) -> Result<Access, ArchiveError> {
    let tag = ar.get_str()?;
    Access::from_tag(&tag).ok_or(ArchiveError::UnknownTag(tag))
}
