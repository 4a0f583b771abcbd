//! TypeContext: the arena owning every canonical type node.
//!
//! Unqualified nodes are interned by shape. Qualified variants are interned
//! by (unqualified id, qualifiers) and share their representative's shape,
//! so the uniqueness of a (shape, qualifiers) pair is a property of the two
//! maps rather than of any linked structure.

use std::cell::Cell;
use std::collections::HashMap;

use indexmap::IndexMap;
use vmcc_core::Interner;

use crate::aggregate::{ClassDef, EnumDef};
use crate::basic::BasicType;
use crate::config::{Config, TargetProfile};
use crate::error::TypeError;
use crate::ids::{ParamSetId, TypeId};
use crate::kind::TypeKind;
use crate::param_set::ParamSet;
use crate::qual::TypeQual;
use crate::shape::TypeShape;

#[derive(Clone, Debug)]
pub(crate) struct TypeNode {
    pub(crate) shape: TypeShape,
    pub(crate) qual: TypeQual,
    /// Canonical unqualified representative (self for unqualified nodes).
    pub(crate) unqual: TypeId,
    /// Qualified variants, only populated on the unqualified node.
    pub(crate) variants: Vec<TypeId>,
    /// Set once a tuple has been found complete.
    pub(crate) complete_memo: Cell<bool>,
}

/// Central registry for types, parameter sets, and aggregate definitions.
#[derive(Clone, Debug)]
pub struct TypeContext {
    pub(crate) nodes: Vec<TypeNode>,
    pub(crate) shape_map: HashMap<TypeShape, TypeId>,
    pub(crate) qual_map: HashMap<(TypeId, TypeQual), TypeId>,

    pub(crate) param_sets: Vec<ParamSet>,
    pub(crate) param_map: HashMap<ParamSet, ParamSetId>,

    pub(crate) classes: IndexMap<TypeId, ClassDef>,
    pub(crate) enums: IndexMap<TypeId, EnumDef>,
    /// Classes and enums in the order they were completed.
    pub(crate) completion_order: Vec<TypeId>,

    pub(crate) interner: Interner,
    pub(crate) config: Config,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TypeContext {
    pub fn new(config: Config) -> Self {
        let mut ctx = Self {
            nodes: Vec::new(),
            shape_map: HashMap::new(),
            qual_map: HashMap::new(),
            param_sets: Vec::new(),
            param_map: HashMap::new(),
            classes: IndexMap::new(),
            enums: IndexMap::new(),
            completion_order: Vec::new(),
            interner: Interner::new(),
            config,
        };

        // Pre-register basic singletons at their fixed IDs
        for basic in BasicType::all() {
            let id = ctx.intern_shape(TypeShape::Basic(basic));
            debug_assert_eq!(id, TypeId::basic(basic));
        }

        let empty = ctx.intern_param_set(ParamSet::default());
        debug_assert_eq!(empty, ParamSetId::EMPTY);

        ctx
    }

    /// Intern an unqualified shape, returning its canonical ID.
    pub(crate) fn intern_shape(&mut self, shape: TypeShape) -> TypeId {
        if let Some(&id) = self.shape_map.get(&shape) {
            return id;
        }

        let id = TypeId::from_raw(self.nodes.len() as u32);
        tracing::trace!(kind = shape.kind().name(), %id, "new type");
        self.nodes.push(TypeNode {
            shape: shape.clone(),
            qual: TypeQual::NONE,
            unqual: id,
            variants: Vec::new(),
            complete_memo: Cell::new(false),
        });
        self.shape_map.insert(shape, id);
        id
    }

    pub(crate) fn node(&self, ty: TypeId) -> &TypeNode {
        self.ensure_type(ty);
        &self.nodes[ty.index()]
    }

    /// The variant of `ty` carrying exactly the qualifiers `qual`.
    ///
    /// Returns `ty` itself when it already has them and the unqualified
    /// representative for `TypeQual::NONE`. Never fails.
    pub fn get_qual_type(&mut self, ty: TypeId, qual: TypeQual) -> TypeId {
        let node = self.node(ty);
        if node.qual == qual {
            return ty;
        }

        let unqual = node.unqual;
        if qual.is_empty() {
            return unqual;
        }
        if let Some(&id) = self.qual_map.get(&(unqual, qual)) {
            return id;
        }

        let shape = self.nodes[unqual.index()].shape.clone();
        let id = TypeId::from_raw(self.nodes.len() as u32);
        tracing::trace!(kind = shape.kind().name(), %id, base = %unqual, "new qualified variant");
        self.nodes.push(TypeNode {
            shape,
            qual,
            unqual,
            variants: Vec::new(),
            complete_memo: Cell::new(false),
        });
        self.nodes[unqual.index()].variants.push(id);
        self.qual_map.insert((unqual, qual), id);
        id
    }

    /// Add `qual` on top of the qualifiers `ty` already has.
    pub fn add_qual(&mut self, ty: TypeId, qual: TypeQual) -> TypeId {
        let merged = self.qual(ty).union(qual);
        self.get_qual_type(ty, merged)
    }

    pub fn unqualified(&self, ty: TypeId) -> TypeId {
        self.node(ty).unqual
    }

    pub fn qual(&self, ty: TypeId) -> TypeQual {
        self.node(ty).qual
    }

    pub fn shape(&self, ty: TypeId) -> &TypeShape {
        &self.node(ty).shape
    }

    pub fn kind(&self, ty: TypeId) -> TypeKind {
        self.node(ty).shape.kind()
    }

    /// Every qualified variant of `ty`'s unqualified type, the unqualified
    /// representative first.
    pub fn qual_variants(&self, ty: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        let unqual = self.unqualified(ty);
        std::iter::once(unqual).chain(self.nodes[unqual.index()].variants.iter().copied())
    }

    /// The type `ty` is derived from.
    ///
    /// Element of an array, pointee of a pointer, reference or member
    /// pointer, base of a bit-field, return type of a function, underlying
    /// type of a complete enum, non-saturating variant of a saturating
    /// fixed-point type, and real part of a complex or imaginary type.
    pub fn base_type(&self, ty: TypeId) -> Result<TypeId, TypeError> {
        let shape = self.shape(ty);
        if let Some(base) = shape.derived_from() {
            return Ok(base);
        }
        match *shape {
            TypeShape::Basic(basic) => basic
                .base()
                .map(TypeId::basic)
                .ok_or(TypeError::NoBaseType(ty)),
            TypeShape::Enum { .. } => self.enum_def(ty).map(|def| def.base),
            _ => Err(TypeError::NoBaseType(ty)),
        }
    }

    /// Parameter set of a function, member function, or tuple type.
    pub fn type_params(&self, ty: TypeId) -> Option<ParamSetId> {
        self.shape(ty).param_set()
    }

    /// All types in creation order.
    pub fn iter_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.nodes.len() as u32).map(TypeId::from_raw)
    }

    pub fn type_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn target(&self) -> TargetProfile {
        self.config.target
    }

    /// Switch the size/alignment profile for subsequent queries.
    ///
    /// Class sizes are fixed when the class is completed; switching after
    /// that leaves them as computed.
    pub fn set_target(&mut self, target: TargetProfile) {
        self.config.target = target;
    }
}
