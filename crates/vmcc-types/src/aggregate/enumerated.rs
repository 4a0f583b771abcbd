use indexmap::IndexMap;
use vmcc_core::{ContextKey, Keyword};

use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::TypeId;
use crate::kind::TypeKind;
use crate::shape::TypeShape;

/// Language flavor an enumeration was declared in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum EnumFlavor {
    /// Enumerators leak into the enclosing scope.
    #[default]
    Plain,
    /// May be declared as a scoped enumeration.
    Scoped,
}

impl EnumFlavor {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Scoped => "scoped",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [Self::Plain, Self::Scoped]
            .into_iter()
            .find(|flavor| flavor.tag() == tag)
    }
}

/// Frozen value table of a completed enumeration.
#[derive(Clone, Debug)]
pub struct EnumDef {
    name: ContextKey,
    flavor: EnumFlavor,
    values: IndexMap<Keyword, i128>,
    min: i128,
    max: i128,
    pub(crate) base: TypeId,
}

impl EnumDef {
    pub fn name(&self) -> ContextKey {
        self.name
    }

    pub fn flavor(&self) -> EnumFlavor {
        self.flavor
    }

    /// Underlying integer type.
    pub fn base(&self) -> TypeId {
        self.base
    }

    pub fn value(&self, name: Keyword) -> Option<i128> {
        self.values.get(&name).copied()
    }

    /// Enumerators in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (Keyword, i128)> + '_ {
        self.values.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest enumerator value, 0 for an empty enumeration.
    pub fn value_min(&self) -> i128 {
        self.min
    }

    /// Largest enumerator value, 0 for an empty enumeration.
    pub fn value_max(&self) -> i128 {
        self.max
    }
}

/// Open enumeration. Consumed by `TypeContext::complete_enum`.
#[derive(Debug)]
pub struct EnumBuilder {
    ty: TypeId,
    flavor: EnumFlavor,
    values: IndexMap<String, i128>,
}

impl EnumBuilder {
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn flavor(&mut self, flavor: EnumFlavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Add an enumerator. Names must be unique within the enumeration.
    pub fn add_value(&mut self, name: &str, value: i128) -> Result<&mut Self, TypeError> {
        if self.values.contains_key(name) {
            return Err(TypeError::DuplicateEnumValue {
                ty: self.ty,
                name: name.to_owned(),
            });
        }
        self.values.insert(name.to_owned(), value);
        Ok(self)
    }

    pub fn value(&self, name: &str) -> Option<i128> {
        self.values.get(name).copied()
    }
}

impl TypeContext {
    pub fn get_enum_type(&mut self, name: ContextKey) -> TypeId {
        self.intern_shape(TypeShape::Enum { name })
    }

    /// Open `ty` for definition.
    pub fn define_enum(&self, ty: TypeId) -> Result<EnumBuilder, TypeError> {
        let ty = self.enum_owner(ty)?;
        if self.enums.contains_key(&ty) {
            return Err(TypeError::AlreadyComplete(ty));
        }
        Ok(EnumBuilder {
            ty,
            flavor: EnumFlavor::Plain,
            values: IndexMap::new(),
        })
    }

    /// Freeze an enumeration with `base` as its underlying type.
    ///
    /// `base` must be a boolean, character, or integer type.
    pub fn complete_enum(
        &mut self,
        builder: EnumBuilder,
        base: TypeId,
    ) -> Result<TypeId, TypeError> {
        let EnumBuilder { ty, flavor, values } = builder;
        if self.enums.contains_key(&ty) {
            return Err(TypeError::AlreadyComplete(ty));
        }
        if !self.kind(base).is_integer() || self.kind(base).is_named() {
            return Err(TypeError::InvalidEnumBase { ty, base });
        }

        let min = values.values().copied().min().unwrap_or(0);
        let max = values.values().copied().max().unwrap_or(0);
        let values = values
            .into_iter()
            .map(|(name, value)| (self.interner.intern_owned(name), value))
            .collect();

        let TypeShape::Enum { name } = *self.shape(ty) else {
            unreachable!("enum builder always targets an enum type");
        };
        tracing::debug!(
            name = %self.interner.display_key(name),
            min,
            max,
            "enum completed"
        );

        self.enums.insert(
            ty,
            EnumDef {
                name,
                flavor,
                values,
                min,
                max,
                base,
            },
        );
        self.completion_order.push(ty);
        Ok(ty)
    }

    /// Frozen value table of a complete enumeration.
    pub fn enum_def(&self, ty: TypeId) -> Result<&EnumDef, TypeError> {
        let owner = self.enum_owner(ty)?;
        self.enums.get(&owner).ok_or(TypeError::Incomplete(ty))
    }

    /// Value of enumerator `name` in a complete enumeration.
    pub fn enum_value(&self, ty: TypeId, name: &str) -> Result<Option<i128>, TypeError> {
        let def = self.enum_def(ty)?;
        Ok(self.interner.lookup(name).and_then(|kw| def.value(kw)))
    }

    fn enum_owner(&self, ty: TypeId) -> Result<TypeId, TypeError> {
        if self.kind(ty) != TypeKind::Enum {
            return Err(TypeError::NotEnum(ty));
        }
        Ok(self.unqualified(ty))
    }
}
