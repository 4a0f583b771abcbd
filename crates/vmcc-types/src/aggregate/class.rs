use vmcc_core::{ContextKey, Keyword};

use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::TypeId;
use crate::shape::TypeShape;

/// Member access level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

impl Access {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        [Self::Public, Self::Protected, Self::Private]
            .into_iter()
            .find(|access| access.tag() == tag)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BaseClass {
    pub ty: TypeId,
    pub access: Access,
    pub is_virtual: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DataMember {
    pub name: Keyword,
    pub ty: TypeId,
    /// Byte offset from the start of the object.
    pub offset: u64,
    pub access: Access,
    pub mutable: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FuncMember {
    pub name: Keyword,
    /// A member-function type.
    pub ty: TypeId,
    /// Slot offset in the dispatch table.
    pub offset: u64,
    pub access: Access,
    pub pure: bool,
}

/// Frozen body of a completed struct or union.
#[derive(Clone, Debug)]
pub struct ClassDef {
    name: ContextKey,
    structure: bool,
    bases: Vec<BaseClass>,
    data: Vec<DataMember>,
    funcs: Vec<FuncMember>,
    size_bytes: u64,
    align: u64,
}

impl ClassDef {
    pub fn name(&self) -> ContextKey {
        self.name
    }

    pub fn is_structure(&self) -> bool {
        self.structure
    }

    pub fn bases(&self) -> &[BaseClass] {
        &self.bases
    }

    pub fn data_members(&self) -> &[DataMember] {
        &self.data
    }

    pub fn func_members(&self) -> &[FuncMember] {
        &self.funcs
    }

    pub fn data_member(&self, name: Keyword) -> Option<&DataMember> {
        self.data.iter().find(|m| m.name == name)
    }

    pub fn func_member(&self, name: Keyword) -> Option<&FuncMember> {
        self.funcs.iter().find(|m| m.name == name)
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn align(&self) -> u64 {
        self.align
    }
}

/// Member recorded before its name is interned. `flag` is `mutable` for
/// data members and `pure` for function members.
#[derive(Debug)]
struct PendingMember {
    name: String,
    ty: TypeId,
    offset: u64,
    access: Access,
    flag: bool,
}

/// Open class body. Consumed by `TypeContext::complete_class`.
#[derive(Debug)]
pub struct ClassBuilder {
    ty: TypeId,
    bases: Vec<BaseClass>,
    data: Vec<PendingMember>,
    funcs: Vec<PendingMember>,
}

impl ClassBuilder {
    /// The class being defined.
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn add_base_class(&mut self, base: TypeId, access: Access, is_virtual: bool) -> &mut Self {
        self.bases.push(BaseClass {
            ty: base,
            access,
            is_virtual,
        });
        self
    }

    pub fn add_data_member(
        &mut self,
        name: &str,
        ty: TypeId,
        offset: u64,
        access: Access,
        mutable: bool,
    ) -> &mut Self {
        self.data.push(PendingMember {
            name: name.to_owned(),
            ty,
            offset,
            access,
            flag: mutable,
        });
        self
    }

    pub fn add_func_member(
        &mut self,
        name: &str,
        ty: TypeId,
        offset: u64,
        access: Access,
        pure: bool,
    ) -> &mut Self {
        self.funcs.push(PendingMember {
            name: name.to_owned(),
            ty,
            offset,
            access,
            flag: pure,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty() && self.data.is_empty() && self.funcs.is_empty()
    }
}

impl TypeContext {
    pub fn get_struct_type(&mut self, name: ContextKey) -> TypeId {
        self.intern_shape(TypeShape::Class {
            name,
            structure: true,
        })
    }

    pub fn get_union_type(&mut self, name: ContextKey) -> TypeId {
        self.intern_shape(TypeShape::Class {
            name,
            structure: false,
        })
    }

    /// Open `class` for definition.
    pub fn define_class(&self, class: TypeId) -> Result<ClassBuilder, TypeError> {
        let ty = self.class_owner(class)?;
        if self.classes.contains_key(&ty) {
            return Err(TypeError::AlreadyComplete(ty));
        }
        Ok(ClassBuilder {
            ty,
            bases: Vec::new(),
            data: Vec::new(),
            funcs: Vec::new(),
        })
    }

    /// Freeze a class body and fix its size.
    ///
    /// The raw size is the largest of every base class size and every data
    /// member's `offset + size`, at least one byte, rounded up to the
    /// profile's storage granularity. Every base and member type must
    /// already be complete.
    pub fn complete_class(&mut self, builder: ClassBuilder) -> Result<TypeId, TypeError> {
        let ClassBuilder {
            ty,
            bases,
            data,
            funcs,
        } = builder;
        if self.classes.contains_key(&ty) {
            return Err(TypeError::AlreadyComplete(ty));
        }

        let mut raw = 0;
        let mut align = 1;
        for base in &bases {
            self.class_owner(base.ty)?;
            raw = raw.max(self.size_bytes(base.ty)?);
            align = align.max(self.alignment(base.ty)?);
        }
        for member in &data {
            let end = member
                .offset
                .checked_add(self.size_bytes(member.ty)?)
                .ok_or(TypeError::SizeOverflow(ty))?;
            raw = raw.max(end);
            align = align.max(self.alignment(member.ty)?);
        }

        let target = self.target();
        let size_bytes = target
            .round_bytes(raw.max(1))
            .ok_or(TypeError::SizeOverflow(ty))?;

        let data = data
            .into_iter()
            .map(|m| DataMember {
                name: self.interner.intern_owned(m.name),
                ty: m.ty,
                offset: m.offset,
                access: m.access,
                mutable: m.flag,
            })
            .collect();
        let funcs = funcs
            .into_iter()
            .map(|m| FuncMember {
                name: self.interner.intern_owned(m.name),
                ty: m.ty,
                offset: m.offset,
                access: m.access,
                pure: m.flag,
            })
            .collect();

        let TypeShape::Class { name, structure } = *self.shape(ty) else {
            unreachable!("class builder always targets a class type");
        };
        tracing::debug!(
            name = %self.interner.display_key(name),
            size_bytes,
            "class completed"
        );

        self.classes.insert(
            ty,
            ClassDef {
                name,
                structure,
                bases,
                data,
                funcs,
                size_bytes,
                align,
            },
        );
        self.completion_order.push(ty);
        Ok(ty)
    }

    /// Frozen body of a complete class.
    pub fn class_def(&self, class: TypeId) -> Result<&ClassDef, TypeError> {
        let ty = self.class_owner(class)?;
        self.classes.get(&ty).ok_or(TypeError::Incomplete(class))
    }

    /// Data member `name` of a complete class.
    pub fn class_data_member(
        &self,
        class: TypeId,
        name: &str,
    ) -> Result<Option<&DataMember>, TypeError> {
        let def = self.class_def(class)?;
        Ok(self
            .interner
            .lookup(name)
            .and_then(|kw| def.data_member(kw)))
    }
}
