//! Canonical textual signatures.
//!
//! ```text
//! mangled     := type-base qualifier*
//! qualifier   := '<' space-tag name? '>' | 'a' | 'c' | 'r' | 'v'
//! type-base   := 'A' number type-single
//!              | 'B' '<' builtin-tag '>'
//!              | 'E' name
//!              | 'F' '<' call-tag '>' param-list type-single
//!              | 'L' type-single
//!              | 'M' name '<' call-tag '>' param-list type-single
//!              | 'O' name type-single
//!              | 'P' type-single
//!              | 'R' type-single
//!              | 'S' name
//!              | 'T' param-list
//!              | 'U' name
//!              | 'W' type-single number number
//! param-list  := '(' (type-single (',' type-single)* (',...')? | '...')? ')'
//! type-single := '(' mangled ')'
//! name        := '{' ('::' identifier)* '}'
//! number      := '[' ('*'? digits | '*')? ']'
//! ```
//!
//! Array numbers are empty for `T[]`, `*` for `T[*]` and `*` followed by
//! the size expression id for other variable-length arrays.

use vmcc_core::ContextKey;

use crate::context::TypeContext;
use crate::error::TypeError;
use crate::ids::{ParamSetId, TypeId};
use crate::qual::TypeQual;
use crate::shape::{ArrayExtent, TypeShape};

impl TypeContext {
    /// Mangled signature of `ty`.
    ///
    /// Fails only when an internal placeholder address space appears
    /// anywhere in the type.
    pub fn get_name_mangle(&self, ty: TypeId) -> Result<String, TypeError> {
        let mut mangler = Mangler {
            ctx: self,
            out: String::new(),
        };
        mangler.mangled(ty)?;
        Ok(mangler.out)
    }
}

struct Mangler<'a> {
    ctx: &'a TypeContext,
    out: String,
}

impl Mangler<'_> {
    fn mangled(&mut self, ty: TypeId) -> Result<(), TypeError> {
        let ctx = self.ctx;
        match *ctx.shape(ty) {
            TypeShape::Basic(basic) => {
                self.out.push('B');
                self.tag(&basic.tag());
            }
            TypeShape::Array { base, extent } => {
                self.out.push('A');
                match extent {
                    ArrayExtent::Fixed(count) => self.number(count),
                    ArrayExtent::Incomplete => self.out.push_str("[]"),
                    ArrayExtent::Variable(expr) => {
                        self.out.push_str(&format!("[*{}]", expr.0));
                    }
                    ArrayExtent::Unspecified => self.out.push_str("[*]"),
                }
                self.single(base)?;
            }
            TypeShape::Bitfield { base, bits, offset } => {
                self.out.push('W');
                self.single(base)?;
                self.number(u64::from(bits));
                self.number(u64::from(offset));
            }
            TypeShape::Pointer(base) => {
                self.out.push('P');
                self.single(base)?;
            }
            TypeShape::LValueRef(base) => {
                self.out.push('L');
                self.single(base)?;
            }
            TypeShape::RValueRef(base) => {
                self.out.push('R');
                self.single(base)?;
            }
            TypeShape::Function { ret, params, conv } => {
                self.out.push('F');
                self.tag(conv.tag());
                self.params(params)?;
                self.single(ret)?;
            }
            TypeShape::MemberFunction {
                class,
                ret,
                params,
                conv,
            } => {
                self.out.push('M');
                self.class_name(class);
                self.tag(conv.tag());
                self.params(params)?;
                self.single(ret)?;
            }
            TypeShape::MemberPointer { class, base } => {
                self.out.push('O');
                self.class_name(class);
                self.single(base)?;
            }
            TypeShape::Tuple(params) => {
                self.out.push('T');
                self.params(params)?;
            }
            TypeShape::Class { name, structure } => {
                self.out.push(if structure { 'S' } else { 'U' });
                self.name(name);
            }
            TypeShape::Enum { name } => {
                self.out.push('E');
                self.name(name);
            }
        }
        self.qualifiers(ctx.qual(ty))
    }

    fn single(&mut self, ty: TypeId) -> Result<(), TypeError> {
        self.out.push('(');
        self.mangled(ty)?;
        self.out.push(')');
        Ok(())
    }

    fn params(&mut self, params: ParamSetId) -> Result<(), TypeError> {
        let ctx = self.ctx;
        let set = ctx.param_set(params);
        self.out.push('(');
        for (i, &param) in set.types.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.single(param)?;
        }
        if set.variadic {
            if !set.types.is_empty() {
                self.out.push(',');
            }
            self.out.push_str("...");
        }
        self.out.push(')');
        Ok(())
    }

    fn qualifiers(&mut self, qual: TypeQual) -> Result<(), TypeError> {
        let space = qual.space;
        if space.base.is_placeholder() {
            return Err(TypeError::InternalAddrSpace(space.base));
        }
        if !space.is_generic() {
            self.out.push('<');
            self.out.push_str(space.base.tag());
            if let Some(name) = space.name {
                self.name(name);
            }
            self.out.push('>');
        }
        if qual.atomic {
            self.out.push('a');
        }
        if qual.constant {
            self.out.push('c');
        }
        if qual.restrict {
            self.out.push('r');
        }
        if qual.volatile {
            self.out.push('v');
        }
        Ok(())
    }

    fn tag(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn number(&mut self, value: u64) {
        self.out.push('[');
        self.out.push_str(&value.to_string());
        self.out.push(']');
    }

    fn class_name(&mut self, class: TypeId) {
        let ctx = self.ctx;
        if let Some(name) = ctx.shape(class).name() {
            self.name(name);
        }
    }

    fn name(&mut self, key: ContextKey) {
        let ctx = self.ctx;
        self.out.push('{');
        for segment in ctx.interner().key_strings(key) {
            self.out.push_str("::");
            self.out.push_str(segment);
        }
        self.out.push('}');
    }
}
