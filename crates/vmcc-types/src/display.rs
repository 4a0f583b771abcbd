//! Human-readable type rendering for diagnostics.
//!
//! Declarators are written postfix after their base (`int const*`,
//! `char[4]`, `int(char, ...)`), so the text reads right to left.

use crate::context::TypeContext;
use crate::ids::{ParamSetId, TypeId};
use crate::qual::TypeQual;
use crate::shape::{ArrayExtent, TypeShape};

impl TypeContext {
    /// Render `ty` for a diagnostic message.
    pub fn display(&self, ty: TypeId) -> String {
        let mut out = String::new();
        self.render(ty, &mut out);
        out
    }

    fn render(&self, ty: TypeId, out: &mut String) {
        match *self.shape(ty) {
            TypeShape::Basic(basic) => out.push_str(&basic.name()),
            TypeShape::Array { base, extent } => {
                self.render(base, out);
                match extent {
                    ArrayExtent::Fixed(count) => out.push_str(&format!("[{count}]")),
                    ArrayExtent::Incomplete => out.push_str("[]"),
                    ArrayExtent::Variable(expr) => out.push_str(&format!("[{expr}]")),
                    ArrayExtent::Unspecified => out.push_str("[*]"),
                }
            }
            TypeShape::Bitfield { base, bits, .. } => {
                self.render(base, out);
                out.push_str(&format!(" : {bits}"));
            }
            TypeShape::Pointer(base) => {
                self.render(base, out);
                out.push('*');
            }
            TypeShape::LValueRef(base) => {
                self.render(base, out);
                out.push('&');
            }
            TypeShape::RValueRef(base) => {
                self.render(base, out);
                out.push_str("&&");
            }
            TypeShape::Function { ret, params, .. } => {
                self.render(ret, out);
                self.render_params(params, out);
            }
            TypeShape::MemberFunction {
                class, ret, params, ..
            } => {
                self.render(ret, out);
                out.push(' ');
                self.render_scope(class, out);
                self.render_params(params, out);
            }
            TypeShape::MemberPointer { class, base } => {
                self.render(base, out);
                out.push(' ');
                self.render_scope(class, out);
                out.push('*');
            }
            TypeShape::Tuple(params) => {
                out.push_str("__tuple");
                self.render_params(params, out);
            }
            TypeShape::Class { name, structure } => {
                out.push_str(if structure { "struct " } else { "union " });
                out.push_str(&self.interner.display_key(name));
            }
            TypeShape::Enum { name } => {
                out.push_str("enum ");
                out.push_str(&self.interner.display_key(name));
            }
        }
        self.render_qual(self.qual(ty), out);
    }

    fn render_params(&self, params: ParamSetId, out: &mut String) {
        let set = self.param_set(params);
        out.push('(');
        for (i, &param) in set.types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.render(param, out);
        }
        if set.variadic {
            out.push_str(if set.is_empty() { "..." } else { ", ..." });
        }
        out.push(')');
    }

    /// `::Foo::` prefix of a member of `class`.
    fn render_scope(&self, class: TypeId, out: &mut String) {
        if let Some(name) = self.shape(class).name() {
            out.push_str(&self.interner.display_key(name));
        }
        out.push_str("::");
    }

    fn render_qual(&self, qual: TypeQual, out: &mut String) {
        let space = qual.space;
        if !space.is_generic() {
            out.push_str(" __");
            out.push_str(space.base.tag());
            if let Some(name) = space.name.filter(|name| !name.is_root()) {
                out.push('(');
                out.push_str(&self.interner.display_key(name));
                out.push(')');
            }
        }
        if qual.atomic {
            out.push_str(" _Atomic");
        }
        if qual.constant {
            out.push_str(" const");
        }
        if qual.restrict {
            out.push_str(" restrict");
        }
        if qual.volatile {
            out.push_str(" volatile");
        }
    }
}
