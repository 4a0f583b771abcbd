use super::*;

#[test]
fn declarators_read_right_to_left() {
    let mut ctx = TypeContext::default();
    let const_int = ctx.get_qual_type(TYPE_INT, TypeQual::CONST);
    let to_const = ctx.get_pointer_type(const_int);
    let ptr = ctx.get_pointer_type(TYPE_INT);
    let const_ptr = ctx.get_qual_type(ptr, TypeQual::CONST);
    let ptr_ptr = ctx.get_pointer_type(ptr);
    let lref = ctx.get_lvalue_reference_type(TYPE_INT);
    let rref = ctx.get_rvalue_reference_type(TYPE_INT);

    insta::assert_snapshot!(ctx.display(to_const), @"int const*");
    insta::assert_snapshot!(ctx.display(const_ptr), @"int* const");
    insta::assert_snapshot!(ctx.display(ptr_ptr), @"int**");
    insta::assert_snapshot!(ctx.display(lref), @"int&");
    insta::assert_snapshot!(ctx.display(rref), @"int&&");
}

#[test]
fn arrays_and_bitfields() {
    let mut ctx = TypeContext::default();
    let fixed = ctx.get_array_type(TYPE_INT, 4);
    let open = ctx.get_array_type_incomplete(TYPE_CHAR);
    let vla = ctx.get_array_type_vla(TYPE_INT, Some(SizeExprId(3)));
    let star = ctx.get_array_type_vla(TYPE_INT, None);
    let bits = ctx.get_bitfield_type(TYPE_UINT, 3, 0);

    insta::assert_snapshot!(ctx.display(fixed), @"int[4]");
    insta::assert_snapshot!(ctx.display(open), @"char[]");
    insta::assert_snapshot!(ctx.display(vla), @"int[%e3]");
    insta::assert_snapshot!(ctx.display(star), @"int[*]");
    insta::assert_snapshot!(ctx.display(bits), @"unsigned int : 3");
}

#[test]
fn functions_and_tuples() {
    let mut ctx = TypeContext::default();
    let params = ctx.get_param_set(&[TYPE_CHAR], true);
    let only_varargs = ctx.get_param_set(&[], true);
    let printf = ctx.get_function_type(TYPE_INT, params, CallConv::LangC);
    let any = ctx.get_function_type(TYPE_VOID, only_varargs, CallConv::LangC);
    let tuple = ctx.get_tuple_type(&[TYPE_INT, TYPE_CHAR]);

    insta::assert_snapshot!(ctx.display(printf), @"int(char, ...)");
    insta::assert_snapshot!(ctx.display(any), @"void(...)");
    insta::assert_snapshot!(ctx.display(tuple), @"__tuple(int, char)");
}

#[test]
fn named_types_and_members() {
    let mut ctx = TypeContext::default();
    let foo_key = ctx.interner_mut().key_path(&["Foo"]);
    let u_key = ctx.interner_mut().key_path(&["ns", "U"]);
    let color_key = ctx.interner_mut().key_path(&["Color"]);
    let foo = ctx.get_struct_type(foo_key);
    let u = ctx.get_union_type(u_key);
    let color = ctx.get_enum_type(color_key);
    let params = ctx.get_param_set(&[TYPE_CHAR], false);
    let method = ctx
        .get_member_function_type(foo, TYPE_INT, params, CallConv::LangCxx)
        .unwrap();
    let member_ptr = ctx.get_member_pointer_type(foo, TYPE_INT).unwrap();

    insta::assert_snapshot!(ctx.display(foo), @"struct ::Foo");
    insta::assert_snapshot!(ctx.display(u), @"union ::ns::U");
    insta::assert_snapshot!(ctx.display(color), @"enum ::Color");
    insta::assert_snapshot!(ctx.display(method), @"int ::Foo::(char)");
    insta::assert_snapshot!(ctx.display(member_ptr), @"int ::Foo::*");
}

#[test]
fn address_spaces() {
    let mut ctx = TypeContext::default();
    let arr = ctx.interner_mut().key_path(&["arr"]);
    let far = ctx.get_qual_type(
        TYPE_INT,
        TypeQual::NONE.with_space(AddrSpace::new(AddrBase::Far)),
    );
    let named = ctx.get_qual_type(
        TYPE_INT,
        TypeQual::VOLATILE.with_space(AddrSpace::declared(AddrBase::ModArr, arr)),
    );

    insta::assert_snapshot!(ctx.display(far), @"int __far");
    insta::assert_snapshot!(ctx.display(named), @"int __modarr(::arr) volatile");
}
