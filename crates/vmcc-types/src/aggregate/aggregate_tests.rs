use crate::{
    Access, CallConv, Config, EnumFlavor, ParamSetId, TYPE_CHAR, TYPE_DOUBLE, TYPE_INT, TYPE_LONG,
    TYPE_UINT, TargetProfile, TypeContext, TypeError, TypeId, TypeQual,
};

fn struct_named(ctx: &mut TypeContext, name: &str) -> TypeId {
    let key = ctx.interner_mut().key_path(&[name]);
    ctx.get_struct_type(key)
}

fn enum_named(ctx: &mut TypeContext, name: &str) -> TypeId {
    let key = ctx.interner_mut().key_path(&[name]);
    ctx.get_enum_type(key)
}

#[test]
fn two_ints_on_wide_profile() {
    let mut ctx = TypeContext::default();
    let point = struct_named(&mut ctx, "Point");

    let mut builder = ctx.define_class(point).unwrap();
    builder
        .add_data_member("x", TYPE_INT, 0, Access::Public, false)
        .add_data_member("y", TYPE_INT, 4, Access::Public, false);
    ctx.complete_class(builder).unwrap();

    assert_eq!(ctx.size_bytes(point), Ok(8));
    assert_eq!(ctx.size_words(point), Ok(2));
    assert_eq!(ctx.alignment(point), Ok(4));
}

#[test]
fn two_ints_on_narrow_profile() {
    let mut ctx = TypeContext::new(Config::new().target(TargetProfile::Narrow));
    let point = struct_named(&mut ctx, "Point");

    let mut builder = ctx.define_class(point).unwrap();
    builder
        .add_data_member("x", TYPE_INT, 0, Access::Public, false)
        .add_data_member("y", TYPE_INT, 1, Access::Public, false);
    ctx.complete_class(builder).unwrap();

    assert_eq!(ctx.size_bytes(point), Ok(2));
    assert_eq!(ctx.alignment(point), Ok(1));
}

#[test]
fn empty_class_has_minimum_size() {
    let mut ctx = TypeContext::default();
    let empty = struct_named(&mut ctx, "Empty");

    let builder = ctx.define_class(empty).unwrap();
    assert!(builder.is_empty());
    ctx.complete_class(builder).unwrap();

    // One byte, rounded up to a word.
    assert_eq!(ctx.size_bytes(empty), Ok(4));
}

#[test]
fn union_takes_largest_member() {
    let mut ctx = TypeContext::default();
    let key = ctx.interner_mut().key_path(&["Value"]);
    let value = ctx.get_union_type(key);

    let mut builder = ctx.define_class(value).unwrap();
    builder
        .add_data_member("c", TYPE_CHAR, 0, Access::Public, false)
        .add_data_member("d", TYPE_DOUBLE, 0, Access::Public, false);
    ctx.complete_class(builder).unwrap();

    assert_eq!(ctx.size_bytes(value), Ok(8));
    assert!(ctx.is_union(value));
}

#[test]
fn base_class_bounds_size() {
    let mut ctx = TypeContext::default();
    let base = struct_named(&mut ctx, "Base");
    let derived = struct_named(&mut ctx, "Derived");

    let mut builder = ctx.define_class(base).unwrap();
    builder.add_data_member("a", TYPE_LONG, 0, Access::Public, false);
    ctx.complete_class(builder).unwrap();

    let mut builder = ctx.define_class(derived).unwrap();
    builder
        .add_base_class(base, Access::Public, false)
        .add_data_member("b", TYPE_CHAR, 2, Access::Private, true);
    ctx.complete_class(builder).unwrap();

    let def = ctx.class_def(derived).unwrap();
    assert_eq!(def.size_bytes(), 8);
    assert_eq!(def.bases().len(), 1);
    assert_eq!(def.bases()[0].ty, base);
    assert!(def.data_members()[0].mutable);
}

#[test]
fn completion_is_monotonic() {
    let mut ctx = TypeContext::default();
    let foo = struct_named(&mut ctx, "Foo");

    assert!(!ctx.is_complete(foo));
    assert_eq!(ctx.size_bytes(foo), Err(TypeError::Incomplete(foo)));
    assert!(ctx.class_def(foo).is_err());

    let first = ctx.define_class(foo).unwrap();
    let second = ctx.define_class(foo).unwrap();
    ctx.complete_class(first).unwrap();

    assert!(ctx.is_complete(foo));
    assert_eq!(ctx.complete_class(second), Err(TypeError::AlreadyComplete(foo)));
    assert_eq!(
        ctx.define_class(foo).err(),
        Some(TypeError::AlreadyComplete(foo))
    );
    assert!(ctx.is_complete(foo));
}

#[test]
fn qualified_class_shares_definition() {
    let mut ctx = TypeContext::default();
    let foo = struct_named(&mut ctx, "Foo");
    let const_foo = ctx.get_qual_type(foo, TypeQual::CONST);

    let mut builder = ctx.define_class(const_foo).unwrap();
    builder.add_data_member("x", TYPE_INT, 0, Access::Public, false);
    ctx.complete_class(builder).unwrap();

    assert!(ctx.is_complete(foo));
    assert_eq!(ctx.size_bytes(const_foo), Ok(4));
}

#[test]
fn incomplete_member_is_rejected() {
    let mut ctx = TypeContext::default();
    let outer = struct_named(&mut ctx, "Outer");
    let inner = struct_named(&mut ctx, "Inner");

    let mut builder = ctx.define_class(outer).unwrap();
    builder.add_data_member("inner", inner, 0, Access::Public, false);

    assert_eq!(ctx.complete_class(builder), Err(TypeError::Incomplete(inner)));
    assert!(!ctx.is_complete(outer));
}

#[test]
fn member_lookup_by_name() {
    let mut ctx = TypeContext::default();
    let point = struct_named(&mut ctx, "Point");
    let method = ctx
        .get_member_function_type(point, TYPE_INT, ParamSetId::EMPTY, CallConv::LangCxx)
        .unwrap();

    let mut builder = ctx.define_class(point).unwrap();
    builder
        .add_data_member("x", TYPE_INT, 0, Access::Public, false)
        .add_data_member("y", TYPE_INT, 4, Access::Protected, false)
        .add_func_member("norm", method, 0, Access::Public, true);
    ctx.complete_class(builder).unwrap();

    let y = ctx.class_data_member(point, "y").unwrap().unwrap();
    assert_eq!(y.offset, 4);
    assert_eq!(y.access, Access::Protected);
    assert!(ctx.class_data_member(point, "z").unwrap().is_none());

    let norm = ctx.interner().lookup("norm").unwrap();
    let def = ctx.class_def(point).unwrap();
    assert!(def.func_member(norm).unwrap().pure);
    assert!(def.is_structure());
}

#[test]
fn define_class_rejects_non_class() {
    let ctx = TypeContext::default();
    assert_eq!(
        ctx.define_class(TYPE_INT).err(),
        Some(TypeError::NotClass(TYPE_INT))
    );
    assert_eq!(ctx.class_def(TYPE_INT).err(), Some(TypeError::NotClass(TYPE_INT)));
}

#[test]
fn color_enum_range() {
    let mut ctx = TypeContext::default();
    let color = enum_named(&mut ctx, "Color");

    let mut builder = ctx.define_enum(color).unwrap();
    builder
        .add_value("Red", 0)
        .unwrap()
        .add_value("Green", 1)
        .unwrap()
        .add_value("Blue", 5)
        .unwrap();
    let err = builder.add_value("Red", 2).unwrap_err();
    assert_eq!(
        err,
        TypeError::DuplicateEnumValue {
            ty: color,
            name: "Red".to_owned()
        }
    );
    insta::assert_snapshot!(err, @"duplicate enumerator `Red` in type #53");
    assert_eq!(builder.value("Red"), Some(0));
    ctx.complete_enum(builder, TYPE_INT).unwrap();

    let def = ctx.enum_def(color).unwrap();
    assert_eq!(def.value_min(), 0);
    assert_eq!(def.value_max(), 5);
    assert_eq!(def.len(), 3);
    assert_eq!(ctx.enum_value(color, "Blue"), Ok(Some(5)));
    assert_eq!(ctx.enum_value(color, "Purple"), Ok(None));
    assert_eq!(ctx.size_bytes(color), Ok(4));
}

#[test]
fn enum_values_keep_declaration_order() {
    let mut ctx = TypeContext::default();
    let level = enum_named(&mut ctx, "Level");

    let mut builder = ctx.define_enum(level).unwrap();
    builder
        .add_value("High", 10)
        .unwrap()
        .add_value("Low", -3)
        .unwrap();
    ctx.complete_enum(builder, TYPE_INT).unwrap();

    let def = ctx.enum_def(level).unwrap();
    let names: Vec<_> = def
        .values()
        .map(|(name, value)| (ctx.interner().resolve(name), value))
        .collect();
    assert_eq!(names, vec![("High", 10), ("Low", -3)]);
    assert_eq!(def.value_min(), -3);
}

#[test]
fn empty_enum_range_is_zero() {
    let mut ctx = TypeContext::default();
    let none = enum_named(&mut ctx, "None");

    let builder = ctx.define_enum(none).unwrap();
    ctx.complete_enum(builder, TYPE_UINT).unwrap();

    let def = ctx.enum_def(none).unwrap();
    assert!(def.is_empty());
    assert_eq!((def.value_min(), def.value_max()), (0, 0));
}

#[test]
fn enum_lifecycle_errors() {
    let mut ctx = TypeContext::default();
    let color = enum_named(&mut ctx, "Color");

    assert_eq!(ctx.enum_def(color).err(), Some(TypeError::Incomplete(color)));
    assert_eq!(ctx.size_bytes(color), Err(TypeError::Incomplete(color)));

    let builder = ctx.define_enum(color).unwrap();
    assert_eq!(
        ctx.complete_enum(builder, TYPE_DOUBLE),
        Err(TypeError::InvalidEnumBase {
            ty: color,
            base: TYPE_DOUBLE
        })
    );

    let builder = ctx.define_enum(color).unwrap();
    ctx.complete_enum(builder, TYPE_INT).unwrap();
    assert_eq!(
        ctx.define_enum(color).err(),
        Some(TypeError::AlreadyComplete(color))
    );
    assert_eq!(
        ctx.define_enum(TYPE_INT).err(),
        Some(TypeError::NotEnum(TYPE_INT))
    );
}

#[test]
fn scoped_flavor_is_recorded() {
    let mut ctx = TypeContext::default();
    let mode = enum_named(&mut ctx, "Mode");

    let mut builder = ctx.define_enum(mode).unwrap();
    builder.flavor(EnumFlavor::Scoped);
    ctx.complete_enum(builder, TYPE_CHAR).unwrap();

    assert_eq!(ctx.enum_def(mode).unwrap().flavor(), EnumFlavor::Scoped);
    assert!(ctx.is_scoped_enum(mode));
    assert_eq!(ctx.size_bytes(mode), Ok(1));
}

#[test]
fn member_past_address_space_overflows() {
    let mut ctx = TypeContext::default();
    let big = struct_named(&mut ctx, "Big");

    let mut builder = ctx.define_class(big).unwrap();
    builder.add_data_member("tail", TYPE_INT, u64::MAX - 1, Access::Public, false);
    assert_eq!(
        ctx.complete_class(builder),
        Err(TypeError::SizeOverflow(big))
    );
    assert!(!ctx.is_complete(big));
}

#[test]
fn rounding_past_address_space_overflows() {
    let mut ctx = TypeContext::default();
    let big = struct_named(&mut ctx, "Big");

    let mut builder = ctx.define_class(big).unwrap();
    builder.add_data_member("last", TYPE_CHAR, u64::MAX - 2, Access::Public, false);
    assert_eq!(
        ctx.complete_class(builder),
        Err(TypeError::SizeOverflow(big))
    );
}
