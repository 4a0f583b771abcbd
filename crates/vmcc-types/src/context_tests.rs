use vmcc_core::ContextKey;

use super::*;
use crate::basic::{FixedType, FloatForm, FloatSize, FloatType, IntType};

#[test]
fn basic_types_have_fixed_ids() {
    let ctx = TypeContext::default();

    assert_eq!(ctx.shape(TYPE_VOID), &TypeShape::Basic(BasicType::Void));
    assert_eq!(
        ctx.shape(TYPE_INT),
        &TypeShape::Basic(BasicType::Int(IntType::INT))
    );
    for basic in BasicType::all() {
        assert_eq!(ctx.shape(TypeId::basic(basic)).as_basic(), Some(basic));
    }
    assert_eq!(ctx.type_count(), BasicType::COUNT);
    assert_eq!(ctx.param_set_count(), 1);
}

#[test]
fn qualification_is_idempotent() {
    let mut ctx = TypeContext::default();
    let q = TypeQual::CONST.with_volatile();

    let cv = ctx.get_qual_type(TYPE_INT, q);
    assert_eq!(ctx.get_qual_type(cv, q), cv);
    assert_eq!(ctx.get_qual_type(TYPE_INT, q), cv);
    assert_eq!(ctx.get_qual_type(cv, TypeQual::NONE), TYPE_INT);
    assert_eq!(ctx.unqualified(cv), TYPE_INT);
    assert_eq!(ctx.qual(cv), q);
    assert_eq!(ctx.shape(cv), ctx.shape(TYPE_INT));
}

#[test]
fn qualified_variants_are_reachable_from_any_sibling() {
    let mut ctx = TypeContext::default();

    let c = ctx.get_qual_type(TYPE_INT, TypeQual::CONST);
    let v = ctx.get_qual_type(TYPE_INT, TypeQual::VOLATILE);
    let cv = ctx.get_qual_type(c, TypeQual::CONST.with_volatile());

    let from_c: Vec<_> = ctx.qual_variants(c).collect();
    let from_v: Vec<_> = ctx.qual_variants(v).collect();
    assert_eq!(from_c, vec![TYPE_INT, c, v, cv]);
    assert_eq!(from_c, from_v);
}

#[test]
fn add_qual_merges() {
    let mut ctx = TypeContext::default();

    let c = ctx.get_qual_type(TYPE_INT, TypeQual::CONST);
    let cv = ctx.add_qual(c, TypeQual::VOLATILE);

    assert!(ctx.qual(cv).constant);
    assert!(ctx.qual(cv).volatile);
    assert_eq!(ctx.add_qual(cv, TypeQual::CONST), cv);
}

#[test]
fn qualified_derived_types_are_distinct() {
    let mut ctx = TypeContext::default();

    let ptr = ctx.get_pointer_type(TYPE_INT);
    let const_ptr = ctx.get_qual_type(ptr, TypeQual::CONST);
    let const_int = ctx.get_qual_type(TYPE_INT, TypeQual::CONST);
    let ptr_to_const = ctx.get_pointer_type(const_int);

    assert_ne!(const_ptr, ptr_to_const);
    assert_eq!(ctx.base_type(const_ptr).unwrap(), TYPE_INT);
    assert_eq!(ctx.base_type(ptr_to_const).unwrap(), const_int);
}

#[test]
fn base_type_per_kind() {
    let mut ctx = TypeContext::default();

    let arr = ctx.get_array_type(TYPE_CHAR, 4);
    let bits = ctx.get_bitfield_type(TYPE_UINT, 3, 0);
    let func = ctx.get_function_type(TYPE_LONG, ParamSetId::EMPTY, CallConv::LangC);
    let sat = TypeId::basic(BasicType::Fixed(FixedType::ACCUM.with_saturation(true)));
    let cdouble = TypeId::basic(BasicType::Float(FloatType::new(
        FloatForm::Complex,
        FloatSize::Double,
    )));

    assert_eq!(ctx.base_type(arr), Ok(TYPE_CHAR));
    assert_eq!(ctx.base_type(bits), Ok(TYPE_UINT));
    assert_eq!(ctx.base_type(func), Ok(TYPE_LONG));
    assert_eq!(ctx.base_type(sat), Ok(TYPE_FIXED));
    assert_eq!(ctx.base_type(cdouble), Ok(TYPE_DOUBLE));
    assert_eq!(ctx.base_type(TYPE_INT), Err(TypeError::NoBaseType(TYPE_INT)));
    assert_eq!(ctx.base_type(TYPE_FIXED), Err(TypeError::NoBaseType(TYPE_FIXED)));
}

#[test]
fn enum_base_requires_completion() {
    let mut ctx = TypeContext::default();
    let name = ctx.interner_mut().key_path(&["Mode"]);
    let mode = ctx.get_enum_type(name);

    assert_eq!(ctx.base_type(mode), Err(TypeError::Incomplete(mode)));

    let builder = ctx.define_enum(mode).unwrap();
    ctx.complete_enum(builder, TYPE_UINT).unwrap();
    assert_eq!(ctx.base_type(mode), Ok(TYPE_UINT));
}

#[test]
fn target_switch_applies_to_later_queries() {
    let mut ctx = TypeContext::new(Config::new().target(TargetProfile::Narrow));
    assert_eq!(ctx.target(), TargetProfile::Narrow);
    assert_eq!(ctx.size_bytes(TYPE_INT), Ok(1));

    ctx.set_target(TargetProfile::Wide);
    assert_eq!(ctx.size_bytes(TYPE_INT), Ok(4));
    assert_eq!(ctx.config().target_profile(), TargetProfile::Wide);
}

#[test]
fn iter_types_covers_arena() {
    let mut ctx = TypeContext::default();
    let name = ctx.interner_mut().key_str(ContextKey::ROOT, "Foo");
    let foo = ctx.get_struct_type(name);

    let all: Vec<_> = ctx.iter_types().collect();
    assert_eq!(all.len(), ctx.type_count());
    assert_eq!(all.last(), Some(&foo));
}

#[test]
#[should_panic(expected = "type #9999 not found")]
fn foreign_type_id_panics() {
    let ctx = TypeContext::default();
    ctx.shape(TypeId::from_raw(9999));
}
