use super::*;

#[test]
fn integer_kinds() {
    assert!(TypeKind::Bool.is_integer());
    assert!(TypeKind::Char.is_integer());
    assert!(TypeKind::Integer.is_integer());
    assert!(TypeKind::Enum.is_integer());
    assert!(!TypeKind::Fixed.is_integer());
    assert!(!TypeKind::Float.is_integer());
}

#[test]
fn arithmetic_kinds() {
    assert!(TypeKind::Fixed.is_arithmetic());
    assert!(TypeKind::Float.is_arithmetic());
    assert!(TypeKind::Integer.is_arithmetic());
    assert!(!TypeKind::Pointer.is_arithmetic());
    assert!(!TypeKind::Str.is_arithmetic());
}

#[test]
fn scalar_kinds() {
    assert!(TypeKind::Pointer.is_scalar());
    assert!(TypeKind::NullPtr.is_scalar());
    assert!(TypeKind::MemberPointer.is_scalar());
    assert!(TypeKind::Str.is_scalar());
    assert!(!TypeKind::Struct.is_scalar());
    assert!(!TypeKind::Array.is_scalar());
    assert!(!TypeKind::Void.is_scalar());
}

#[test]
fn aggregate_kinds() {
    assert!(TypeKind::Array.is_aggregate());
    assert!(TypeKind::Struct.is_aggregate());
    assert!(TypeKind::Tuple.is_aggregate());
    assert!(!TypeKind::Union.is_aggregate());
    assert!(!TypeKind::Enum.is_aggregate());
}

#[test]
fn object_excludes_functions_and_references() {
    assert!(!TypeKind::Function.is_object());
    assert!(!TypeKind::MemberFunction.is_object());
    assert!(!TypeKind::LValueRef.is_object());
    assert!(!TypeKind::RValueRef.is_object());
    assert!(TypeKind::Void.is_object());
    assert!(TypeKind::Struct.is_object());
}

#[test]
fn sizeless_kinds() {
    assert!(!TypeKind::Void.has_size());
    assert!(!TypeKind::Label.has_size());
    assert!(!TypeKind::Function.has_size());
    assert!(TypeKind::Pointer.has_size());
}

#[test]
fn named_and_derived_are_disjoint() {
    let all = [
        TypeKind::Void,
        TypeKind::Label,
        TypeKind::Str,
        TypeKind::NullPtr,
        TypeKind::Bool,
        TypeKind::Char,
        TypeKind::Integer,
        TypeKind::Fixed,
        TypeKind::Float,
        TypeKind::Array,
        TypeKind::Bitfield,
        TypeKind::Pointer,
        TypeKind::LValueRef,
        TypeKind::RValueRef,
        TypeKind::Function,
        TypeKind::MemberFunction,
        TypeKind::MemberPointer,
        TypeKind::Tuple,
        TypeKind::Struct,
        TypeKind::Union,
        TypeKind::Enum,
    ];
    for kind in all {
        let families = [kind.is_basic(), kind.is_derived(), kind.is_named()];
        assert_eq!(
            families.iter().filter(|&&b| b).count(),
            1,
            "{} belongs to exactly one family",
            kind.name()
        );
    }
}
