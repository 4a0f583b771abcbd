use vmcc_core::{ContextKey, Interner};

use super::*;

#[test]
fn builders_set_single_flags() {
    let q = TypeQual::new().with_const().with_volatile();

    assert!(q.constant);
    assert!(q.volatile);
    assert!(!q.restrict);
    assert!(!q.atomic);
    assert!(q.space.is_generic());
    assert!(!q.is_empty());
    assert!(TypeQual::NONE.is_empty());
}

#[test]
fn union_keeps_non_generic_space() {
    let far = TypeQual::NONE.with_space(AddrSpace::new(AddrBase::Far));
    let merged = far.union(TypeQual::CONST);

    assert!(merged.constant);
    assert_eq!(merged.space.base, AddrBase::Far);
    assert_eq!(TypeQual::CONST.union(far).space.base, AddrBase::Far);
}

#[test]
fn subset_ignores_generic_space() {
    let cv = TypeQual::CONST.with_volatile();
    let far_cv = cv.with_space(AddrSpace::new(AddrBase::Far));

    assert!(TypeQual::CONST.is_subset_of(cv));
    assert!(!cv.is_subset_of(TypeQual::CONST));
    assert!(cv.is_subset_of(far_cv));
    assert!(!far_cv.is_subset_of(cv));
}

#[test]
fn declarable_spaces_carry_names() {
    let mut interner = Interner::new();
    let arr = interner.key_path(&["arr"]);

    assert_eq!(AddrSpace::new(AddrBase::ModArr).name, Some(ContextKey::ROOT));
    assert_eq!(AddrSpace::declared(AddrBase::HubArr, arr).name, Some(arr));
    assert_eq!(AddrSpace::declared(AddrBase::Loc, arr).name, None);
    assert_eq!(AddrSpace::new(AddrBase::Loc).name, None);
}

#[test]
fn category_partition() {
    let placeholders = AddrBase::ALL.iter().filter(|b| b.is_placeholder()).count();
    let declarable = AddrBase::ALL.iter().filter(|b| b.is_declarable()).count();

    assert_eq!(placeholders, 3);
    assert_eq!(declarable, 4);
    assert!(
        AddrBase::ALL
            .iter()
            .all(|b| !(b.is_placeholder() && b.is_declarable()))
    );
}

#[test]
fn tags_round_trip() {
    for base in AddrBase::ALL {
        assert_eq!(AddrBase::from_tag(base.tag()), Some(base));
    }
    assert_eq!(AddrBase::from_tag("nowhere"), None);
}
