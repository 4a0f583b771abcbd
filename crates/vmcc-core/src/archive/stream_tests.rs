use super::*;
use crate::{ContextKey, Interner};

#[test]
fn items_survive_encoding() {
    let mut interner = Interner::new();
    let key = interner.key_path(&["ns", "Foo"]);
    let kw = interner.intern("field");

    let mut out = OArchive::new();
    out.put_tag("Array")
        .put_u64(4)
        .put_i128(-7)
        .put_bool(true)
        .put_keyword(&interner, kw)
        .put_key(&interner, key);

    let bytes = out.finish();
    let mut input = IArchive::from_bytes(&bytes).unwrap();

    assert_eq!(input.remaining(), 6);
    assert_eq!(input.get_tag().unwrap(), "Array");
    assert_eq!(input.get_u32().unwrap(), 4);
    assert_eq!(input.get_i128().unwrap(), -7);
    assert!(input.get_bool().unwrap());
    assert_eq!(input.get_keyword(&mut interner).unwrap(), kw);
    assert_eq!(input.get_key(&mut interner).unwrap(), key);
    assert!(input.is_finished());
}

#[test]
fn keys_are_rebuilt_in_a_fresh_interner() {
    let mut source = Interner::new();
    source.intern("padding");
    let key = source.key_path(&["a", "b"]);

    let mut out = OArchive::new();
    out.put_key(&source, key);

    let mut target = Interner::new();
    let mut input = IArchive::from_bytes(&out.finish()).unwrap();
    let loaded = input.get_key(&mut target).unwrap();

    assert_eq!(target.display_key(loaded), "::a::b");
}

#[test]
fn root_key_is_empty_path() {
    let interner = Interner::new();
    let mut out = OArchive::new();
    out.put_key(&interner, ContextKey::ROOT);

    assert_eq!(out.items(), &[Item::Key(vec![])]);
}

#[test]
fn reading_wrong_item_kind_fails() {
    let mut input = IArchive::from_items(vec![Item::Bool(false)]);

    let err = input.get_tag().unwrap_err();
    insta::assert_snapshot!(err, @"expected tag item, found bool");
}

#[test]
fn reading_past_end_fails() {
    let mut input = IArchive::from_items(vec![]);

    let err = input.get_u64().unwrap_err();
    insta::assert_snapshot!(err, @"unexpected end of archive while reading unsigned");
}

#[test]
fn u32_range_is_checked() {
    let mut input = IArchive::from_items(vec![Item::Unsigned(u64::MAX)]);

    let err = input.get_u32().unwrap_err();
    assert!(matches!(err, ArchiveError::OutOfRange { target: "u32", .. }));
}

#[test]
fn corrupted_bytes_are_rejected() {
    let mut out = OArchive::new();
    out.put_str("hello");
    let mut bytes = out.finish();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;

    let err = IArchive::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ArchiveError::Checksum { .. }));
}
