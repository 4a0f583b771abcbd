use super::*;

#[test]
fn header_roundtrip() {
    let header = Header::for_payload(b"payload");
    let decoded = Header::from_bytes(&header.to_bytes()).unwrap();

    assert_eq!(header, decoded);
    assert_eq!(decoded.magic, MAGIC);
    assert_eq!(decoded.version, VERSION);
    assert_eq!(decoded.payload_size, 7);
}

#[test]
fn short_input_is_truncated() {
    let err = Header::from_bytes(&[0u8; 4]).unwrap_err();
    assert!(matches!(
        err,
        ArchiveError::Truncated {
            expected: HEADER_SIZE,
            found: 4
        }
    ));
}

#[test]
fn validate_rejects_bad_magic() {
    let mut header = Header::for_payload(b"x");
    header.magic = *b"NOPE";

    let err = header.validate(b"x").unwrap_err();
    assert!(matches!(err, ArchiveError::BadMagic(m) if &m == b"NOPE"));
}

#[test]
fn validate_rejects_corrupted_payload() {
    let header = Header::for_payload(b"abc");

    let err = header.validate(b"abd").unwrap_err();
    assert!(matches!(err, ArchiveError::Checksum { .. }));
}

#[test]
fn validate_rejects_other_versions() {
    let mut header = Header::for_payload(b"");
    header.version = VERSION + 1;

    let err = header.validate(b"").unwrap_err();
    insta::assert_snapshot!(err, @"unsupported archive version 3 (expected 2)");
}
