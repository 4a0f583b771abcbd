use indoc::indoc;

use super::*;

#[test]
fn default_is_wide() {
    assert_eq!(Config::new().target_profile(), TargetProfile::Wide);
}

#[test]
fn builder_sets_target() {
    let config = Config::new().target(TargetProfile::Narrow);
    assert_eq!(config.target_profile(), TargetProfile::Narrow);
}

#[test]
fn parses_json_fragment() {
    let json = indoc! {r#"
        {
            "target": "narrow"
        }
    "#};

    let config = Config::from_json(json).unwrap();
    assert_eq!(config.target_profile(), TargetProfile::Narrow);
}

#[test]
fn missing_fields_take_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_profile_is_rejected() {
    assert!(Config::from_json(r#"{"target": "huge"}"#).is_err());
}

#[test]
fn json_roundtrip() {
    let config = Config::new().target(TargetProfile::Narrow);
    insta::assert_snapshot!(config.to_json(), @r#"{"target":"narrow"}"#);
    assert_eq!(Config::from_json(&config.to_json()).unwrap(), config);
}

#[test]
fn wide_rounding_is_word_granular() {
    let wide = TargetProfile::Wide;
    assert_eq!(wide.round_bytes(1), Some(4));
    assert_eq!(wide.round_bytes(8), Some(8));
    assert_eq!(wide.round_bytes(9), Some(12));
    assert_eq!(wide.bytes_to_words(9), 3);
    assert_eq!(wide.scalar_align(8), 4);
    assert_eq!(wide.scalar_align(2), 2);
    assert_eq!(wide.round_bytes(u64::MAX - 1), None);
}

#[test]
fn narrow_rounding_is_identity() {
    let narrow = TargetProfile::Narrow;
    assert_eq!(narrow.round_bytes(3), Some(3));
    assert_eq!(narrow.bytes_to_words(3), 3);
    assert_eq!(narrow.bytes_to_point(3), 3);
    assert_eq!(narrow.scalar_align(2), 1);
}
