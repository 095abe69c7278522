// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the value caster.

use super::serialized::SerializedObject;
use super::{cast_str, cast_value};
use crate::core::value::EnvValue;
use std::collections::BTreeMap;

#[test]
fn test_cast_null_and_bool_any_case() {
    assert_eq!(cast_str("null"), EnvValue::Null);
    assert_eq!(cast_str("NULL"), EnvValue::Null);
    assert_eq!(cast_str("true"), EnvValue::Bool(true));
    assert_eq!(cast_str("True"), EnvValue::Bool(true));
    assert_eq!(cast_str("FALSE"), EnvValue::Bool(false));
    // Only exact words match
    assert_eq!(cast_str(" true"), EnvValue::from(" true"));
    assert_eq!(cast_str("yes"), EnvValue::from("yes"));
}

#[test]
fn test_cast_integers() {
    assert_eq!(cast_str("3"), EnvValue::Int(3));
    assert_eq!(cast_str("-42"), EnvValue::Int(-42));
    assert_eq!(cast_str("+7"), EnvValue::Int(7));
    assert_eq!(cast_str("007"), EnvValue::Int(7));
    assert_eq!(cast_str(" 12 "), EnvValue::Int(12));
    assert_eq!(cast_str("1e3"), EnvValue::Int(1000));
}

#[test]
#[allow(clippy::approx_constant)]
fn test_cast_floats() {
    assert_eq!(cast_str("3.14"), EnvValue::Float(3.14));
    assert_eq!(cast_str("-0.5"), EnvValue::Float(-0.5));
    assert_eq!(cast_str(".5"), EnvValue::Float(0.5));
    assert_eq!(cast_str("5."), EnvValue::Float(5.0));
    assert_eq!(cast_str("2.5e3"), EnvValue::Float(2500.0));
    assert_eq!(cast_str("1e-3"), EnvValue::Float(0.001));
    assert_eq!(
        cast_str("99999999999999999999"),
        EnvValue::Float(99_999_999_999_999_999_999.0)
    );
}

#[test]
fn test_cast_non_numeric_strings() {
    for raw in ["", ".", "-", "1e", "1.2.3", "0x1A", "12abc", "inf", "NaN", "1_000"] {
        assert_eq!(cast_str(raw), EnvValue::from(raw), "{raw:?} should stay text");
    }
}

#[test]
fn test_cast_json_structures() {
    assert_eq!(
        cast_str("[1, \"two\", true]"),
        EnvValue::List(vec![
            EnvValue::Int(1),
            EnvValue::from("two"),
            EnvValue::Bool(true),
        ])
    );

    let mut expected = BTreeMap::new();
    expected.insert("host".to_string(), EnvValue::from("localhost"));
    expected.insert("port".to_string(), EnvValue::Int(5432));
    assert_eq!(
        cast_str(r#"{"host": "localhost", "port": 5432}"#),
        EnvValue::Map(expected)
    );
}

#[test]
fn test_cast_json_nested_strings_are_not_cast() {
    let value = cast_str(r#"["true", "42"]"#);
    assert_eq!(
        value,
        EnvValue::List(vec![EnvValue::from("true"), EnvValue::from("42")])
    );
}

#[test]
fn test_cast_json_falsy_and_invalid_stay_text() {
    for raw in ["[]", "{}", "[1, 2", "{not json}", "\"quoted\""] {
        assert_eq!(cast_str(raw), EnvValue::from(raw), "{raw:?} should stay text");
    }
}

#[test]
fn test_cast_serialized_object() {
    let raw = r#"O:8:"stdClass":2:{s:4:"name";s:5:"Alice";s:3:"age";i:30;}"#;
    let value = cast_str(raw);

    let object = value.as_object().expect("should decode an object");
    assert_eq!(object.class(), "stdClass");
    assert_eq!(object.property("name"), Some(&EnvValue::from("Alice")));
    assert_eq!(object.property("age"), Some(&EnvValue::Int(30)));
}

#[test]
fn test_cast_serialized_malformed_stays_text() {
    // Matches the pattern but the declared lengths are wrong
    let raw = r#"O:3:"stdClass":1:{s:4:"name";s:5:"Alice";}"#;
    assert_eq!(cast_str(raw), EnvValue::from(raw));
}

#[test]
fn test_cast_value_passes_typed_values_through() {
    let inputs = vec![
        EnvValue::Null,
        EnvValue::Bool(false),
        EnvValue::Int(0),
        EnvValue::Float(1.5),
        EnvValue::List(vec![EnvValue::from("null")]),
        EnvValue::Object(SerializedObject::new("Foo")),
    ];
    for input in inputs {
        assert_eq!(cast_value(input.clone()), input);
    }
}

#[test]
fn test_cast_value_casts_strings() {
    assert_eq!(cast_value(EnvValue::from("42")), EnvValue::Int(42));
    assert_eq!(cast_value(EnvValue::from("plain")), EnvValue::from("plain"));
}

#[test]
fn test_cast_is_idempotent() {
    let inputs = [
        "null",
        "TRUE",
        "3",
        "3.14",
        "1e3",
        "[1,2]",
        r#"{"a":{"b":[1]}}"#,
        "[]",
        r#"O:3:"Foo":1:{s:1:"x";b:1;}"#,
        "hello world",
        "",
    ];
    for raw in inputs {
        let once = cast_value(EnvValue::from(raw));
        let twice = cast_value(once.clone());
        assert_eq!(once, twice, "casting {raw:?} twice changed the result");
    }
}

// =============================================================================
// Legacy object codec
// =============================================================================

#[test]
fn test_serialized_matches_pattern() {
    assert!(SerializedObject::matches(r#"O:3:"Foo":0:{}"#));
    assert!(SerializedObject::matches(r#"O:8:"App\User":0:{}"#));
    assert!(!SerializedObject::matches(r#"a:1:{i:0;s:1:"x";}"#));
    assert!(!SerializedObject::matches("O:3:Foo:0:{}"));
}

#[test]
fn test_serialized_decode_all_scalar_kinds() {
    let raw = concat!(
        r#"O:4:"Conf":6:{"#,
        r#"s:1:"n";N;"#,
        r#"s:1:"b";b:1;"#,
        r#"s:1:"i";i:-3;"#,
        r#"s:1:"d";d:0.25;"#,
        r#"s:1:"s";s:6:"héllo";"#,
        r#"s:1:"f";d:INF;"#,
        "}"
    );
    let object = SerializedObject::decode(raw).expect("should decode");

    assert_eq!(object.property("n"), Some(&EnvValue::Null));
    assert_eq!(object.property("b"), Some(&EnvValue::Bool(true)));
    assert_eq!(object.property("i"), Some(&EnvValue::Int(-3)));
    assert_eq!(object.property("d"), Some(&EnvValue::Float(0.25)));
    assert_eq!(object.property("s"), Some(&EnvValue::from("héllo")));
    assert_eq!(object.property("f"), Some(&EnvValue::Float(f64::INFINITY)));
}

#[test]
fn test_serialized_decode_arrays_and_nested_objects() {
    let raw = concat!(
        r#"O:4:"Repo":3:{"#,
        r#"s:4:"tags";a:2:{i:0;s:1:"a";i:1;s:1:"b";}"#,
        r#"s:4:"opts";a:1:{s:5:"depth";i:1;}"#,
        r#"s:5:"owner";O:4:"User":1:{s:4:"name";s:3:"bob";}"#,
        "}"
    );
    let object = SerializedObject::decode(raw).expect("should decode");

    assert_eq!(
        object.property("tags"),
        Some(&EnvValue::List(vec![EnvValue::from("a"), EnvValue::from("b")]))
    );
    let opts = object.property("opts").and_then(EnvValue::as_map).unwrap();
    assert_eq!(opts.get("depth"), Some(&EnvValue::Int(1)));

    let owner = object.property("owner").and_then(EnvValue::as_object).unwrap();
    assert_eq!(owner.class(), "User");
    assert_eq!(owner.property("name"), Some(&EnvValue::from("bob")));
}

#[test]
fn test_serialized_decode_rejects_unsupported_and_trailing() {
    assert!(SerializedObject::decode(r#"O:3:"Foo":1:{s:1:"r";r:1;}"#).is_none());
    assert!(SerializedObject::decode(r#"O:3:"Foo":0:{}extra"#).is_none());
    assert!(SerializedObject::decode(r#"O:3:"Foo":2:{s:1:"x";i:1;}"#).is_none());
    assert!(SerializedObject::decode(r#"O:0:"":0:{}"#).is_none());
}

#[test]
fn test_serialized_encode_reproduces_input() {
    let raw = r#"O:4:"User":3:{s:4:"name";s:5:"Alice";s:5:"admin";b:0;s:6:"groups";a:2:{i:0;s:3:"dev";i:1;s:3:"ops";}}"#;
    let object = SerializedObject::decode(raw).expect("should decode");
    assert_eq!(object.encode(), raw);
}

#[test]
fn test_serialized_encode_built_object() {
    let object = SerializedObject::new("Point")
        .with_property("x", 1.5)
        .with_property("y", -2)
        .with_property("x", 2.0);
    insta::assert_snapshot!(object.encode(), @r#"O:5:"Point":2:{s:1:"x";d:2.0;s:1:"y";i:-2;}"#);
}

#[test]
fn test_serialized_multiline_property_is_an_object() {
    let object = SerializedObject::new("Note").with_property("body", "line1\nline2");
    let raw = object.encode();

    assert!(SerializedObject::matches(&raw));
    assert_eq!(cast_str(&raw), EnvValue::Object(object));
}

#[test]
fn test_serialized_map_with_numeric_keys_stays_a_map() {
    let map = BTreeMap::from([
        ("0".to_string(), EnvValue::Int(1)),
        ("1".to_string(), EnvValue::Int(2)),
    ]);
    let object = SerializedObject::new("Ids").with_property("by_id", EnvValue::Map(map.clone()));
    let raw = object.encode();

    insta::assert_snapshot!(raw, @r#"O:3:"Ids":1:{s:5:"by_id";a:2:{s:1:"0";i:1;s:1:"1";i:2;}}"#);
    let decoded = SerializedObject::decode(&raw).expect("should decode");
    assert_eq!(decoded.property("by_id"), Some(&EnvValue::Map(map)));
}
