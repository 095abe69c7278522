// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvValue, format_float};
use crate::core::cast::cast_str;
use crate::core::cast::serialized::SerializedObject;
use std::collections::BTreeMap;

#[test]
fn test_env_string_scalars() {
    assert_eq!(EnvValue::Null.to_env_string(), None);
    assert_eq!(EnvValue::Bool(true).to_env_string().as_deref(), Some("true"));
    assert_eq!(EnvValue::Bool(false).to_env_string().as_deref(), Some("false"));
    assert_eq!(EnvValue::Int(-12).to_env_string().as_deref(), Some("-12"));
    assert_eq!(EnvValue::from("a b").to_env_string().as_deref(), Some("a b"));
}

#[test]
fn test_format_float_keeps_a_decimal_point() {
    insta::assert_snapshot!(
        [3.0, 0.1, -2.5, 1e21, 1e-7, f64::NAN, f64::INFINITY]
            .map(format_float)
            .join(" "),
        @"3.0 0.1 -2.5 1.0e21 1.0e-7 NaN inf"
    );
}

#[test]
fn test_floats_read_back_as_floats() {
    for f in [3.0, 0.1, -2.5, 1e21, 1e-7, 1e16] {
        let text = EnvValue::Float(f).to_env_string().unwrap();
        assert_eq!(cast_str(&text), EnvValue::Float(f), "{text} should read back as {f}");
    }
}

#[test]
fn test_env_string_collections_are_json() {
    let list = EnvValue::from(vec![1, 2, 3]);
    assert_eq!(list.to_env_string().as_deref(), Some("[1,2,3]"));

    let mut map = BTreeMap::new();
    map.insert("b".to_string(), EnvValue::Bool(false));
    map.insert("a".to_string(), EnvValue::from("x"));
    assert_eq!(
        EnvValue::Map(map).to_env_string().as_deref(),
        Some(r#"{"a":"x","b":false}"#)
    );
}

#[test]
fn test_env_string_object_uses_legacy_format() {
    let value = EnvValue::from(SerializedObject::new("Foo").with_property("id", 7));
    insta::assert_snapshot!(value.to_env_string().unwrap(), @r#"O:3:"Foo":1:{s:2:"id";i:7;}"#);
}

#[test]
fn test_to_json_object_and_non_finite() {
    let value = EnvValue::List(vec![
        EnvValue::Float(f64::NAN),
        EnvValue::from(SerializedObject::new("Foo").with_property("id", 7)),
    ]);
    assert_eq!(value.to_json().to_string(), r#"[null,{"id":7}]"#);
}

#[test]
fn test_from_json_numbers() {
    let value = EnvValue::from(serde_json::json!([1, 2.5, 18_446_744_073_709_551_615_u64]));
    let items = value.as_list().unwrap();
    assert_eq!(items[0], EnvValue::Int(1));
    assert_eq!(items[1], EnvValue::Float(2.5));
    assert!(matches!(items[2], EnvValue::Float(_)));
}

#[test]
fn test_accessors() {
    assert_eq!(EnvValue::Int(4).as_f64(), Some(4.0));
    assert_eq!(EnvValue::Float(0.5).as_i64(), None);
    assert_eq!(EnvValue::from("x").as_str(), Some("x"));
    assert_eq!(EnvValue::from(None::<i64>), EnvValue::Null);
    assert_eq!(EnvValue::from(Some(true)).as_bool(), Some(true));
    assert!(EnvValue::default().is_null());
    assert_eq!(EnvValue::from(vec!["a"]).type_name(), "list");
}

#[test]
fn test_serialize_matches_json() {
    let value = EnvValue::from(vec![EnvValue::Null, EnvValue::from("s")]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"[null,"s"]"#);
}
