//! Copyright © 2025-2026 The Gridrow Authors. All Rights Reserved.
//!
//! This file is part of Gridrow.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use gridrow::errors::GridError;
use gridrow::path::{dot_flatten, get_path, remove_path, set_path};
use gridrow::record::GridObject;
use serde_json::{json, Value};

fn row(value: Value) -> GridObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fixture must be an object"),
    }
}

#[test]
fn get_path_resolves_nested_fields() {
    let row = row(json!({"user": {"address": {"city": "Oslo"}}}));
    assert_eq!(get_path(&row, "user.address.city"), Some(&json!("Oslo")));
    assert_eq!(get_path(&row, "user.address"), Some(&json!({"city": "Oslo"})));
}

#[test]
fn get_path_resolves_empty_on_missing_or_scalar_traversal() {
    let row = row(json!({"user": {"name": "aaa"}}));
    assert_eq!(get_path(&row, "user.missing"), None);
    assert_eq!(get_path(&row, "user.name.deeper"), None);
    assert_eq!(get_path(&row, "ghost"), None);
}

#[test]
fn set_path_creates_intermediate_objects() {
    let mut row = row(json!({}));
    set_path(&mut row, "user.address.city", json!("Oslo")).unwrap();
    assert_eq!(
        Value::Object(row),
        json!({"user": {"address": {"city": "Oslo"}}})
    );
}

#[test]
fn set_path_overwrites_existing_values() {
    let mut row = row(json!({"user": {"name": "aaa"}}));
    set_path(&mut row, "user.name", json!("bbb")).unwrap();
    assert_eq!(get_path(&row, "user.name"), Some(&json!("bbb")));
}

#[test]
fn set_path_materializes_null_intermediates() {
    let mut row = row(json!({"user": null}));
    set_path(&mut row, "user.name", json!("aaa")).unwrap();
    assert_eq!(get_path(&row, "user.name"), Some(&json!("aaa")));
}

#[test]
fn set_path_fails_on_scalar_intermediate() {
    let mut row = row(json!({"user": "aaa"}));
    let err = set_path(&mut row, "user.name", json!("bbb")).unwrap_err();
    assert!(matches!(err, GridError::Path { .. }));
    // The scalar is left intact.
    assert_eq!(get_path(&row, "user"), Some(&json!("aaa")));
}

#[test]
fn remove_path_deletes_nested_fields() {
    let mut row = row(json!({"user": {"name": "aaa", "id": 7}}));
    assert_eq!(remove_path(&mut row, "user.name"), Some(json!("aaa")));
    assert_eq!(Value::Object(row), json!({"user": {"id": 7}}));
}

#[test]
fn remove_path_is_noop_on_missing_target() {
    let mut row = row(json!({"user": {"id": 7}}));
    assert_eq!(remove_path(&mut row, "user.name"), None);
    assert_eq!(remove_path(&mut row, "other.name"), None);
}

#[test]
fn dot_flatten_emits_leaves_in_key_order() {
    let row = row(json!({
        "name": "aaa",
        "user": {"id": 7, "tags": ["x", "y"]},
        "active": true
    }));

    let leaves = dot_flatten(&row);
    assert_eq!(
        leaves,
        vec![
            ("name".to_string(), json!("aaa")),
            ("user.id".to_string(), json!(7)),
            ("user.tags".to_string(), json!(["x", "y"])),
            ("active".to_string(), json!(true)),
        ]
    );
}

#[test]
fn dot_flatten_treats_empty_objects_as_leaves() {
    let row = row(json!({"meta": {}}));
    assert_eq!(dot_flatten(&row), vec![("meta".to_string(), json!({}))]);
}

#[test]
fn dot_flatten_roundtrips_through_set_path() {
    let original = row(json!({"a": {"b": 1, "c": {"d": "x"}}, "e": null}));

    let mut rebuilt = original.clone();
    for (path, value) in dot_flatten(&original) {
        set_path(&mut rebuilt, &path, value).unwrap();
    }
    assert_eq!(rebuilt, original);
}
