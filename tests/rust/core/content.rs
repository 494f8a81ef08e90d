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

use gridrow::content::GridContent;
use gridrow::errors::GridError;
use gridrow::record::GridObject;
use serde_json::{json, Value};

fn row(value: Value) -> GridObject {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fixture must be an object"),
    }
}

#[test]
fn literal_is_returned_unchanged() {
    let data = row(json!({}));
    let content = GridContent::literal(json!({"nested": [1, 2]}));
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!({"nested": [1, 2]}));
}

#[test]
fn literal_is_never_escaped() {
    let data = row(json!({}));
    let content = GridContent::literal("<b>trusted</b>");
    let value = content.compile(&data, &Value::Null, true).unwrap();
    assert_eq!(value, json!("<b>trusted</b>"));
}

#[test]
fn compute_receives_row_and_original_record() {
    let data = row(json!({"name": "aaa"}));
    let record = json!({"name": "aaa", "hidden": 42});

    let content = GridContent::compute(|data, record| {
        let name = data.get("name").cloned().unwrap_or_default();
        let hidden = record.get("hidden").cloned().unwrap_or_default();
        Ok(json!({"name": name, "hidden": hidden}))
    });

    let value = content.compile(&data, &record, false).unwrap();
    assert_eq!(value, json!({"name": "aaa", "hidden": 42}));
}

#[test]
fn compute_result_is_not_escaped() {
    let data = row(json!({}));
    let content = GridContent::compute(|_, _| Ok(json!("<i>html</i>")));
    let value = content.compile(&data, &Value::Null, true).unwrap();
    assert_eq!(value, json!("<i>html</i>"));
}

#[test]
fn compute_errors_propagate() {
    let data = row(json!({}));
    let content =
        GridContent::compute(|_, _| Err(GridError::internal("callback blew up")));
    let err = content.compile(&data, &Value::Null, false).unwrap_err();
    assert!(matches!(err, GridError::Internal(_)));
}

#[test]
fn template_interpolates_row_fields() {
    let data = row(json!({"name": "aaa"}));
    let content = GridContent::template("bar {{name}}");
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!("bar aaa"));
}

#[test]
fn template_resolves_nested_paths() {
    let data = row(json!({"user": {"address": {"city": "Oslo"}}}));
    let content = GridContent::template("lives in {{user.address.city}}");
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!("lives in Oslo"));
}

#[test]
fn template_allows_spaces_inside_braces() {
    let data = row(json!({"id": 7}));
    let content = GridContent::template("row_{{ id }}");
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!("row_7"));
}

#[test]
fn template_unresolved_placeholder_becomes_empty() {
    let data = row(json!({"name": "aaa"}));
    let content = GridContent::template("[{{missing}}] {{name}}");
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!("[] aaa"));
}

#[test]
fn template_renders_non_string_values() {
    let data = row(json!({"id": 7, "active": true, "tags": ["x", "y"]}));
    let content = GridContent::template("{{id}}/{{active}}/{{tags}}");
    let value = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(value, json!("7/true/[\"x\",\"y\"]"));
}

#[test]
fn template_escapes_interpolated_result_when_requested() {
    let data = row(json!({"name": "<b>x</b>"}));
    let content = GridContent::template("hi {{name}}");

    let escaped = content.compile(&data, &Value::Null, true).unwrap();
    assert_eq!(escaped, json!("hi &lt;b&gt;x&lt;/b&gt;"));

    let raw = content.compile(&data, &Value::Null, false).unwrap();
    assert_eq!(raw, json!("hi <b>x</b>"));
}
