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

//! # Gridrow Path Module
//!
//! Dotted-path access into nested row objects. This single utility backs the
//! escaper (leaf flattening and reconstitution), the edit step (nested
//! assignment), and template placeholder resolution, so all of them agree on
//! path semantics:
//!
//! - Reads through unsupported structure resolve to nothing, never fail
//! - Writes create intermediate objects on demand, but fail when a path
//!   segment lands on a scalar or array that cannot hold children
//! - Flattening recurses into objects only; arrays are treated as leaves

use serde_json::Value;

use crate::errors::{GridError, Result};
use crate::record::GridObject;

/// Resolves a dotted path against a row object.
///
/// Returns `None` when any segment is missing or traverses a non-object.
pub fn get_path<'a>(row: &'a GridObject, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = row.get(first)?;
    for segment in segments {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Assigns a value at a dotted path, creating intermediate objects as needed.
///
/// Missing or null intermediates are materialized as empty objects. A
/// segment that lands on a scalar or array is a hard failure: the target
/// cannot be materialized without destroying caller data.
pub fn set_path(row: &mut GridObject, path: &str, value: Value) -> Result<()> {
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| GridError::path(path, "empty path"))?;

    let mut current = row;
    for segment in parents {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(GridObject::new()));
        if entry.is_null() {
            *entry = Value::Object(GridObject::new());
        }
        current = match entry {
            Value::Object(map) => map,
            _ => {
                return Err(GridError::path(
                    path,
                    format!("segment '{segment}' is not an object"),
                ))
            }
        };
    }

    current.insert(last.to_string(), value);
    Ok(())
}

/// Removes the value at a dotted path, if present.
pub fn remove_path(row: &mut GridObject, path: &str) -> Option<Value> {
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments.split_last()?;

    let mut current = row;
    for segment in parents {
        current = match current.get_mut(*segment) {
            Some(Value::Object(map)) => map,
            _ => return None,
        };
    }

    current.remove(*last)
}

/// Flattens a row object into dotted leaf paths.
///
/// Nested objects contribute one entry per leaf; every other value type
/// (including arrays) is itself a leaf. Entries come back in the row's
/// iteration order, so reconstituting them with [`set_path`] preserves the
/// original key order.
pub fn dot_flatten(row: &GridObject) -> Vec<(String, Value)> {
    let mut leaves = Vec::new();
    collect_leaves(row, "", &mut leaves);
    leaves
}

fn collect_leaves(obj: &GridObject, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(nested) if !nested.is_empty() => collect_leaves(nested, &path, out),
            _ => out.push((path, value.clone())),
        }
    }
}
