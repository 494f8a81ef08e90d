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

//! # Gridrow Flatten Module
//!
//! Converts a keyed row into the positional shape consumed by array-mode
//! grid widgets. Data values contribute to a positional sequence in the
//! row's current key order, discarding their names; the reserved metadata
//! keys stay addressable by name and never enter the sequence.

use serde_json::Value;

use crate::record::GridObject;
use crate::templates::is_reserved_key;

/// Flattens a keyed row into its positional wire shape.
///
/// Without reserved metadata keys the result is a plain JSON array. With
/// them, the result is an object whose positional values sit under `"0"`,
/// `"1"`, ... alongside the reserved keys, which is the shape the widget
/// expects for mixed positional/named rows.
pub fn flatten_row(row: GridObject) -> Value {
    let has_meta = row.keys().any(|key| is_reserved_key(key));

    if !has_meta {
        return Value::Array(row.into_iter().map(|(_, value)| value).collect());
    }

    let mut out = GridObject::new();
    let mut position = 0usize;
    for (key, value) in row {
        if is_reserved_key(&key) {
            out.insert(key, value);
        } else {
            out.insert(position.to_string(), value);
            position += 1;
        }
    }
    Value::Object(out)
}
