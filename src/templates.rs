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

//! # Gridrow Templates Module
//!
//! Per-row metadata templating. Up to four reserved keys are attached to a
//! processed row for the frontend widget: a row identifier, a row CSS class,
//! a mapping of `data-*` attributes, and a mapping of custom HTML
//! attributes. Templates compile with escaping disabled against the row
//! state as it stood before any reserved key was added, so later slots never
//! observe earlier metadata.

use serde_json::Value;

use crate::content::GridContent;
use crate::errors::{GridError, Result};
use crate::record::GridObject;

/// Reserved key carrying the row identifier.
pub const DT_ROW_ID: &str = "DT_RowId";
/// Reserved key carrying the row CSS class.
pub const DT_ROW_CLASS: &str = "DT_RowClass";
/// Reserved key carrying custom data attributes.
pub const DT_ROW_DATA: &str = "DT_RowData";
/// Reserved key carrying custom HTML attributes.
pub const DT_ROW_ATTR: &str = "DT_RowAttr";

/// The reserved metadata keys, never escaped and never flattened away.
pub const RESERVED_KEYS: [&str; 4] = [DT_ROW_ID, DT_ROW_CLASS, DT_ROW_DATA, DT_ROW_ATTR];

/// Returns whether a field name is one of the reserved metadata keys.
pub fn is_reserved_key(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

/// Template slots for the four reserved per-row metadata keys.
///
/// Absent or empty slots produce no reserved key at all, not an empty
/// value. `row_data` and `row_attr` entries are ordered; each entry compiles
/// independently.
#[derive(Clone, Debug, Default)]
pub struct GridRowTemplates {
    /// Scalar template for `DT_RowId`.
    pub row_id: Option<GridContent>,
    /// Scalar template for `DT_RowClass`.
    pub row_class: Option<GridContent>,
    /// Attribute-name to content entries for `DT_RowData`.
    pub row_data: Vec<(String, GridContent)>,
    /// Attribute-name to content entries for `DT_RowAttr`.
    pub row_attr: Vec<(String, GridContent)>,
}

impl GridRowTemplates {
    /// Creates an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row identifier template.
    pub fn with_row_id(mut self, content: GridContent) -> Self {
        self.row_id = Some(content);
        self
    }

    /// Sets the row CSS class template.
    pub fn with_row_class(mut self, content: GridContent) -> Self {
        self.row_class = Some(content);
        self
    }

    /// Adds one `DT_RowData` attribute entry.
    pub fn with_row_data(mut self, name: impl Into<String>, content: GridContent) -> Self {
        self.row_data.push((name.into(), content));
        self
    }

    /// Adds one `DT_RowAttr` attribute entry.
    pub fn with_row_attr(mut self, name: impl Into<String>, content: GridContent) -> Self {
        self.row_attr.push((name.into(), content));
        self
    }

    /// Attaches the configured metadata keys to a processed row.
    ///
    /// Slots apply in the fixed order rowId, rowClass, rowData, rowAttr, all
    /// compiled against a snapshot of the row taken before any reserved key
    /// was inserted.
    pub fn apply(&self, row: &mut GridObject, record: &Value) -> Result<()> {
        let snapshot = row.clone();

        if let Some(content) = &self.row_id {
            let value = compile_slot(content, DT_ROW_ID, &snapshot, record)?;
            row.insert(DT_ROW_ID.to_string(), value);
        }

        if let Some(content) = &self.row_class {
            let value = compile_slot(content, DT_ROW_CLASS, &snapshot, record)?;
            row.insert(DT_ROW_CLASS.to_string(), value);
        }

        if let Some(mapping) = compile_mapping(&self.row_data, DT_ROW_DATA, &snapshot, record)? {
            row.insert(DT_ROW_DATA.to_string(), Value::Object(mapping));
        }

        if let Some(mapping) = compile_mapping(&self.row_attr, DT_ROW_ATTR, &snapshot, record)? {
            row.insert(DT_ROW_ATTR.to_string(), Value::Object(mapping));
        }

        Ok(())
    }
}

fn compile_slot(
    content: &GridContent,
    slot: &str,
    snapshot: &GridObject,
    record: &Value,
) -> Result<Value> {
    content
        .compile(snapshot, record, false)
        .map_err(|err| GridError::template(slot, err.to_string()))
}

fn compile_mapping(
    entries: &[(String, GridContent)],
    slot: &str,
    snapshot: &GridObject,
    record: &Value,
) -> Result<Option<GridObject>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut mapping = GridObject::new();
    for (name, content) in entries {
        let value = content
            .compile(snapshot, record, false)
            .map_err(|err| GridError::template(format!("{slot}.{name}"), err.to_string()))?;
        mapping.insert(name.clone(), value);
    }
    Ok(Some(mapping))
}
