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

//! # Gridrow Processor Module
//!
//! The row transformation orchestrator. For each record of an
//! already-filtered, sorted, and paginated result set, the processor applies
//! a fixed sequence of transforms:
//!
//! 1. Normalize the record to a keyed object
//! 2. Apply the escaping policy to the original fields
//! 3. Append declared columns, in declaration order
//! 4. Inject the running row index, when enabled
//! 5. Apply edit columns, creating nested structure as needed
//! 6. Attach row metadata under the reserved `DT_Row*` keys
//! 7. Remove excess columns
//! 8. Shape the row as a keyed object or flatten it positionally
//!
//! A compile failure anywhere aborts the whole `process` call; no partial
//! output is returned. The running index counter is local to one call, so a
//! processor can serve sequential calls but not concurrent ones with a
//! shared counter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::GridContent;
use crate::errors::{GridError, Result};
use crate::escape::{escape_row, GridEscapeMode};
use crate::flatten::flatten_row;
use crate::path::set_path;
use crate::record::{GridObject, GridRecord, GridRecordBatch};
use crate::templates::{is_reserved_key, GridRowTemplates};

/// Default name of the injected running-index field.
pub const DEFAULT_INDEX_COLUMN: &str = "DT_Row_Index";

/// One append or edit directive: a target column and its content rule.
#[derive(Clone, Debug)]
pub struct GridColumn {
    /// Column name; edit directives may target a nested dotted path.
    pub name: String,
    /// Content specification producing the column's value.
    pub content: GridContent,
    /// Output-escape flag. Raw paths bypass escaping regardless.
    pub escape: bool,
}

impl GridColumn {
    /// Creates a column directive with escaping enabled.
    pub fn new(name: impl Into<String>, content: GridContent) -> Self {
        GridColumn {
            name: name.into(),
            content,
            escape: true,
        }
    }

    /// Overrides the column's output-escape flag.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

/// Per-column directives recognized by the processor.
#[derive(Clone, Debug)]
pub struct GridColumnSet {
    /// Columns added to every row, in declaration order.
    pub append: Vec<GridColumn>,
    /// Overrides applied to existing or just-appended fields, in order.
    pub edit: Vec<GridColumn>,
    /// Top-level field names removed after all other transforms.
    pub excess: Vec<String>,
    /// Escaping policy for the original record fields.
    pub escape: GridEscapeMode,
    /// Field paths exempt from escaping; raw always wins.
    pub raw: Vec<String>,
    /// Whether to inject the 1-based running row index.
    pub index: bool,
    /// Name of the injected index field.
    pub index_column: String,
}

impl Default for GridColumnSet {
    fn default() -> Self {
        GridColumnSet {
            append: Vec::new(),
            edit: Vec::new(),
            excess: Vec::new(),
            escape: GridEscapeMode::None,
            raw: Vec::new(),
            index: false,
            index_column: DEFAULT_INDEX_COLUMN.to_string(),
        }
    }
}

impl GridColumnSet {
    /// Creates an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an append directive.
    pub fn append(mut self, column: GridColumn) -> Self {
        self.append.push(column);
        self
    }

    /// Adds an edit directive.
    pub fn edit(mut self, column: GridColumn) -> Self {
        self.edit.push(column);
        self
    }

    /// Adds an excess column name.
    pub fn excess(mut self, name: impl Into<String>) -> Self {
        self.excess.push(name.into());
        self
    }

    /// Sets the escaping policy.
    pub fn escape(mut self, mode: GridEscapeMode) -> Self {
        self.escape = mode;
        self
    }

    /// Adds a raw field path.
    pub fn raw(mut self, path: impl Into<String>) -> Self {
        self.raw.push(path.into());
        self
    }

    /// Enables row-index injection.
    pub fn with_index(mut self) -> Self {
        self.index = true;
        self
    }

    /// Overrides the index field name.
    pub fn index_column(mut self, name: impl Into<String>) -> Self {
        self.index_column = name.into();
        self
    }

    /// Ensures the column definitions are well formed.
    pub fn validate(&self) -> Result<()> {
        for column in self.append.iter().chain(self.edit.iter()) {
            if column.name.is_empty() {
                return Err(GridError::validation("column name must not be empty"));
            }
            if is_reserved_key(&column.name) {
                return Err(GridError::validation(format!(
                    "column '{}' collides with a reserved metadata key",
                    column.name
                )));
            }
        }
        if self.index_column.is_empty() {
            return Err(GridError::validation("index column name must not be empty"));
        }
        Ok(())
    }

    fn is_raw(&self, name: &str) -> bool {
        self.raw.iter().any(|path| path == name)
    }
}

/// Requested output shape for processed rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridRowShape {
    /// Keyed object per row.
    Object,
    /// Positional sequence per row, reserved keys kept by name.
    Array,
}

/// Transforms result-set records into JSON-ready grid rows.
///
/// Configuration is immutable after construction. One instance may serve
/// sequential `process` calls; each call owns its own index counter seeded
/// from the start offset supplied here.
#[derive(Clone, Debug)]
pub struct GridRowProcessor {
    columns: GridColumnSet,
    templates: GridRowTemplates,
    start: u64,
}

impl GridRowProcessor {
    /// Creates a processor over the given directives and metadata templates.
    ///
    /// `start` is the pagination offset of the first record; with index
    /// injection enabled the first row receives `start + 1`.
    pub fn new(columns: GridColumnSet, templates: GridRowTemplates, start: u64) -> Self {
        GridRowProcessor {
            columns,
            templates,
            start,
        }
    }

    /// Runs the full pipeline over a result set.
    ///
    /// Either every record transforms successfully or the first failure is
    /// returned and the output list is discarded.
    pub fn process(&self, batch: GridRecordBatch, shape: GridRowShape) -> Result<Vec<Value>> {
        self.columns.validate()?;

        log::debug!(
            "processing {} record(s): append={}, edit={}, excess={}, index={}, shape={:?}",
            batch.len(),
            self.columns.append.len(),
            self.columns.edit.len(),
            self.columns.excess.len(),
            self.columns.index,
            shape
        );

        let mut counter = self.start;
        let mut output = Vec::with_capacity(batch.len());
        for record in batch {
            let row = self.process_record(record, &mut counter)?;
            output.push(match shape {
                GridRowShape::Object => Value::Object(row),
                GridRowShape::Array => flatten_row(row),
            });
        }
        Ok(output)
    }

    fn process_record(&self, record: GridRecord, counter: &mut u64) -> Result<GridObject> {
        let mut row = record.to_object()?;

        // Only original fields are subject to the configured policy;
        // appended and edited columns carry their own escape flag.
        escape_row(&mut row, &self.columns.escape, &self.columns.raw)?;

        for column in &self.columns.append {
            let escape = column.escape && !self.columns.is_raw(&column.name);
            let value = column
                .content
                .compile(&row, &record.source, escape)
                .map_err(|err| GridError::template(&*column.name, err.to_string()))?;
            row.insert(column.name.clone(), value);
        }

        if self.columns.index {
            *counter += 1;
            row.insert(self.columns.index_column.clone(), Value::from(*counter));
        }

        for column in &self.columns.edit {
            let escape = column.escape && !self.columns.is_raw(&column.name);
            let value = column
                .content
                .compile(&row, &record.source, escape)
                .map_err(|err| GridError::template(&*column.name, err.to_string()))?;
            set_path(&mut row, &column.name, value)?;
        }

        self.templates.apply(&mut row, &record.source)?;

        for name in &self.columns.excess {
            // Excess only ever targets data fields.
            if is_reserved_key(name) {
                continue;
            }
            row.remove(name);
        }

        Ok(row)
    }
}
