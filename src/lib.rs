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

//! # Gridrow Core Library
//!
//! Gridrow transforms a result set that was already selected, filtered,
//! sorted, and paginated by an external query engine into JSON-ready rows
//! matching the contract of a server-side-processing grid widget.
//!
//! ## Module Overview
//!
//! - **record**: GridRecord and the canonical keyed row representation
//! - **path**: shared dotted-path get/set/remove/flatten utility
//! - **content**: column content specifications (literal, template, compute)
//! - **escape**: HTML escaping policy with raw-path exclusions
//! - **templates**: per-row metadata under the reserved `DT_Row*` keys
//! - **processor**: the fixed-order per-record transform pipeline
//! - **flatten**: keyed-to-positional row shaping
//! - **errors**: error types shared across the crate
//!
//! ## Quick Start
//!
//! ```rust
//! use gridrow::{GridColumn, GridColumnSet, GridContent, GridRecord,
//!     GridRowProcessor, GridRowShape, GridRowTemplates};
//! use serde_json::json;
//!
//! let records = vec![
//!     GridRecord::new(json!({"name": "aaa"})),
//!     GridRecord::new(json!({"name": "zzz"})),
//! ];
//!
//! let columns = GridColumnSet::new()
//!     .append(GridColumn::new("foo", GridContent::template("bar {{name}}")));
//!
//! let processor = GridRowProcessor::new(columns, GridRowTemplates::new(), 0);
//! let rows = processor.process(records, GridRowShape::Object).unwrap();
//! assert_eq!(rows[0], json!({"name": "aaa", "foo": "bar aaa"}));
//! ```
//!
//! ## Architecture
//!
//! Data flows one way: result set → row processor (content compilation,
//! escaping, metadata templating, excess removal in a fixed order) →
//! optional flattening → output rows. The pipeline is synchronous and
//! single-threaded; the only mutable state is a running index counter scoped
//! to one `process` call.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, GridError>`. A failure while processing
//! any record aborts the whole call; no partial output list is returned.

pub mod content;
pub mod errors;
pub mod escape;
pub mod flatten;
pub mod path;
pub mod processor;
pub mod record;
pub mod templates;

pub use content::{GridCompute, GridContent};
pub use errors::{GridError, Result};
pub use escape::{escape_html, GridEscapeMode};
pub use flatten::flatten_row;
pub use processor::{
    GridColumn, GridColumnSet, GridRowProcessor, GridRowShape, DEFAULT_INDEX_COLUMN,
};
pub use record::{GridObject, GridRecord, GridRecordBatch};
pub use templates::{
    GridRowTemplates, DT_ROW_ATTR, DT_ROW_CLASS, DT_ROW_DATA, DT_ROW_ID, RESERVED_KEYS,
};
