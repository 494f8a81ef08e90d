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

//! # Gridrow Record Module
//!
//! This module provides the core data structures for representing individual
//! input records. GridRecord is the fundamental unit of data that flows
//! through the row transformation pipeline.
//!
//! ## Design Principles
//!
//! - **Flexibility**: Records wrap JSON (serde_json::Value), so both plain
//!   mappings and serialized entities share one canonical representation
//! - **Read-only**: A record is never mutated by the pipeline; every
//!   transform works on the normalized copy returned by `to_object`
//! - **Normalization up front**: Shape polymorphism (mapping vs structured
//!   entity) is resolved once at the record boundary, not branched on
//!   throughout the pipeline
//!
//! ## Usage Example
//!
//! ```rust
//! use gridrow::record::GridRecord;
//! use serde_json::json;
//!
//! // A mapping-like record
//! let record = GridRecord::new(json!({"name": "aaa", "id": 7}));
//!
//! // A structured entity; any Serialize type normalizes the same way
//! #[derive(serde::Serialize)]
//! struct User { name: String, id: u32 }
//! let record = GridRecord::from_entity(&User { name: "aaa".into(), id: 7 }).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{GridError, Result};

/// Canonical keyed row representation.
///
/// With serde_json's `preserve_order` feature this map iterates in insertion
/// order, which the append/edit ordering and the flattener depend on.
pub type GridObject = Map<String, Value>;

/// One input item from an already-filtered, sorted, and paginated result set.
///
/// The wrapped source value is read-only from the pipeline's perspective.
/// Mapping-like records carry a `Value::Object`; structured entities are
/// converted through serde via [`GridRecord::from_entity`], so the rest of
/// the pipeline only ever sees one canonical shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridRecord {
    /// Source data for the row, prior to any transformation.
    pub source: Value,
}

impl GridRecord {
    /// Constructs a record from an already-JSON source value.
    pub fn new(source: Value) -> Self {
        GridRecord { source }
    }

    /// Constructs a record from any serializable entity.
    ///
    /// This is the capability abstraction for structured entities with
    /// named fields: serde converts the entity's accessible field set into
    /// the same JSON shape a plain mapping would have.
    pub fn from_entity<T: Serialize>(entity: &T) -> Result<Self> {
        Ok(GridRecord {
            source: serde_json::to_value(entity)?,
        })
    }

    /// Normalizes the record into the canonical keyed structure.
    ///
    /// Returns a fresh copy; the record itself is never mutated.
    pub fn to_object(&self) -> Result<GridObject> {
        match &self.source {
            Value::Object(map) => Ok(map.clone()),
            other => Err(GridError::validation(format!(
                "record must normalize to an object, got {}",
                value_kind(other)
            ))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convenience alias for working on batches of records.
pub type GridRecordBatch = Vec<GridRecord>;
