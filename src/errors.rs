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

//! # Gridrow Error Module
//!
//! This module defines the error types used throughout Gridrow for
//! consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! - **Explicit Error Types**: Each variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors carry the column name or field path that
//!   triggered them to aid debugging
//! - **All-or-nothing**: A failure during row processing aborts the whole
//!   `process` call; no partial output list is ever returned
//! - **Serde Support**: Errors can be serialized for logging and transport
//!
//! ## Error Categories
//!
//! - **Validation**: Malformed column definitions or non-object records
//! - **Template**: A computed content specification failed during evaluation
//! - **Path**: A nested field path could not be written
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Gridrow.
pub type Result<T> = std::result::Result<T, GridError>;

/// Canonical error enumeration for Gridrow.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum GridError {
    /// Validation errors triggered by invalid configuration or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised while compiling a column's content.
    #[error("template '{name}' failed: {message}")]
    Template { name: String, message: String },

    /// A nested field path could not be materialized for writing.
    #[error("path error at '{path}': {message}")]
    Path { path: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Serde(err.to_string())
    }
}

impl GridError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        GridError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct template errors.
    pub fn template(name: impl Into<String>, message: impl Into<String>) -> Self {
        GridError::Template {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct path errors.
    pub fn path(path: impl Into<String>, message: impl Into<String>) -> Self {
        GridError::Path {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        GridError::Internal(message.into())
    }
}
