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

//! # Gridrow Content Module
//!
//! A column's declared content specification and its compilation against a
//! row. Content comes in three forms, each with its own rule:
//!
//! - **Literal**: a fixed value, returned unchanged and never escaped —
//!   literals are trusted
//! - **Compute**: a callback over `(row, record)`, returned unescaped; the
//!   caller owns the value's safety, and a callback error aborts the whole
//!   processing pass
//! - **Template**: a string with `{{path}}` placeholders resolved by
//!   nested-path lookup against the row; unresolved placeholders become the
//!   empty string, and the interpolated result is HTML-escaped when the
//!   column's effective escape policy says so

use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde_json::Value;

use crate::errors::Result;
use crate::escape::escape_html;
use crate::path::get_path;
use crate::record::GridObject;

/// Callback signature for computed column content.
///
/// Receives the row as transformed so far and the normalized original
/// record. `Send + Sync` so column sets can be shared across threads.
pub type GridCompute = Arc<dyn Fn(&GridObject, &Value) -> Result<Value> + Send + Sync>;

/// A column's declared rule for producing a value.
#[derive(Clone)]
pub enum GridContent {
    /// Fixed value emitted as-is for every row.
    Literal(Value),
    /// Placeholder-interpolated string resolved against the row.
    Template(String),
    /// Callback over `(row, record)`.
    Compute(GridCompute),
}

impl GridContent {
    /// Convenience constructor for literal content.
    pub fn literal(value: impl Into<Value>) -> Self {
        GridContent::Literal(value.into())
    }

    /// Convenience constructor for template content.
    pub fn template(template: impl Into<String>) -> Self {
        GridContent::Template(template.into())
    }

    /// Convenience constructor for computed content.
    pub fn compute<F>(callback: F) -> Self
    where
        F: Fn(&GridObject, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        GridContent::Compute(Arc::new(callback))
    }

    /// Resolves the content specification against one row.
    ///
    /// `data` is the row as transformed so far, `record` the normalized
    /// original. `escape` only affects the Template case: the interpolated
    /// result string is HTML-escaped after substitution.
    pub fn compile(&self, data: &GridObject, record: &Value, escape: bool) -> Result<Value> {
        match self {
            GridContent::Literal(value) => Ok(value.clone()),
            GridContent::Compute(callback) => callback(data, record),
            GridContent::Template(template) => {
                let rendered = interpolate(template, data);
                let rendered = if escape {
                    escape_html(&rendered)
                } else {
                    rendered
                };
                Ok(Value::String(rendered))
            }
        }
    }
}

impl fmt::Debug for GridContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridContent::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            GridContent::Template(template) => f.debug_tuple("Template").field(template).finish(),
            GridContent::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}\}")
            .expect("placeholder pattern is valid")
    })
}

fn interpolate(template: &str, data: &GridObject) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            get_path(data, &caps[1]).map(render_value).unwrap_or_default()
        })
        .into_owned()
}

/// Renders a looked-up value into its placeholder substitution.
///
/// Strings substitute verbatim; null renders empty; every other value uses
/// its compact JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
