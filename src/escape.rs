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

//! # Gridrow Escape Module
//!
//! HTML escaping of row values for safe embedding in markup. The escaping
//! policy is either disabled, applied to every string leaf of the row, or
//! applied to a declared set of field paths. Raw paths are exempt in every
//! mode: raw always wins.
//!
//! Escaping is not idempotent (a second pass re-encodes entities), so the
//! row processor applies it exactly once per record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::path::{dot_flatten, get_path, set_path};
use crate::record::GridObject;

/// Which fields of a row are subject to HTML escaping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GridEscapeMode {
    /// No escaping is applied.
    None,
    /// Every string leaf is escaped, except raw paths.
    All,
    /// Exactly these field paths are escaped, minus raw paths.
    Columns(Vec<String>),
}

impl Default for GridEscapeMode {
    fn default() -> Self {
        Self::None
    }
}

/// HTML-entity-encodes the characters unsafe for embedding in markup.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Applies the configured escaping policy to a row in place.
///
/// Only string leaves are rewritten; numbers, booleans, nulls, and arrays
/// pass through untouched. Paths listed in `raw` are skipped regardless of
/// mode or membership in the escape set.
pub fn escape_row(row: &mut GridObject, mode: &GridEscapeMode, raw: &[String]) -> Result<()> {
    match mode {
        GridEscapeMode::None => {}
        GridEscapeMode::All => {
            for (path, value) in dot_flatten(row) {
                if raw.iter().any(|r| r == &path) {
                    continue;
                }
                if let Value::String(text) = value {
                    set_path(row, &path, Value::String(escape_html(&text)))?;
                }
            }
        }
        GridEscapeMode::Columns(columns) => {
            for path in columns {
                if raw.iter().any(|r| r == path) {
                    continue;
                }
                let escaped = match get_path(row, path) {
                    Some(Value::String(text)) => Value::String(escape_html(text)),
                    _ => continue,
                };
                set_path(row, path, escaped)?;
            }
        }
    }
    Ok(())
}
