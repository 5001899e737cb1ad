// Dweve benchcmp - Query Benchmark Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display names for the two compared sources.

use serde::Serialize;

/// Default name of the first source.
pub const DEFAULT_FIRST_LABEL: &str = "columnar-engine";

/// Default name of the second source.
pub const DEFAULT_SECOND_LABEL: &str = "DuckDB (1 thread)";

/// CSV column stem used while the first source keeps its default name.
pub const DEFAULT_FIRST_COLUMN: &str = "columnar_engine";

/// CSV column stem used while the second source keeps its default name.
pub const DEFAULT_SECOND_COLUMN: &str = "duckdb";

/// Names shown in the report title, the column headers and the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLabels {
    /// Name of the source whose timings form the ratio denominator.
    pub first: String,
    /// Name of the source whose timings form the ratio numerator.
    pub second: String,
}

impl SourceLabels {
    /// Create labels from two names.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// CSV column name for the first source.
    ///
    /// `columnar_engine_ms` for the default name, otherwise a slug of the
    /// label (`new-engine` becomes `new_engine_ms`).
    pub fn first_column(&self) -> String {
        column(&self.first, DEFAULT_FIRST_LABEL, DEFAULT_FIRST_COLUMN)
    }

    /// CSV column name for the second source.
    ///
    /// `duckdb_ms` for the default name, otherwise a slug of the label.
    pub fn second_column(&self) -> String {
        column(&self.second, DEFAULT_SECOND_LABEL, DEFAULT_SECOND_COLUMN)
    }
}

impl Default for SourceLabels {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_LABEL, DEFAULT_SECOND_LABEL)
    }
}

/// The persisted header stays fixed while a source keeps its default name.
fn column(label: &str, default_label: &str, default_column: &str) -> String {
    if label == default_label {
        format!("{}_ms", default_column)
    } else {
        format!("{}_ms", slug(label))
    }
}

/// Lowercase ASCII alphanumerics joined by single underscores.
fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_separator = false;

    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        out.push_str("source");
    }
    out
}
