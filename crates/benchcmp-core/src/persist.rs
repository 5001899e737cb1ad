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

//! CSV persistence of comparison rows.
//!
//! The record mirrors the console report: one line per row in the same
//! order, with empty fields wherever the report shows `N/A`.

use crate::aggregate::ComparisonRow;
use crate::error::{CompareError, Result};
use crate::labels::SourceLabels;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default record location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "benchmark-results/benchmark_comparison.csv";

/// Write rows to `destination`, replacing any previous record.
///
/// Missing parent directories are created first. Identical input always
/// produces a byte-identical file.
///
/// # Errors
///
/// Returns [`CompareError::Io`] with the destination path when the
/// directory or file cannot be created or written.
///
/// # Examples
///
/// ```no_run
/// use benchcmp_core::{aggregate, persist, SourceLabels, TimingTable, DEFAULT_OUTPUT_PATH};
/// use std::path::Path;
///
/// let first: TimingTable = [(0, 100.0)].into_iter().collect();
/// let second: TimingTable = [(0, 50.0)].into_iter().collect();
/// let comparison = aggregate(&first, &second);
///
/// persist(comparison.rows(), &SourceLabels::default(), Path::new(DEFAULT_OUTPUT_PATH)).unwrap();
/// ```
pub fn persist(
    rows: &[ComparisonRow],
    labels: &SourceLabels,
    destination: &Path,
) -> Result<PathBuf> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CompareError::io_error(parent, e))?;
        }
    }

    let file = File::create(destination).map_err(|e| CompareError::io_error(destination, e))?;
    write_records(rows, labels, file).map_err(|e| match e {
        CompareError::Csv(message) => CompareError::Io {
            path: destination.to_path_buf(),
            message,
        },
        other => other,
    })?;

    info!(path = %destination.display(), rows = rows.len(), "persisted comparison");
    Ok(destination.to_path_buf())
}

/// Write the header and one record per row to any writer.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{write_records, ComparisonRow, SourceLabels};
///
/// let rows = [
///     ComparisonRow::new(0, Some(100.0), Some(50.0)),
///     ComparisonRow::new(5, Some(40.0), None),
/// ];
/// let mut buffer = Vec::new();
/// write_records(&rows, &SourceLabels::default(), &mut buffer).unwrap();
///
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     "Query,columnar_engine_ms,duckdb_ms,ratio\nQ0,100.0,50.0,0.5\nQ5,40.0,,\n"
/// );
/// ```
pub fn write_records<W: Write>(
    rows: &[ComparisonRow],
    labels: &SourceLabels,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record([
        "Query".to_string(),
        labels.first_column(),
        labels.second_column(),
        "ratio".to_string(),
    ])
    .map_err(|e| CompareError::csv_error(format!("header: {}", e)))?;

    for row in rows {
        wtr.write_record([
            row.label(),
            number_field(row.first_ms),
            number_field(row.second_ms),
            number_field(row.ratio),
        ])
        .map_err(|e| CompareError::csv_error(format!("record {}: {}", row.label(), e)))?;
    }

    wtr.flush()
        .map_err(|e| CompareError::csv_error(format!("flush: {}", e)))?;
    Ok(())
}

/// Shortest round-trip decimal that keeps a fractional part (`100.0`),
/// or an empty field.
fn number_field(value: Option<f64>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}
