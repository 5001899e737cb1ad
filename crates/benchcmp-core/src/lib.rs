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

//! Query benchmark log comparison.
//!
//! This crate turns the logs of two independently run query engines into
//! a side-by-side comparison:
//!
//! ```text
//! log text ──parse──▶ TimingTable ─┐
//!                                   ├─aggregate──▶ Comparison ──┬─render──▶ console table
//! log text ──parse──▶ TimingTable ─┘                           └─persist─▶ CSV record
//! ```
//!
//! # Recognized log lines
//!
//! - `Q<index> completed in <n> ms`: engine query runner output
//! - `Run Time (s): real <seconds>`: DuckDB shell `.timer on` output,
//!   indexed by order of appearance
//!
//! # Example
//!
//! ```
//! use benchcmp_core::{aggregate, parse, render, write_records, LogFormat, SourceLabels};
//!
//! let engine = parse("Q0 completed in 100 ms\nQ1 completed in 200 ms", LogFormat::Completed);
//! let duckdb = parse("Run Time (s): real 0.050\nRun Time (s): real 0.400", LogFormat::Auto);
//!
//! let comparison = aggregate(&engine, &duckdb);
//! let labels = SourceLabels::default();
//!
//! let report = render(comparison.rows(), comparison.summary(), &labels, false);
//! assert!(report.contains("TOTAL"));
//!
//! let mut csv = Vec::new();
//! write_records(comparison.rows(), &labels, &mut csv).unwrap();
//! ```

mod aggregate;
mod error;
mod labels;
mod parser;
mod persist;
mod render;
mod timing;

pub use aggregate::{aggregate, AggregateSummary, Comparison, ComparisonRow};
pub use error::{CompareError, Result};
pub use labels::{
    SourceLabels, DEFAULT_FIRST_COLUMN, DEFAULT_FIRST_LABEL, DEFAULT_SECOND_COLUMN,
    DEFAULT_SECOND_LABEL,
};
pub use parser::{parse, parse_completed, parse_run_time, LogFormat};
pub use persist::{persist, write_records, DEFAULT_OUTPUT_PATH};
pub use render::{format_millis, format_ratio, render, NOT_APPLICABLE, REPORT_WIDTH};
pub use timing::{QueryIndex, TimingTable};
