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

//! benchcmp CLI library for argument parsing and command execution.
//!
//! The binary compares two benchmark logs:
//!
//! ```bash
//! benchcmp columnar_bench.log output-duckdb/full_output.txt
//! ```
//!
//! It prints a per-query table with TOTAL and GEOMEAN lines and writes the
//! same rows to `benchmark-results/benchmark_comparison.csv`.
//!
//! # Configuration
//!
//! - Command-line flags, see [`cli::Cli`]
//! - `BENCHCMP_MAX_FILE_SIZE`: maximum input log size in bytes
//! - `NO_COLOR`: disable colored output
//! - `RUST_LOG`: diagnostic logging on stderr
//!
//! # Exit status
//!
//! Zero whenever both logs were read and the record was written, even if
//! one log held no timings. Non-zero when a log cannot be read, the
//! record cannot be written, or required arguments are missing.

pub mod cli;
pub mod commands;
pub mod error;
