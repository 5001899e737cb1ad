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

//! Command-line argument definitions.

use crate::commands::{self, CompareOptions, ReportFormat};
use crate::error::CliError;
use benchcmp_core::{
    LogFormat, SourceLabels, DEFAULT_FIRST_LABEL, DEFAULT_OUTPUT_PATH, DEFAULT_SECOND_LABEL,
};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Compare query timings from two benchmark logs
///
/// Reads a columnar-engine log and a DuckDB log, prints a per-query
/// comparison with totals and the geometric mean of the ratios, and saves
/// the same comparison as CSV.
///
/// # Examples
///
/// ```bash
/// # Compare an engine run with a DuckDB timer log
/// benchcmp columnar_bench.log output-duckdb/full_output.txt
///
/// # Save elsewhere and print JSON
/// benchcmp a.log b.log --output results/cmp.csv --format json
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchcmp")]
#[command(author, version, about = "Compare query timings from two benchmark logs", long_about = None)]
pub struct Cli {
    /// Log of the first source (e.g. columnar-engine output)
    #[arg(value_name = "FIRST_LOG")]
    pub first_log: PathBuf,

    /// Log of the second source (e.g. DuckDB output)
    #[arg(value_name = "SECOND_LOG")]
    pub second_log: PathBuf,

    /// CSV output path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Display name of the first source
    #[arg(long, default_value = DEFAULT_FIRST_LABEL)]
    pub first_label: String,

    /// Display name of the second source
    #[arg(long, default_value = DEFAULT_SECOND_LABEL)]
    pub second_label: String,

    /// Timing lines to accept from the first log
    #[arg(long, value_enum, default_value_t = LogFormatArg::Completed)]
    pub first_format: LogFormatArg,

    /// Timing lines to accept from the second log
    #[arg(long, value_enum, default_value_t = LogFormatArg::Auto)]
    pub second_format: LogFormatArg,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormatArg::Text)]
    pub format: ReportFormatArg,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Log line shapes selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// `Q<n> completed in <ms> ms` lines
    Completed,
    /// `Run Time (s): real <seconds>` lines, numbered by position
    RunTime,
    /// `completed` lines, or `run-time` lines when there are none
    Auto,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Completed => LogFormat::Completed,
            LogFormatArg::RunTime => LogFormat::RunTime,
            LogFormatArg::Auto => LogFormat::Auto,
        }
    }
}

/// Report formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    /// Fixed-width table
    Text,
    /// JSON document
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Resolve arguments into run options.
    ///
    /// Color is enabled only for text reports on a terminal, without
    /// `--no-color` and without the `NO_COLOR` environment variable.
    pub fn options(&self) -> CompareOptions {
        let report = ReportFormat::from(self.format);
        let use_color = !self.no_color
            && report == ReportFormat::Text
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        CompareOptions {
            first_log: self.first_log.clone(),
            second_log: self.second_log.clone(),
            first_format: self.first_format.into(),
            second_format: self.second_format.into(),
            labels: SourceLabels::new(&self.first_label, &self.second_label),
            output: self.output.clone(),
            report,
            use_color,
        }
    }

    /// Execute the comparison.
    pub fn execute(&self) -> Result<(), CliError> {
        let options = self.options();
        colored::control::set_override(options.use_color);
        commands::compare(&options)
    }
}
