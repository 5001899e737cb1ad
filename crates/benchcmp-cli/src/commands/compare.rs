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

//! Compare command - align two benchmark logs, report and save the result

use super::read_log;
use crate::error::CliError;
use benchcmp_core::{aggregate, parse, persist, render, LogFormat, SourceLabels, TimingTable};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Shape of the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Fixed-width table
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Everything one comparison run needs.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Log of the first source (ratio denominator)
    pub first_log: PathBuf,
    /// Log of the second source (ratio numerator)
    pub second_log: PathBuf,
    /// Line shapes accepted from the first log
    pub first_format: LogFormat,
    /// Line shapes accepted from the second log
    pub second_format: LogFormat,
    /// Source display names
    pub labels: SourceLabels,
    /// Where the CSV record goes
    pub output: PathBuf,
    /// Console report shape
    pub report: ReportFormat,
    /// Emit ANSI colors in the text report
    pub use_color: bool,
}

/// Compare two benchmark logs.
///
/// Both logs are read before anything is parsed, so an unreadable second
/// log fails the run without partial output. Empty timing tables produce a
/// warning line and the run continues.
///
/// In text mode everything goes to stdout. In JSON mode stdout carries only
/// the JSON document and the warning and saved-path lines go to stderr.
///
/// # Errors
///
/// Returns `Err` if either log cannot be read or the record cannot be written.
///
/// # Examples
///
/// ```no_run
/// use benchcmp_cli::commands::{compare, CompareOptions, ReportFormat};
/// use benchcmp_core::{LogFormat, SourceLabels, DEFAULT_OUTPUT_PATH};
///
/// # fn main() -> Result<(), benchcmp_cli::error::CliError> {
/// compare(&CompareOptions {
///     first_log: "columnar_bench.log".into(),
///     second_log: "output-duckdb/full_output.txt".into(),
///     first_format: LogFormat::Completed,
///     second_format: LogFormat::Auto,
///     labels: SourceLabels::default(),
///     output: DEFAULT_OUTPUT_PATH.into(),
///     report: ReportFormat::Text,
///     use_color: false,
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn compare(options: &CompareOptions) -> Result<(), CliError> {
    let first_text = read_log(&options.first_log)?;
    let second_text = read_log(&options.second_log)?;

    let first = parse(&first_text, options.first_format);
    let second = parse(&second_text, options.second_format);
    debug!(
        first = first.len(),
        second = second.len(),
        "parsed both logs"
    );

    warn_if_empty(&first, &options.labels.first, options);
    warn_if_empty(&second, &options.labels.second, options);

    let comparison = aggregate(&first, &second);

    match options.report {
        ReportFormat::Text => {
            println!();
            print!(
                "{}",
                render(
                    comparison.rows(),
                    comparison.summary(),
                    &options.labels,
                    options.use_color
                )
            );
        }
        ReportFormat::Json => {
            let document = serde_json::json!({
                "labels": &options.labels,
                "rows": comparison.rows(),
                "summary": comparison.summary(),
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    let saved = persist(comparison.rows(), &options.labels, &options.output)?;
    notice(options, &format!("\nCSV saved to: {}", saved.display()));

    Ok(())
}

fn warn_if_empty(table: &TimingTable, label: &str, options: &CompareOptions) {
    if !table.is_empty() {
        return;
    }
    let line = format!("Warning: No results parsed from {} log", label);
    if options.use_color {
        notice(options, &line.yellow().to_string());
    } else {
        notice(options, &line);
    }
}

fn notice(options: &CompareOptions, line: &str) {
    match options.report {
        ReportFormat::Text => println!("{}", line),
        ReportFormat::Json => eprintln!("{}", line),
    }
}
