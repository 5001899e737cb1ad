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

//! Log parsing: raw benchmark output to a [`TimingTable`].
//!
//! Two line shapes are recognized:
//!
//! - **Completed**: `Q<index> completed in <n> ms`, as printed by the
//!   engine's query runner. Every match anywhere in the text contributes
//!   an entry, and a later match for the same index replaces an earlier
//!   one, so concatenated runs report their final measurement.
//! - **Run time**: `Run Time (s): real <seconds>`, as printed by the DuckDB
//!   shell timer. These lines carry no query index; the Nth occurrence in
//!   the text is query N and seconds are converted to milliseconds.
//!
//! Parsing never fails. Lines that match neither shape, or whose numbers
//! do not fit, are skipped.

use crate::timing::{QueryIndex, TimingTable};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Which line shapes to accept for one log source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Only `Q<index> completed in <n> ms` lines.
    #[default]
    Completed,
    /// Only `Run Time (s): real <seconds>` lines.
    RunTime,
    /// `Completed` lines, falling back to `RunTime` lines when the text
    /// contains no `Completed` line at all.
    Auto,
}

impl LogFormat {
    /// Lowercase name used in diagnostics and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Completed => "completed",
            LogFormat::RunTime => "run-time",
            LogFormat::Auto => "auto",
        }
    }
}

fn completed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Q(\d+)\s+completed\s+in\s+(\d+)\s*ms").expect("completed pattern is valid")
    })
}

fn run_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Run Time \(s\): real (\d+(?:\.\d*)?|\.\d+)")
            .expect("run time pattern is valid")
    })
}

/// Parse a log into a timing table.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{parse, LogFormat};
///
/// let table = parse("Q0 completed in 100 ms\nQ1 completed in 200 ms", LogFormat::Completed);
/// assert_eq!(table.get(0), Some(100.0));
/// assert_eq!(table.get(1), Some(200.0));
///
/// let timer = parse("Run Time (s): real 0.250 user 0.2 sys 0.0", LogFormat::Auto);
/// assert_eq!(timer.get(0), Some(250.0));
/// ```
pub fn parse(log_text: &str, format: LogFormat) -> TimingTable {
    let table = match format {
        LogFormat::Completed => parse_completed(log_text),
        LogFormat::RunTime => parse_run_time(log_text),
        LogFormat::Auto => {
            let completed = parse_completed(log_text);
            if completed.is_empty() {
                debug!("no completed lines found, falling back to run time lines");
                parse_run_time(log_text)
            } else {
                completed
            }
        }
    };

    debug!(
        format = format.as_str(),
        entries = table.len(),
        "parsed timing table"
    );
    table
}

/// Collect every `Q<index> completed in <n> ms` match; last write wins.
pub fn parse_completed(log_text: &str) -> TimingTable {
    completed_pattern()
        .captures_iter(log_text)
        .filter_map(|caps| {
            let index = caps[1].parse::<QueryIndex>().ok()?;
            let millis = caps[2].parse::<u64>().ok()?;
            Some((index, millis as f64))
        })
        .collect()
}

/// Collect `Run Time (s): real <seconds>` lines in encounter order.
///
/// Values that overflow to infinity are skipped.
pub fn parse_run_time(log_text: &str) -> TimingTable {
    let durations_ms: Vec<f64> = run_time_pattern()
        .captures_iter(log_text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .map(|seconds| seconds * 1000.0)
        .filter(|millis| millis.is_finite())
        .collect();

    durations_ms
        .into_iter()
        .enumerate()
        .map(|(position, millis)| (position as QueryIndex, millis))
        .collect()
}
