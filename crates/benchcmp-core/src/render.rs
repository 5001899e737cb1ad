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

//! Console report rendering.
//!
//! The report is a fixed-width table with one line per query and, when
//! both sources measured at least one query, `TOTAL` and `GEOMEAN` lines.
//! Ratio cells read from the first source's point of view: a ratio of
//! 2.0 renders as `2.00x faster`, a ratio of 0.5 as `2.00x slower`, so the
//! multiplier shown is never below 1.
//!
//! Color only wraps already padded text. Disabling it removes the escape
//! sequences and nothing else.

use crate::aggregate::{AggregateSummary, ComparisonRow};
use crate::labels::SourceLabels;
use colored::Colorize;

/// Width of the report rules.
pub const REPORT_WIDTH: usize = 80;

const LABEL_WIDTH: usize = 8;
const TIME_WIDTH: usize = 18;
const RATIO_WIDTH: usize = 20;

/// Marker for a missing measurement or an undefined ratio.
pub const NOT_APPLICABLE: &str = "N/A";

/// Render rows and summary as a text table.
///
/// # Arguments
///
/// * `rows` - Rows in ascending query order
/// * `summary` - Aggregate statistics; the summary lines are omitted when `None`
/// * `labels` - Source names for the title and column headers
/// * `use_color` - Wrap ratio cells in green (faster) or red (slower)
///
/// # Examples
///
/// ```
/// use benchcmp_core::{aggregate, render, SourceLabels, TimingTable};
///
/// let first: TimingTable = [(0, 100.0)].into_iter().collect();
/// let second: TimingTable = [(0, 300.0)].into_iter().collect();
/// let comparison = aggregate(&first, &second);
///
/// let text = render(comparison.rows(), comparison.summary(), &SourceLabels::default(), false);
/// assert!(text.contains("3.00x faster"));
/// assert!(text.contains("GEOMEAN"));
/// ```
pub fn render(
    rows: &[ComparisonRow],
    summary: Option<&AggregateSummary>,
    labels: &SourceLabels,
    use_color: bool,
) -> String {
    let heavy_rule = "=".repeat(REPORT_WIDTH);
    let light_rule = "-".repeat(REPORT_WIDTH);

    let mut lines = vec![
        heavy_rule.clone(),
        format!("BENCHMARK COMPARISON: {} vs {}", labels.first, labels.second),
        heavy_rule.clone(),
        format!(
            "{:<lw$} {:>tw$} {:>tw$} {:>rw$}",
            "Query",
            labels.first,
            labels.second,
            "Ratio",
            lw = LABEL_WIDTH,
            tw = TIME_WIDTH,
            rw = RATIO_WIDTH
        ),
        light_rule.clone(),
    ];

    for row in rows {
        lines.push(table_line(
            &row.label(),
            &format_millis(row.first_ms),
            &format_millis(row.second_ms),
            row.ratio,
            use_color,
        ));
    }

    lines.push(light_rule);

    if let Some(summary) = summary {
        lines.push(table_line(
            "TOTAL",
            &format_millis(Some(summary.first_total_ms)),
            &format_millis(Some(summary.second_total_ms)),
            Some(summary.total_ratio),
            use_color,
        ));
        lines.push(table_line(
            "GEOMEAN",
            "",
            "",
            Some(summary.geomean_ratio),
            use_color,
        ));
    }

    lines.push(heavy_rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Whole milliseconds, or `N/A`.
pub fn format_millis(millis: Option<f64>) -> String {
    match millis {
        Some(ms) => format!("{:.0} ms", ms),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Ratio text from the first source's point of view, or `N/A`.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r >= 1.0 => format!("{:.2}x faster", r),
        Some(r) => format!("{:.2}x slower", 1.0 / r),
        None => NOT_APPLICABLE.to_string(),
    }
}

fn table_line(label: &str, first: &str, second: &str, ratio: Option<f64>, use_color: bool) -> String {
    format!(
        "{:<lw$} {:>tw$} {:>tw$} {}",
        label,
        first,
        second,
        ratio_cell(ratio, use_color),
        lw = LABEL_WIDTH,
        tw = TIME_WIDTH
    )
}

fn ratio_cell(ratio: Option<f64>, use_color: bool) -> String {
    let text = format_ratio(ratio);
    let padding = " ".repeat(RATIO_WIDTH.saturating_sub(text.chars().count()));

    if !use_color {
        return format!("{}{}", padding, text);
    }

    match ratio {
        Some(r) if r >= 1.0 => format!("{}{}", padding, text.green()),
        Some(_) => format!("{}{}", padding, text.red()),
        None => format!("{}{}", padding, text),
    }
}
