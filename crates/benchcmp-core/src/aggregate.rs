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

//! Alignment of two timing tables and relative performance statistics.
//!
//! Ratios are always `second / first`: a ratio above 1.0 means the first
//! source finished sooner. A row carries a ratio only when both sources
//! measured the query with a strictly positive latency, and exactly those
//! rows feed the summary. Rows measured by one side only remain visible
//! but never contribute to totals.

use crate::timing::{QueryIndex, TimingTable};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Both sources' measurements for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// Query index shared by both sources.
    pub query: QueryIndex,
    /// First source latency in milliseconds.
    pub first_ms: Option<f64>,
    /// Second source latency in milliseconds.
    pub second_ms: Option<f64>,
    /// `second_ms / first_ms` when both are present and positive.
    pub ratio: Option<f64>,
}

impl ComparisonRow {
    /// Build a row, deriving the ratio from the two measurements.
    pub fn new(query: QueryIndex, first_ms: Option<f64>, second_ms: Option<f64>) -> Self {
        let ratio = match (first_ms, second_ms) {
            (Some(first), Some(second)) if first > 0.0 && second > 0.0 => Some(second / first),
            _ => None,
        };
        Self {
            query,
            first_ms,
            second_ms,
            ratio,
        }
    }

    /// Display label, e.g. `Q7`.
    pub fn label(&self) -> String {
        format!("Q{}", self.query)
    }
}

/// Totals over the queries both sources measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Number of queries that contributed.
    pub query_count: usize,
    /// Sum of first source latencies over contributing queries.
    pub first_total_ms: f64,
    /// Sum of second source latencies over contributing queries.
    pub second_total_ms: f64,
    /// `second_total_ms / first_total_ms`.
    pub total_ratio: f64,
    /// `exp(mean(ln(ratio)))` over contributing queries.
    ///
    /// Each query weighs the same regardless of its duration, unlike
    /// `total_ratio` which is dominated by the slowest queries.
    pub geomean_ratio: f64,
}

impl AggregateSummary {
    /// Derive the summary from rows.
    ///
    /// Returns `None` when no row has a ratio, so callers omit the summary
    /// instead of reporting zero or infinity.
    pub fn from_rows(rows: &[ComparisonRow]) -> Option<Self> {
        let mut query_count = 0usize;
        let mut first_total_ms = 0.0;
        let mut second_total_ms = 0.0;
        let mut log_ratio_sum = 0.0;

        for row in rows {
            if let (Some(first), Some(second), Some(ratio)) = (row.first_ms, row.second_ms, row.ratio)
            {
                query_count += 1;
                first_total_ms += first;
                second_total_ms += second;
                log_ratio_sum += ratio.ln();
            }
        }

        if query_count == 0 || first_total_ms <= 0.0 || second_total_ms <= 0.0 {
            return None;
        }

        Some(Self {
            query_count,
            first_total_ms,
            second_total_ms,
            total_ratio: second_total_ms / first_total_ms,
            geomean_ratio: (log_ratio_sum / query_count as f64).exp(),
        })
    }
}

/// Aligned rows plus the derived summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    rows: Vec<ComparisonRow>,
    summary: Option<AggregateSummary>,
}

impl Comparison {
    /// Wrap rows, deriving their summary.
    pub fn from_rows(rows: Vec<ComparisonRow>) -> Self {
        let summary = AggregateSummary::from_rows(&rows);
        Self { rows, summary }
    }

    /// Rows in ascending query order.
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Summary, absent when no query was measured by both sources.
    pub fn summary(&self) -> Option<&AggregateSummary> {
        self.summary.as_ref()
    }
}

/// Align two tables by query index and compute comparison statistics.
///
/// Rows cover the union of both tables' indices in ascending order.
///
/// # Examples
///
/// ```
/// use benchcmp_core::{aggregate, parse, LogFormat};
///
/// let first = parse("Q0 completed in 100 ms\nQ1 completed in 200 ms", LogFormat::Completed);
/// let second = parse("Q0 completed in 50 ms\nQ1 completed in 400 ms", LogFormat::Auto);
/// let comparison = aggregate(&first, &second);
///
/// assert_eq!(comparison.rows()[0].ratio, Some(0.5));
/// assert_eq!(comparison.rows()[1].ratio, Some(2.0));
///
/// let summary = comparison.summary().unwrap();
/// assert!((summary.total_ratio - 1.5).abs() < 1e-12);
/// assert!((summary.geomean_ratio - 1.0).abs() < 1e-12);
/// ```
pub fn aggregate(first: &TimingTable, second: &TimingTable) -> Comparison {
    let queries: BTreeSet<QueryIndex> = first.indices().chain(second.indices()).collect();

    let rows: Vec<ComparisonRow> = queries
        .into_iter()
        .map(|q| ComparisonRow::new(q, first.get(q), second.get(q)))
        .collect();

    let comparison = Comparison::from_rows(rows);
    debug!(
        rows = comparison.rows().len(),
        included = comparison.summary().map_or(0, |s| s.query_count),
        "aggregated timing tables"
    );
    comparison
}
