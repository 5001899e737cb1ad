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

//! Per-source timing tables.

use std::collections::BTreeMap;

/// Integer identifying one benchmark query within a suite.
pub type QueryIndex = u64;

/// Sparse mapping from query index to measured latency in milliseconds.
///
/// A missing key means the query was not measured, which is distinct from
/// a recorded latency of zero. Tables are built once from an iterator of
/// `(index, millis)` pairs and are read-only afterwards. When the same
/// index appears more than once, the last pair wins.
///
/// # Examples
///
/// ```
/// use benchcmp_core::TimingTable;
///
/// let table: TimingTable = [(3, 12.0), (0, 5.0), (3, 9.0)].into_iter().collect();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(3), Some(9.0));
/// assert_eq!(table.indices().collect::<Vec<_>>(), vec![0, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingTable {
    entries: BTreeMap<QueryIndex, f64>,
}

impl TimingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latency recorded for `index`, if any.
    pub fn get(&self, index: QueryIndex) -> Option<f64> {
        self.entries.get(&index).copied()
    }

    /// Whether a measurement exists for `index`.
    pub fn contains(&self, index: QueryIndex) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of measured queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no query was measured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Measured query indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = QueryIndex> + '_ {
        self.entries.keys().copied()
    }

    /// `(index, millis)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (QueryIndex, f64)> + '_ {
        self.entries.iter().map(|(&q, &ms)| (q, ms))
    }
}

impl FromIterator<(QueryIndex, f64)> for TimingTable {
    fn from_iter<I: IntoIterator<Item = (QueryIndex, f64)>>(iter: I) -> Self {
        let mut entries = BTreeMap::new();
        for (index, millis) in iter {
            entries.insert(index, millis);
        }
        Self { entries }
    }
}
