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

//! Error types for result persistence.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing a comparison record.
///
/// Parsing and aggregation never fail: unmatched text yields an empty
/// table and missing measurements yield `N/A` cells. Only the persister
/// can fail.
///
/// # Examples
///
/// ```
/// use benchcmp_core::CompareError;
/// use std::io;
///
/// let err = CompareError::io_error(
///     "results/out.csv",
///     io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
/// );
/// assert!(err.to_string().contains("results/out.csv"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Creating the destination directory or file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The CSV writer rejected a record or failed to flush.
    #[error("CSV write error: {0}")]
    Csv(String),
}

impl CompareError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a CSV error.
    pub fn csv_error(message: impl Into<String>) -> Self {
        Self::Csv(message.into())
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, CompareError>;
