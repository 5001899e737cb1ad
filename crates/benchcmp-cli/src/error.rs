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

//! Structured error types for the benchcmp CLI.
//!
//! Only two situations end a run with a non-zero status: an input log that
//! cannot be read, and a result that cannot be written. Empty or partial
//! timing data is reported as a warning and never reaches this type.

use benchcmp_core::CompareError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed after input errors.
pub const USAGE: &str = "Usage: benchcmp [OPTIONS] <FIRST_LOG> <SECOND_LOG>";

/// The main error type for benchcmp CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchcmp_cli::error::CliError;
///
/// fn read_log(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::input_unreadable(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// An input log could not be opened or read.
    #[error("Cannot read log '{path}': {message}")]
    InputUnreadable {
        /// The log path
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// An input log exceeds the configured size limit.
    #[error("Log '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The log path
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// The comparison record could not be written.
    #[error("Failed to save results: {0}")]
    Output(#[from] CompareError),

    /// The JSON report could not be serialized.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an input error with path context.
    pub fn input_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use benchcmp_cli::error::CliError;
    ///
    /// const MAX_SIZE: u64 = 100 * 1024 * 1024;
    /// let err = CliError::file_too_large("huge.log", 200_000_000, MAX_SIZE);
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Whether the error concerns the inputs, in which case a usage hint
    /// is printed along with it.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputUnreadable { .. } | Self::FileTooLarge { .. })
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
