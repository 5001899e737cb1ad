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

//! CLI command implementations

mod compare;

pub use compare::{compare, CompareOptions, ReportFormat};

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Default maximum log size (1 GB)
/// Can be overridden via BENCHCMP_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum log size from environment or use default.
fn get_max_file_size() -> u64 {
    std::env::var("BENCHCMP_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a log file from disk with size validation.
///
/// The size is checked from metadata before any bytes are read. Invalid
/// UTF-8 sequences are replaced rather than rejected, since log output
/// may contain arbitrary bytes outside the timing lines.
///
/// # Errors
///
/// Returns [`CliError::InputUnreadable`] when the file cannot be opened or
/// read, and [`CliError::FileTooLarge`] when it exceeds the limit set by
/// `BENCHCMP_MAX_FILE_SIZE`.
///
/// # Examples
///
/// ```no_run
/// use benchcmp_cli::commands::read_log;
/// use std::path::Path;
///
/// # fn main() -> Result<(), benchcmp_cli::error::CliError> {
/// let content = read_log(Path::new("columnar_bench.log"))?;
/// # Ok(())
/// # }
/// ```
pub fn read_log(path: &Path) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::input_unreadable(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::input_unreadable(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
