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

//! End-to-end tests for the benchcmp binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Test helper to create a benchcmp command
fn benchcmp_cmd() -> Command {
    Command::cargo_bin("benchcmp").expect("Failed to find benchcmp binary")
}

// Test helper to write a log into a temp directory
fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write log file");
    path
}

fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join("out").join("cmp.csv")
}

fn run(first: &Path, second: &Path, output: &Path) -> assert_cmd::assert::Assert {
    benchcmp_cmd()
        .arg(first)
        .arg(second)
        .arg("--output")
        .arg(output)
        .assert()
}

const ENGINE_LOG: &str = "Q0 completed in 100 ms\nQ1 completed in 200 ms\n";
const DUCKDB_LOG: &str = "Q0 completed in 50 ms\nQ1 completed in 400 ms\n";

// ===== Help and Usage Tests =====

#[test]
fn test_help_output() {
    benchcmp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare query timings"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    benchcmp_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchcmp"));
}

#[test]
fn test_no_arguments_fails_with_usage() {
    benchcmp_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_single_argument_fails_with_usage() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);

    benchcmp_cmd()
        .arg(&first)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));

    assert!(!dir.path().join("benchmark-results").exists());
}

// ===== Comparison Tests =====

#[test]
fn test_compare_two_completed_logs() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    run(&first, &second, &output)
        .success()
        .stdout(predicate::str::contains(
            "BENCHMARK COMPARISON: columnar-engine vs DuckDB (1 thread)",
        ))
        .stdout(predicate::str::contains("2.00x slower"))
        .stdout(predicate::str::contains("2.00x faster"))
        .stdout(predicate::str::contains(
            "TOTAL                300 ms             450 ms         1.50x faster",
        ))
        .stdout(predicate::str::contains("GEOMEAN"))
        .stdout(predicate::str::contains("1.00x faster"))
        .stdout(predicate::str::contains("CSV saved to:"))
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("Warning").not());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Query,columnar_engine_ms,duckdb_ms,ratio\nQ0,100.0,50.0,0.5\nQ1,200.0,400.0,2.0\n"
    );
}

#[test]
fn test_duckdb_timer_fallback() {
    let dir = TempDir::new().unwrap();
    let first = write_log(
        &dir,
        "engine.log",
        "Q0 completed in 500 ms\nQ1 completed in 125 ms\nQ2 completed in 250 ms\n",
    );
    let second = write_log(
        &dir,
        "full_output.txt",
        "Run Time (s): real 0.250 user 0.2 sys 0.0\n\
         Run Time (s): real 0.250 user 0.2 sys 0.0\n\
         Run Time (s): real 0.250 user 0.2 sys 0.0\n",
    );
    let output = output_path(&dir);

    run(&first, &second, &output)
        .success()
        .stdout(predicate::str::contains("250 ms"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Query,columnar_engine_ms,duckdb_ms,ratio\n\
         Q0,500.0,250.0,0.5\n\
         Q1,125.0,250.0,2.0\n\
         Q2,250.0,250.0,1.0\n"
    );
}

#[test]
fn test_partial_rows_render_na() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", "Q0 completed in 100 ms\nQ5 completed in 70 ms\n");
    let second = write_log(&dir, "duckdb.log", "Q0 completed in 100 ms\n");
    let output = output_path(&dir);

    run(&first, &second, &output)
        .success()
        .stdout(predicate::str::contains(
            "Q5                    70 ms                N/A                  N/A",
        ))
        .stdout(predicate::str::contains(
            "TOTAL                100 ms             100 ms         1.00x faster",
        ));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.ends_with("Q5,70.0,,\n"));
}

#[test]
fn test_empty_log_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", "Error: database locked\n");
    let output = output_path(&dir);

    run(&first, &second, &output)
        .success()
        .stdout(predicate::str::contains(
            "Warning: No results parsed from DuckDB (1 thread) log",
        ))
        .stdout(predicate::str::contains("TOTAL").not())
        .stdout(predicate::str::contains("GEOMEAN").not());

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.contains("Q0,100.0,,\n"));
}

#[test]
fn test_both_logs_empty() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", "");
    let second = write_log(&dir, "duckdb.log", "");
    let output = output_path(&dir);

    run(&first, &second, &output)
        .success()
        .stdout(predicate::str::contains(
            "Warning: No results parsed from columnar-engine log",
        ))
        .stdout(predicate::str::contains(
            "Warning: No results parsed from DuckDB (1 thread) log",
        ));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Query,columnar_engine_ms,duckdb_ms,ratio\n"
    );
}

#[test]
fn test_default_output_location() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);

    benchcmp_cmd()
        .arg(&first)
        .arg(&second)
        .current_dir(dir.path())
        .assert()
        .success();

    let csv = dir
        .path()
        .join("benchmark-results")
        .join("benchmark_comparison.csv");
    assert!(csv.exists());
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    run(&first, &second, &output).success();
    let before = fs::read(&output).unwrap();
    run(&first, &second, &output).success();
    assert_eq!(before, fs::read(&output).unwrap());
}

#[test]
fn test_custom_labels() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "a.log", ENGINE_LOG);
    let second = write_log(&dir, "b.log", DUCKDB_LOG);
    let output = output_path(&dir);

    benchcmp_cmd()
        .arg(&first)
        .arg(&second)
        .args(["--output"])
        .arg(&output)
        .args(["--first-label", "new-engine", "--second-label", "old engine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BENCHMARK COMPARISON: new-engine vs old engine"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Query,new_engine_ms,old_engine_ms,ratio\n"));
}

#[test]
fn test_forced_run_time_format() {
    let dir = TempDir::new().unwrap();
    let first = write_log(
        &dir,
        "a.log",
        "Q0 completed in 1 ms\nRun Time (s): real 0.100\n",
    );
    let second = write_log(&dir, "b.log", "Run Time (s): real 0.200\n");
    let output = output_path(&dir);

    benchcmp_cmd()
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .args(["--first-format", "run-time"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.contains("Q0,100.0,200.0,2.0\n"));
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", "Q0 completed in 100 ms\nQ5 completed in 70 ms\n");
    let second = write_log(&dir, "duckdb.log", "Q0 completed in 50 ms\n");
    let output = output_path(&dir);

    let assert = benchcmp_cmd()
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .args(["--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("CSV saved to:"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");

    assert_eq!(json["labels"]["first"], "columnar-engine");
    assert_eq!(json["rows"][0]["query"], 0);
    assert_eq!(json["rows"][0]["ratio"], 0.5);
    assert!(json["rows"][1]["second_ms"].is_null());
    assert!(json["rows"][1]["ratio"].is_null());
    assert_eq!(json["summary"]["query_count"], 1);
    assert_eq!(json["summary"]["total_ratio"], 0.5);
}

// ===== Logging Tests =====

#[test]
fn test_rust_log_enables_core_diagnostics() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    benchcmp_cmd()
        .env("RUST_LOG", "benchcmp_core=debug")
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed timing table"))
        .stderr(predicate::str::contains("persisted comparison"));
}

#[test]
fn test_default_log_filter_is_quiet() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    benchcmp_cmd()
        .env_remove("RUST_LOG")
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ===== Error Tests =====

#[test]
fn test_missing_first_log() {
    let dir = TempDir::new().unwrap();
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    run(&dir.path().join("nope.log"), &second, &output)
        .failure()
        .stderr(predicate::str::contains("Cannot read log"))
        .stderr(predicate::str::contains("nope.log"))
        .stderr(predicate::str::contains("Usage: benchcmp"))
        .stdout(predicate::str::is_empty());

    assert!(!output.exists());
}

#[test]
fn test_missing_second_log() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let output = output_path(&dir);

    run(&first, &dir.path().join("missing.txt"), &output)
        .failure()
        .stderr(predicate::str::contains("missing.txt"))
        .stdout(predicate::str::is_empty());

    assert!(!output.exists());
}

#[test]
fn test_file_size_limit() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let output = output_path(&dir);

    benchcmp_cmd()
        .env("BENCHCMP_MAX_FILE_SIZE", "10")
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let first = write_log(&dir, "engine.log", ENGINE_LOG);
    let second = write_log(&dir, "duckdb.log", DUCKDB_LOG);
    let blocker = write_log(&dir, "blocker", "a file, not a directory");

    run(&first, &second, &blocker.join("cmp.csv"))
        .failure()
        .stderr(predicate::str::contains("Failed to save results"));
}
