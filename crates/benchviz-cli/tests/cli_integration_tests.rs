// Dweve BenchViz - Benchmark Result Visualization
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

//! CLI integration tests

use assert_cmd::Command;
use benchviz_test::{fixtures, ResultsDir};
use predicates::prelude::*;

// Test helper to create a benchviz command
fn benchviz_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchviz").expect("Failed to find benchviz binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchviz_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BenchViz - compare benchmark results across platforms",
        ))
        .stdout(predicate::str::contains("RESULTS_DIR"));
}

#[test]
fn test_version_output() {
    benchviz_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchviz"));
}

#[test]
fn test_extra_argument_fails() {
    let dir = ResultsDir::new();
    benchviz_cmd()
        .arg(dir.path())
        .arg("unexpected")
        .assert()
        .failure();
}

// ===== No Data Tests =====

#[test]
fn test_empty_directory_exits_cleanly() {
    let dir = ResultsDir::new();

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Looking for benchmark results in: {}",
            dir.path().display()
        )))
        .stdout(predicate::str::contains("No benchmark results found in"))
        .stdout(predicate::str::contains("No results to visualize."));

    assert!(!dir.charts_dir().exists());
}

#[test]
fn test_missing_directory_exits_cleanly() {
    let dir = ResultsDir::new();
    let missing = dir.path().join("nowhere");

    benchviz_cmd()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No results to visualize."));

    assert!(!missing.exists());
}

#[test]
fn test_invalid_files_are_reported() {
    let mut dir = ResultsDir::new();
    for (name, csv) in fixtures::errors::invalid_summary_samples() {
        dir = dir.summary(name, csv);
    }

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading").count(dir.summary_count()))
        .stdout(predicate::str::contains("No benchmark results found").not())
        .stdout(predicate::str::contains("No results to visualize."));

    assert!(!dir.charts_dir().exists());
}

#[test]
fn test_header_only_warns_no_data() {
    let dir = ResultsDir::new().summary("flink", fixtures::header_only());

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No valid data to plot"))
        .stdout(predicate::str::contains("Summary of results:"));

    assert!(!dir.charts_dir().exists());
}

#[test]
fn test_unwritable_charts_dir_fails() {
    let dir = ResultsDir::new()
        .summary("flink", fixtures::flink_summary())
        .file("charts", "not a directory");

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ===== Full Run Tests =====

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_full_run_writes_charts_and_summary() {
    let dir = ResultsDir::new()
        .summary("flink", fixtures::flink_summary())
        .summary("spark", fixtures::spark_summary())
        .summary("broken", fixtures::errors::missing_query_column());

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading"))
        .stdout(predicate::str::contains("benchmark_summary_broken.csv"))
        .stdout(predicate::str::contains("Generated comparison charts in"))
        .stdout(predicate::str::contains("Summary of results:"))
        .stdout(predicate::str::contains("flink     Q1"))
        .stdout(predicate::str::contains("N/A"));

    let charts = dir.charts_dir();
    for name in [
        "comparison_execution.png",
        "comparison_max.png",
        "comparison_avg.png",
        "comparison_throughput.png",
        "summary_table.png",
    ] {
        assert!(charts.join(name).is_file(), "missing {}", name);
    }
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_absent_metric_gets_no_chart() {
    let dir = ResultsDir::new().summary("flink", fixtures::flink_summary());

    benchviz_cmd().arg(dir.path()).assert().success();

    let charts = dir.charts_dir();
    assert!(charts.join("comparison_execution.png").is_file());
    assert!(!charts.join("comparison_throughput.png").exists());
    assert!(charts.join("summary_table.png").is_file());
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_blank_query_row_is_dropped_not_the_file() {
    let dir = ResultsDir::new()
        .summary("flink", fixtures::blank_query_row())
        .summary("spark", "Query,Execution Time (s)\nQ1,3.5\n");

    benchviz_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading").not())
        .stdout(predicate::str::contains("flink     Q3"))
        .stdout(predicate::str::contains("spark     Q1"))
        .stderr(predicate::str::contains("dropping row with a blank Query"))
        .stderr(predicate::str::contains("benchmark_summary_flink.csv"));

    assert!(dir.charts_dir().join("comparison_execution.png").is_file());
}
