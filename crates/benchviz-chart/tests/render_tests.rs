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

//! Rendering tests for benchviz-chart.
//!
//! Rasterizing text needs a sans-serif system font, so tests that draw are
//! ignored by default. Run them with `cargo test -- --ignored`.

use benchviz_chart::{
    plot_comparisons, render_metric_chart, render_summary_table, ChartConfig, SUMMARY_TABLE_FILE,
};
use benchviz_core::{Metric, ResultTable};
use benchviz_test::fixtures::builders::{two_by_two, TableBuilder};
use std::path::Path;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn assert_png(path: &Path) {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC, "{} is not a PNG", path.display());
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_one_image_per_metric_plus_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts");
    let report = plot_comparisons(Some(&two_by_two()), &out, &ChartConfig::default()).unwrap();

    let names: Vec<String> = report
        .written()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "comparison_execution.png",
            "comparison_max.png",
            "comparison_avg.png",
            "comparison_throughput.png",
            SUMMARY_TABLE_FILE,
        ]
    );
    for path in report.written() {
        assert_png(path);
    }
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_absent_metric_has_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let table = TableBuilder::new()
        .timed("a", "Q1", 1.0)
        .timed("b", "Q1", 3.0)
        .build();
    let report = plot_comparisons(Some(&table), dir.path(), &ChartConfig::default()).unwrap();

    assert_eq!(report.charts.len(), 1);
    assert!(dir.path().join("comparison_execution.png").is_file());
    assert!(!dir.path().join("comparison_throughput.png").exists());
    assert!(dir.path().join(SUMMARY_TABLE_FILE).is_file());
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_all_missing_metric_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let table = ResultTable::with_metrics([Metric::Throughput]);
    let path = dir.path().join("comparison_throughput.png");
    render_metric_chart(&table.pivot(Metric::Throughput), &path, &ChartConfig::default()).unwrap();
    assert_png(&path);
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_many_platforms_cycle_colors() {
    let dir = tempfile::tempdir().unwrap();
    let table = (0..14)
        .fold(TableBuilder::new(), |b, i| b.timed(&format!("p{:02}", i), "Q1", i as f64))
        .build();
    let path = dir.path().join("many.png");
    render_metric_chart(&table.pivot(Metric::ExecutionTime), &path, &ChartConfig::default())
        .unwrap();
    assert_png(&path);
}

#[test]
#[ignore = "requires a system sans-serif font"]
fn test_summary_table_size_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SUMMARY_TABLE_FILE);
    let config = ChartConfig {
        table_width: 900,
        summary_title: "Nightly Run".to_string(),
        ..Default::default()
    };
    render_summary_table(&two_by_two().summarize(), &path, &config).unwrap();
    assert_png(&path);
}

#[test]
fn test_unwritable_output_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("charts");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = plot_comparisons(Some(&two_by_two()), &blocker, &ChartConfig::default())
        .unwrap_err();
    assert!(matches!(err, benchviz_chart::ChartError::Io { .. }));
}
