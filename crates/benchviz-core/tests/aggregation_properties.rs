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

//! Property-based tests for pivot and summary aggregation.
//!
//! - Every pivot cell is the mean of the values sharing its (query, platform)
//! - Summary groups cover every row exactly once
//! - Missing values never turn into zeros

use benchviz_core::{Metric, ResultRecord, ResultTable};
use proptest::prelude::*;

// ===== Generators =====

fn platform() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["flink", "spark", "nebula"]).prop_map(str::to_string)
}

fn query() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Q1", "Q2", "Q3", "Q10"]).prop_map(str::to_string)
}

fn value() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0f64..10_000.0)
}

fn records() -> impl Strategy<Value = Vec<ResultRecord>> {
    prop::collection::vec(
        (platform(), query(), value(), value()).prop_map(|(p, q, time, throughput)| {
            let mut rec = ResultRecord::new(p, q);
            rec.values.set(Metric::ExecutionTime, time);
            rec.values.set(Metric::Throughput, throughput);
            rec
        }),
        0..40,
    )
}

fn table_of(records: Vec<ResultRecord>) -> ResultTable {
    let mut table = ResultTable::with_metrics([Metric::ExecutionTime, Metric::Throughput]);
    table.extend(records);
    table
}

fn expected_mean(records: &[ResultRecord], query: &str, platform: &str) -> Option<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter(|r| r.query == query && r.platform == platform)
        .filter_map(|r| r.get(Metric::ExecutionTime))
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_pivot_cells_are_means(records in records()) {
        let table = table_of(records.clone());
        let pivot = table.pivot(Metric::ExecutionTime);

        for query in pivot.queries() {
            for platform in pivot.platforms() {
                let expected = expected_mean(&records, query, platform);
                match (pivot.get(query, platform), expected) {
                    (Some(got), Some(want)) => prop_assert!((got - want).abs() < 1e-9),
                    (None, None) => {}
                    (got, want) => prop_assert!(false, "cell {:?} != {:?}", got, want),
                }
            }
        }
    }

    #[test]
    fn prop_pivot_keeps_only_keys_with_values(records in records()) {
        let table = table_of(records.clone());
        let pivot = table.pivot(Metric::ExecutionTime);

        for platform in pivot.platforms() {
            prop_assert!(records.iter().any(|r| &r.platform == platform
                && r.get(Metric::ExecutionTime).is_some()));
        }
        for query in pivot.queries() {
            prop_assert!(records.iter().any(|r| &r.query == query
                && r.get(Metric::ExecutionTime).is_some()));
        }
    }

    #[test]
    fn prop_summary_covers_every_row(records in records()) {
        let table = table_of(records);
        let summary = table.summarize();

        let runs: usize = summary.rows().iter().map(|r| r.runs).sum();
        prop_assert_eq!(runs, table.len());

        let mut keys: Vec<(String, String)> = summary
            .rows()
            .iter()
            .map(|r| (r.platform.clone(), r.query.clone()))
            .collect();
        let before = keys.clone();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys, before);
    }

    #[test]
    fn prop_missing_throughput_stays_missing(records in records()) {
        let table = table_of(records.clone());
        for row in table.summarize().rows() {
            let any_value = records.iter().any(|r| r.platform == row.platform
                && r.query == row.query
                && r.get(Metric::Throughput).is_some());
            prop_assert_eq!(row.values.get(Metric::Throughput).is_some(), any_value);
        }
    }
}
