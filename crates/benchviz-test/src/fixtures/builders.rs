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

//! Builder for in-memory result tables.

use benchviz_core::{Metric, ResultRecord, ResultTable};

/// Builder for customizable [`ResultTable`] fixtures.
///
/// # Examples
///
/// ```
/// use benchviz_core::Metric;
/// use benchviz_test::fixtures::builders::TableBuilder;
///
/// let table = TableBuilder::new()
///     .metric(Metric::Throughput)
///     .row("flink", "Q1", &[(Metric::ExecutionTime, 2.5)])
///     .build();
///
/// assert!(table.has_metric(Metric::Throughput));
/// assert_eq!(table.records()[0].get(Metric::Throughput), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: ResultTable,
}

impl TableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a metric column without giving it values.
    pub fn metric(mut self, metric: Metric) -> Self {
        self.table.add_metric(metric);
        self
    }

    /// Adds a row with the given metric values; all other metrics are missing.
    pub fn row(mut self, platform: &str, query: &str, values: &[(Metric, f64)]) -> Self {
        let record = values
            .iter()
            .fold(ResultRecord::new(platform, query), |record, (metric, value)| {
                record.with(*metric, *value)
            });
        self.table.push(record);
        self
    }

    /// Adds a row with only an execution time.
    pub fn timed(self, platform: &str, query: &str, seconds: f64) -> Self {
        self.row(platform, query, &[(Metric::ExecutionTime, seconds)])
    }

    /// Builds the table.
    pub fn build(self) -> ResultTable {
        self.table
    }
}

/// Two platforms by two queries with every metric present.
pub fn two_by_two() -> ResultTable {
    let full = |exec: f64, mem: f64, tput: f64| {
        [
            (Metric::ExecutionTime, exec),
            (Metric::MaxMemory, mem),
            (Metric::AvgMemory, mem / 2.0),
            (Metric::Throughput, tput),
        ]
    };
    TableBuilder::new()
        .row("a", "Q1", &full(1.0, 100.0, 10.0))
        .row("a", "Q2", &full(2.0, 200.0, 20.0))
        .row("b", "Q1", &full(3.0, 300.0, 30.0))
        .row("b", "Q2", &full(4.0, 400.0, 40.0))
        .build()
}
