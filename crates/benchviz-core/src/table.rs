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

//! The unified result table.

use crate::{Metric, ResultRecord};
use std::collections::BTreeSet;

/// Row-wise union of result records from every loaded file.
///
/// Besides the rows, the table remembers which metric columns appeared in
/// at least one source file. A metric can be present while every one of
/// its values is missing; it is absent only when no source had the column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    records: Vec<ResultRecord>,
    metrics: BTreeSet<Metric>,
}

impl ResultTable {
    /// Create an empty table with no metric columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table that declares the given metric columns.
    pub fn with_metrics(metrics: impl IntoIterator<Item = Metric>) -> Self {
        Self {
            records: Vec::new(),
            metrics: metrics.into_iter().collect(),
        }
    }

    /// Declare a metric column.
    pub fn add_metric(&mut self, metric: Metric) {
        self.metrics.insert(metric);
    }

    /// Append a row.
    ///
    /// Any metric the record carries a value for is declared as a column.
    pub fn push(&mut self, record: ResultRecord) {
        for (metric, value) in record.values.iter() {
            if value.is_some() {
                self.metrics.insert(metric);
            }
        }
        self.records.push(record);
    }

    /// Append all rows of `other` after the rows of `self`.
    pub fn append(&mut self, other: ResultTable) {
        self.metrics.extend(other.metrics);
        self.records.extend(other.records);
    }

    /// Concatenate tables in order.
    ///
    /// Returns `None` when `tables` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{Metric, ResultRecord, ResultTable};
    ///
    /// let mut a = ResultTable::new();
    /// a.push(ResultRecord::new("a", "Q1").with(Metric::ExecutionTime, 1.0));
    /// let mut b = ResultTable::with_metrics([Metric::Throughput]);
    /// b.push(ResultRecord::new("b", "Q1"));
    ///
    /// let all = ResultTable::concat([a, b]).unwrap();
    /// assert_eq!(all.len(), 2);
    /// assert!(all.has_metric(Metric::ExecutionTime));
    /// assert!(all.has_metric(Metric::Throughput));
    /// assert!(ResultTable::concat(Vec::new()).is_none());
    /// ```
    pub fn concat(tables: impl IntoIterator<Item = ResultTable>) -> Option<ResultTable> {
        let mut tables = tables.into_iter();
        let mut combined = tables.next()?;
        for table in tables {
            combined.append(table);
        }
        Some(combined)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in load order.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Whether the metric column is present.
    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Present metric columns, in metric order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics.iter().copied()
    }

    /// Distinct platforms, sorted.
    pub fn platforms(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.platform.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct queries, sorted.
    pub fn queries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.query.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Extend<ResultRecord> for ResultTable {
    fn extend<T: IntoIterator<Item = ResultRecord>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}
